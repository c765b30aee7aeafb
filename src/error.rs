//! Error handling for ledger-lens.
//!
//! Everything uses `anyhow::Error`. Commands classify the failures they surface with an
//! `ErrorType` which is attached as context so that `main` can report what kind of problem ended
//! the program.

use serde::{Deserialize, Serialize};

pub type Error = anyhow::Error;
pub type Result<T> = std::result::Result<T, Error>;

/// The broad categories of failure that a command can report.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// The configuration file or home directory is missing or invalid.
    Config,
    /// Transaction, budget or baseline data could not be loaded.
    Data,
    /// A filesystem operation failed.
    Io,
    /// Output could not be produced.
    Render,
}

serde_plain::derive_display_from_serialize!(ErrorType);
serde_plain::derive_fromstr_from_deserialize!(ErrorType);

/// Attaches an `ErrorType` to the error of a `Result` before it leaves a command.
pub trait IntoResult<T> {
    fn pub_result(self, error_type: ErrorType) -> Result<T>;
}

impl<T, E> IntoResult<T> for std::result::Result<T, E>
where
    E: Into<Error>,
{
    fn pub_result(self, error_type: ErrorType) -> Result<T> {
        self.map_err(|e| {
            let e: Error = e.into();
            e.context(error_type)
        })
    }
}

/// Finds the `ErrorType` attached by `pub_result`, if there is one.
pub fn error_type(e: &Error) -> Option<ErrorType> {
    e.downcast_ref::<ErrorType>().copied()
}
