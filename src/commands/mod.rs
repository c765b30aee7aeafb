//! Command handlers for the lens CLI.
//!
//! Each command loads what it needs through `Config`, runs the aggregation and returns an `Out`
//! holding both a printable report and the structured result.

mod budget;
mod categories;
mod compare;
mod init;
mod summary;
mod trend;

use crate::analytics::Analytics;
use crate::args::OutputFormat;
use crate::error::{ErrorType, IntoResult};
use crate::model::Amount;
use crate::source::analyze;
use crate::{Config, Result};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;
use std::fmt::Debug;
use tracing::debug;

pub use budget::{budget, BudgetReport};
pub use categories::{categories, CategoryRow};
pub use compare::{compare, Comparison};
pub use init::init;
pub use summary::{summary, Summary};
pub use trend::trend;

/// The output type for a command. This allows the command to return a consistent message and,
/// optionally, structured data.
#[derive(Debug, Clone, Serialize)]
pub struct Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// A message that can be printed to the user regarding the outcome of the command execution.
    message: String,

    /// Any structured data that needs to be output from the call.
    structure: Option<T>,
}

impl<T, S> From<S> for Out<T>
where
    T: Debug + Clone + Serialize,
    S: Into<String>,
{
    fn from(value: S) -> Self {
        Out::new_message(value)
    }
}

impl<T> Out<T>
where
    T: Serialize + Clone + Debug,
{
    /// Create a new `Out` object that has `Some(structure)`.
    pub fn new<S>(message: S, structure: T) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: Some(structure),
        }
    }

    /// Create a new `Out` object that has `None` for `structure`.
    pub fn new_message<S>(message: S) -> Self
    where
        S: Into<String>,
    {
        Self {
            message: message.into(),
            structure: None,
        }
    }

    /// Get the `message`.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the structured data stored in `structure`.
    pub fn structure(&self) -> Option<&T> {
        self.structure.as_ref()
    }

    /// Renders the output for stdout: the structured data as JSON when `format` asks for it and
    /// there is some, otherwise the message.
    pub fn render(&self, format: OutputFormat) -> Result<String> {
        match (format, self.structure()) {
            (OutputFormat::Json, Some(structure)) => serde_json::to_string_pretty(structure)
                .map_err(anyhow::Error::from)
                .pub_result(ErrorType::Render),
            _ => Ok(self.message.clone()),
        }
    }

    /// Print the rendered output to stdout.
    pub fn print(&self, format: OutputFormat) -> Result<()> {
        println!("{}", self.render(format)?);
        Ok(())
    }
}

/// Loads the configured data and aggregates it.
fn load_analytics(config: &Config) -> Result<Analytics> {
    let source = config.source();
    debug!(
        "Reading {} and {}",
        source.transactions_path().display(),
        source.budget_path().display()
    );
    analyze(&source).pub_result(ErrorType::Data)
}

fn money(value: Decimal) -> String {
    Amount::new(value).to_string()
}

/// A percent rounded half away from zero to one decimal place, e.g. `99.8%`.
fn percent(value: Decimal) -> String {
    let rounded = value.round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{rounded:.1}%")
}

/// A percent with an explicit sign, e.g. `+4.2%`.
fn signed_percent(value: Decimal) -> String {
    if value > Decimal::ZERO {
        format!("+{}", percent(value))
    } else {
        percent(value)
    }
}
