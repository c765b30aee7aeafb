//! Spending analytics for exported transactions and budgets.
//!
//! The heart of the crate is [`analytics::aggregate`], a pure function from transactions and a
//! budget to [`analytics::Analytics`]. Everything else loads data for it or reports on its output.

pub mod analytics;
pub mod args;
pub mod commands;
mod config;
mod error;
pub mod model;
pub mod source;
mod utils;

#[cfg(test)]
mod test;

pub use analytics::{aggregate, Analytics};
pub use config::Config;
pub use error::{error_type, Error, ErrorType, IntoResult, Result};
pub use source::{analyze, CsvSource, DataSource, Dataset};
