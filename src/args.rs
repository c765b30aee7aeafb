//! These structs provide the CLI interface for the lens CLI.

use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt::{Display, Formatter};
use std::ops::Deref;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;
use tracing_subscriber::filter::LevelFilter;

/// lens: spending analytics for exported transactions.
///
/// Point lens at a CSV export of your transactions and a CSV budget and it reports where the money
/// went: totals, the biggest spending categories, month by month trends, how each category did
/// against its budget and how this period compares with a previous one.
///
/// Run `lens init` first to create $LENS_HOME/config.json, then drop transactions.csv and
/// budget.csv (and optionally previous.json and average.json) next to it.
#[derive(Debug, Parser, Clone)]
pub struct Args {
    #[clap(flatten)]
    common: Common,

    #[command(subcommand)]
    command: Command,
}

impl Args {
    pub fn new(common: Common, command: Command) -> Self {
        Self { common, command }
    }

    pub fn common(&self) -> &Common {
        &self.common
    }

    pub fn command(&self) -> &Command {
        &self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Create the home directory and a default config.json.
    Init,
    /// Totals, transaction count, average monthly spending and savings rate.
    Summary,
    /// Spending per category, largest first.
    Categories(CategoriesArgs),
    /// Spending and income per month, oldest first.
    Trend,
    /// Each budget item against actual spending.
    Budget,
    /// Compare spending with a previous period or a historical average.
    Compare(CompareArgs),
}

/// Arguments common to all subcommands.
#[derive(Debug, Parser, Clone)]
pub struct Common {
    /// The logging verbosity. One of, from least to most verbose:
    /// off, error, warn, info, debug, trace
    ///
    /// This can be overridden by RUST_LOG.
    #[arg(long, default_value_t = LevelFilter::INFO)]
    log_level: LevelFilter,

    /// The directory where the config and data files are held. Defaults to ~/ledger-lens
    #[arg(long, env = "LENS_HOME", default_value_t = default_lens_home())]
    lens_home: DisplayPath,

    /// How to print results: text or json
    #[arg(long, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

impl Common {
    pub fn new(log_level: LevelFilter, lens_home: PathBuf, format: OutputFormat) -> Self {
        Self {
            log_level,
            lens_home: lens_home.into(),
            format,
        }
    }

    pub fn log_level(&self) -> LevelFilter {
        self.log_level
    }

    pub fn lens_home(&self) -> &DisplayPath {
        &self.lens_home
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }
}

/// How command output is written to stdout.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Human readable tables.
    #[default]
    Text,
    /// The structured result as pretty JSON.
    Json,
}

serde_plain::derive_display_from_serialize!(OutputFormat);
serde_plain::derive_fromstr_from_deserialize!(OutputFormat);

/// What period spending is compared against.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Against {
    /// The previous period.
    #[default]
    Previous,
    /// A historical average.
    Average,
}

serde_plain::derive_display_from_serialize!(Against);
serde_plain::derive_fromstr_from_deserialize!(Against);

/// (Not shown): Args for the `lens categories` command.
#[derive(Debug, Parser, Clone)]
pub struct CategoriesArgs {
    /// Show every spending category instead of only the top categories.
    #[arg(long)]
    all: bool,
}

impl CategoriesArgs {
    pub fn new(all: bool) -> Self {
        Self { all }
    }

    pub fn all(&self) -> bool {
        self.all
    }
}

/// (Not shown): Args for the `lens compare` command.
#[derive(Debug, Parser, Clone)]
pub struct CompareArgs {
    /// The baseline to compare against: "previous" or "average"
    #[arg(long, default_value_t = Against::Previous)]
    against: Against,
}

impl CompareArgs {
    pub fn new(against: Against) -> Self {
        Self { against }
    }

    pub fn against(&self) -> Against {
        self.against
    }
}

fn default_lens_home() -> DisplayPath {
    DisplayPath(match dirs::home_dir() {
        Some(home) => home.join("ledger-lens"),
        None => {
            error!(
                "There was an error when trying to get your home directory. You can get around \
                this by providing --lens-home or LENS_HOME instead of relying on the default \
                home directory. If you continue using the program right now, you may have \
                problems!",
            );
            PathBuf::from("ledger-lens")
        }
    })
}

#[derive(Debug, Default, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct DisplayPath(PathBuf);

impl From<PathBuf> for DisplayPath {
    fn from(value: PathBuf) -> Self {
        DisplayPath(value)
    }
}

impl Deref for DisplayPath {
    type Target = Path;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<Path> for DisplayPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl Display for DisplayPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_string_lossy())
    }
}

impl FromStr for DisplayPath {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(PathBuf::from(s)))
    }
}

impl DisplayPath {
    pub fn path(&self) -> &Path {
        &self.0
    }
}
