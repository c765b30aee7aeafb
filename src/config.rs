//! Configuration file handling for ledger-lens.
//!
//! The configuration file is stored at `$LENS_HOME/config.json` and says where the transactions
//! export, the budget and the comparison baselines live.

use crate::analytics::Baseline;
use crate::args::Against;
use crate::source::CsvSource;
use crate::{utils, Result};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const APP_NAME: &str = "ledger-lens";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const TRANSACTIONS_CSV: &str = "transactions.csv";
const BUDGET_CSV: &str = "budget.csv";
const PREVIOUS_JSON: &str = "previous.json";
const AVERAGE_JSON: &str = "average.json";

/// The `Config` object represents the configuration of the app. You instantiate it by providing
/// the path to `$LENS_HOME` and from there it loads `$LENS_HOME/config.json`. Every data file path
/// it hands out has already been resolved against `$LENS_HOME`.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    config_file: ConfigFile,
}

impl Config {
    /// Creates the home directory, if needed, and writes an initial `config.json` that expects the
    /// data files at their default names inside of it.
    ///
    /// # Errors
    /// - Returns an error if `config.json` already exists.
    /// - Returns an error if any file operations fail.
    pub async fn create(dir: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("Unable to create the home directory")?;
        let root = utils::canonicalize(&maybe_relative).await?;

        let config_path = root.join(CONFIG_JSON);
        if config_path.exists() {
            bail!("A config file already exists at '{}'", config_path.display())
        }

        let config_file = ConfigFile::default();
        config_file.save(&config_path).await?;
        debug!("Wrote {}", config_path.display());

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    /// Validates that `home` and its config file exist, then loads the config file.
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("The home directory is missing")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            bail!(
                "The config file is missing '{}', run 'lens init' to create it",
                config_path.display()
            )
        }
        let config_file = ConfigFile::load(&config_path).await?;

        Ok(Self {
            root,
            config_path,
            config_file,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    pub fn transactions_path(&self) -> PathBuf {
        self.resolve(&self.config_file.transactions_path)
    }

    pub fn budget_path(&self) -> PathBuf {
        self.resolve(&self.config_file.budget_path)
    }

    /// The path of the baseline file for `against`, if one is configured.
    pub fn baseline_path(&self, against: Against) -> Option<PathBuf> {
        let p = match against {
            Against::Previous => self.config_file.previous_period_path.as_ref(),
            Against::Average => self.config_file.average_path.as_ref(),
        };
        p.map(|p| self.resolve(p))
    }

    /// The CSV exports named by this configuration.
    pub fn source(&self) -> CsvSource {
        CsvSource::new(self.transactions_path(), self.budget_path())
    }

    /// Loads the baseline to compare against.
    pub async fn baseline(&self, against: Against) -> Result<Baseline> {
        let Some(path) = self.baseline_path(against) else {
            bail!(
                "No {against} baseline is configured in '{}'",
                self.config_path.display()
            )
        };
        utils::deserialize(&path)
            .await
            .with_context(|| format!("Unable to load the {against} baseline"))
    }

    /// Returns `p` unchanged if it is absolute, otherwise resolves it against the home directory.
    fn resolve(&self, p: &Path) -> PathBuf {
        if p.is_absolute() {
            return p.to_path_buf();
        }
        self.root.join(p)
    }
}

/// Represents the serialization and deserialization format of the configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "ledger-lens",
///   "config_version": 1,
///   "transactions_path": "transactions.csv",
///   "budget_path": "budget.csv",
///   "previous_period_path": "previous.json",
///   "average_path": "/srv/finance/average.json"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "ledger-lens"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// Path to the transactions CSV export (relative to `$LENS_HOME` or absolute)
    transactions_path: PathBuf,

    /// Path to the budget CSV (relative to `$LENS_HOME` or absolute)
    budget_path: PathBuf,

    /// Path to the previous period baseline JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    previous_period_path: Option<PathBuf>,

    /// Path to the historical average baseline JSON
    #[serde(default, skip_serializing_if = "Option::is_none")]
    average_path: Option<PathBuf>,
}

impl Default for ConfigFile {
    fn default() -> Self {
        Self {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            transactions_path: PathBuf::from(TRANSACTIONS_CSV),
            budget_path: PathBuf::from(BUDGET_CSV),
            previous_period_path: Some(PathBuf::from(PREVIOUS_JSON)),
            average_path: Some(PathBuf::from(AVERAGE_JSON)),
        }
    }
}

impl ConfigFile {
    /// Loads and validates a ConfigFile from the specified path.
    async fn load(path: &Path) -> Result<Self> {
        let config: ConfigFile = utils::deserialize(path)
            .await
            .context("Unable to load the config file")?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "Invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );
        anyhow::ensure!(
            config.config_version == CONFIG_VERSION,
            "Unsupported config_version {} in config file, expected {}",
            config.config_version,
            CONFIG_VERSION
        );

        Ok(config)
    }

    async fn save(&self, path: &Path) -> Result<()> {
        utils::serialize(path, self)
            .await
            .context("Unable to write config file")
    }
}
