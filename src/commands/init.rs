use crate::commands::Out;
use crate::error::{ErrorType, IntoResult};
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the home directory, if needed, and an initial `config.json` inside of it.
///
/// # Arguments
/// - `lens_home` - The directory that will hold the config and data files, e.g.
///   `$HOME/ledger-lens`
///
/// # Errors
/// - Returns an error if a config file already exists there.
/// - Returns an error if any file operations fail.
pub async fn init(lens_home: &Path) -> Result<Out<()>> {
    let config = Config::create(lens_home)
        .await
        .context("Unable to create the home directory and config")
        .pub_result(ErrorType::Config)?;
    Ok(format!(
        "Created {}. Put transactions.csv and budget.csv in {} to get started.",
        config.config_path().display(),
        config.root().display()
    )
    .into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::error_type;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_init() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let out = init(&home).await.unwrap();
        assert!(out.message().contains("config.json"), "{}", out.message());
        assert!(home.join("config.json").is_file());

        let err = init(&home).await.unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Config));
    }
}
