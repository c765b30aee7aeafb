//! Shared test utilities for creating test environments.
//!
//! This module is only compiled when running tests (`#[cfg(test)]`).

use crate::analytics::Baseline;
use crate::model::{BudgetItem, Transaction};
use crate::source::parse_csv;
use crate::{utils, Config};
use tempfile::TempDir;

/// Two months of household transactions, including a card payment that is neither spending nor
/// income.
pub const SAMPLE_TRANSACTIONS_CSV: &str = "\
Date,Description,Amount,Transaction Type,Category,Account Name
01/01/2018,Amazon,11.11,debit,Shopping,Platinum Card
01/02/2018,Mortgage Payment,1247.44,debit,Mortgage & Rent,Checking
01/02/2018,Thai Restaurant,24.22,debit,Restaurants,Silver Card
01/03/2018,Credit Card Payment,2298.09,credit,Credit Card Payment,Platinum Card
01/04/2018,Netflix,11.76,debit,Entertainment,Platinum Card
01/05/2018,American Tavern,25.85,debit,Dining,Silver Card
01/06/2018,Hardware Store,18.45,debit,Home Improvement,Silver Card
01/08/2018,Gas Company,45.00,debit,Utilities,Checking
01/09/2018,Spotify,10.69,debit,Entertainment,Platinum Card
01/10/2018,Phone Company,89.46,debit,Utilities,Checking
01/11/2018,Shell,34.87,debit,Transportation,Platinum Card
01/11/2018,Grocery Store,43.54,debit,Groceries,Platinum Card
01/12/2018,Salary,4500.00,credit,Income,Checking
01/13/2018,Pizza Place,32.91,debit,Dining,Platinum Card
01/15/2018,Grocery Store,44.19,debit,Groceries,Silver Card
01/15/2018,American Tavern,64.11,debit,Dining,Silver Card
01/16/2018,City Water,35.00,debit,Utilities,Checking
01/16/2018,Power Company,60.00,debit,Utilities,Checking
01/19/2018,Salary,4500.00,credit,Income,Checking
01/20/2018,Amazon,50.21,debit,Shopping,Platinum Card
02/01/2018,Amazon,15.99,debit,Shopping,Platinum Card
02/02/2018,Mortgage Payment,1247.44,debit,Mortgage & Rent,Checking
02/12/2018,Salary,4500.00,credit,Income,Checking
02/19/2018,Salary,4500.00,credit,Income,Checking
";

pub const SAMPLE_BUDGET_CSV: &str = "\
Category,Budget
Groceries,400
Dining,300
Shopping,200
Mortgage & Rent,1250
Utilities,300
Transportation,200
Entertainment,100
Home Improvement,150
";

pub const PREVIOUS_PERIOD_JSON: &str = r#"{
  "total_spending": 1950.25,
  "top_categories": [
    { "category": "Mortgage & Rent", "amount": 1247.44 },
    { "category": "Dining", "amount": 280.45 },
    { "category": "Groceries", "amount": 120.30 },
    { "category": "Shopping", "amount": 95.67 },
    { "category": "Utilities", "amount": 85.20 },
    { "category": "Transportation", "amount": 45.89 },
    { "category": "Entertainment", "amount": 35.90 },
    { "category": "Other", "amount": 39.40 }
  ],
  "monthly_spending": {
    "2018-01": 1793.03,
    "2018-02": 1650.45,
    "2018-03": 1720.89
  }
}"#;

pub const AVERAGE_JSON: &str = r#"{
  "total_spending": 1850.00,
  "top_categories": [
    { "category": "Mortgage & Rent", "amount": 1200.00 },
    { "category": "Dining", "amount": 200.00 },
    { "category": "Groceries", "amount": 150.00 },
    { "category": "Shopping", "amount": 100.00 },
    { "category": "Utilities", "amount": 100.00 },
    { "category": "Transportation", "amount": 50.00 },
    { "category": "Entertainment", "amount": 50.00 }
  ],
  "monthly_spending": {
    "2018-01": 1800.00,
    "2018-02": 1750.00,
    "2018-03": 1850.00
  }
}"#;

pub fn sample_transactions() -> Vec<Transaction> {
    parse_csv(SAMPLE_TRANSACTIONS_CSV.as_bytes()).unwrap()
}

pub fn sample_budget() -> Vec<BudgetItem> {
    parse_csv(SAMPLE_BUDGET_CSV.as_bytes()).unwrap()
}

pub fn previous_period() -> Baseline {
    serde_json::from_str(PREVIOUS_PERIOD_JSON).unwrap()
}

/// Test environment that sets up a home directory with a Config and the sample data files.
/// Holds TempDir to keep the directory alive for the duration of the test.
pub struct TestEnv {
    _temp_dir: TempDir,
    config: Config,
}

impl TestEnv {
    /// Creates a home directory with the default config, sample transactions, sample budget and
    /// both baselines.
    pub async fn new() -> Self {
        let env = Self::empty().await;
        env.write("transactions.csv", SAMPLE_TRANSACTIONS_CSV).await;
        env.write("budget.csv", SAMPLE_BUDGET_CSV).await;
        env.write("previous.json", PREVIOUS_PERIOD_JSON).await;
        env.write("average.json", AVERAGE_JSON).await;
        env
    }

    /// Creates a home directory with the default config and no data files.
    pub async fn empty() -> Self {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("lens");
        let config = Config::create(&root).await.unwrap();
        Self {
            _temp_dir: temp_dir,
            config,
        }
    }

    /// Returns a clone of the Config.
    pub fn config(&self) -> Config {
        self.config.clone()
    }

    /// Writes `contents` to `name` inside the home directory, replacing any existing file.
    pub async fn write(&self, name: &str, contents: &str) {
        utils::write(self.config.root().join(name), contents)
            .await
            .unwrap();
    }
}
