//! Where transactions and budgets come from.
//!
//! Nothing in the crate holds default data. Callers hand `aggregate` their records directly or
//! through a `DataSource`, such as a pair of CSV exports or an in-memory `Dataset`.

use crate::analytics::{aggregate, Analytics};
use crate::model::{BudgetItem, Transaction};
use crate::Result;
use anyhow::Context;
use serde::de::DeserializeOwned;
use std::fmt::Debug;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supplies the records that analytics are computed from.
pub trait DataSource: Debug {
    fn transactions(&self) -> Result<Vec<Transaction>>;
    fn budget(&self) -> Result<Vec<BudgetItem>>;
}

/// Loads both collections from `source` and aggregates them.
pub fn analyze<S>(source: &S) -> Result<Analytics>
where
    S: DataSource + ?Sized,
{
    let transactions = source.transactions()?;
    let budget = source.budget()?;
    Ok(aggregate(&transactions, &budget))
}

/// Transactions and a budget that are already in memory.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct Dataset {
    transactions: Vec<Transaction>,
    budget: Vec<BudgetItem>,
}

impl Dataset {
    pub fn new(transactions: Vec<Transaction>, budget: Vec<BudgetItem>) -> Self {
        Self {
            transactions,
            budget,
        }
    }
}

impl DataSource for Dataset {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        Ok(self.transactions.clone())
    }

    fn budget(&self) -> Result<Vec<BudgetItem>> {
        Ok(self.budget.clone())
    }
}

/// A transactions export and a budget export, both CSV files with a header row.
///
/// Transactions: `Date,Description,Amount,Transaction Type,Category,Account Name`
///
/// Budget: `Category,Budget`
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct CsvSource {
    transactions: PathBuf,
    budget: PathBuf,
}

impl CsvSource {
    pub fn new(transactions: impl Into<PathBuf>, budget: impl Into<PathBuf>) -> Self {
        Self {
            transactions: transactions.into(),
            budget: budget.into(),
        }
    }

    pub fn transactions_path(&self) -> &Path {
        &self.transactions
    }

    pub fn budget_path(&self) -> &Path {
        &self.budget
    }
}

impl DataSource for CsvSource {
    fn transactions(&self) -> Result<Vec<Transaction>> {
        read_csv(&self.transactions)
    }

    fn budget(&self) -> Result<Vec<BudgetItem>> {
        read_csv(&self.budget)
    }
}

fn read_csv<T>(path: &Path) -> Result<Vec<T>>
where
    T: DeserializeOwned,
{
    let f = std::fs::File::open(path)
        .with_context(|| format!("Unable to open file {}", path.display()))?;
    let records = parse_csv(f).with_context(|| format!("Unable to load {}", path.display()))?;
    debug!("Loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

/// Parses CSV with a header row into records. Surrounding whitespace is trimmed and rows whose
/// first column is empty are skipped.
pub fn parse_csv<T, R>(reader: R) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: Read,
{
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(reader);
    let headers = rdr.headers().context("Unable to read the header row")?.clone();

    let mut records = Vec::new();
    for result in rdr.records() {
        let record = result?;
        if record.get(0).map_or(true, str::is_empty) {
            continue;
        }
        let line = record.position().map(|p| p.line()).unwrap_or_default();
        let item: T = record
            .deserialize(Some(&headers))
            .with_context(|| format!("Invalid record on line {line}"))?;
        records.push(item);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Amount, TransactionType};
    use crate::test::TestEnv;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const TRANSACTIONS: &str = "\
Date,Description,Amount,Transaction Type,Category,Account Name
01/01/2018,Amazon,11.11,debit,Shopping,Platinum Card
 01/03/2018 , Credit Card Payment , 2298.09 , credit , Credit Card Payment , Platinum Card
,orphan,1.00,debit,Shopping,Checking
01/12/2018,Salary,\"$4,500.00\",credit,Income,Checking
";

    #[test]
    fn test_parse_transactions() {
        let transactions: Vec<Transaction> = parse_csv(TRANSACTIONS.as_bytes()).unwrap();
        assert_eq!(transactions.len(), 3);
        assert_eq!(transactions[1].description(), "Credit Card Payment");
        assert_eq!(
            transactions[1].transaction_type(),
            TransactionType::Credit
        );
        assert_eq!(
            transactions[2].amount(),
            Amount::from_str("4500").unwrap()
        );
        assert_eq!(transactions[2].account_name(), "Checking");
    }

    #[test]
    fn test_parse_budget() {
        let csv = "Category,Budget\nGroceries,400\nDining, 300 \n\nUtilities,0\n";
        let budget: Vec<BudgetItem> = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(budget.len(), 3);
        assert_eq!(budget[1].category(), "Dining");
        assert_eq!(budget[1].budget().value(), Decimal::from(300));
        assert!(budget[2].budget().is_zero());
    }

    #[test]
    fn test_parse_bad_amount_reports_line() {
        let csv = "Category,Budget\nGroceries,400\nDining,lots\n";
        let err = parse_csv::<BudgetItem, _>(csv.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("line 3"), "{err:#}");
    }

    #[test]
    fn test_missing_optional_columns() {
        let csv = "Date,Amount,Transaction Type,Category\n02/01/2018,15.99,debit,Shopping\n";
        let transactions: Vec<Transaction> = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(transactions[0].description(), "");
        assert_eq!(transactions[0].account_name(), "");
    }

    #[test]
    fn test_dataset_analyze() {
        let dataset = Dataset::new(
            vec![Transaction::new(
                "01/02/2018",
                Decimal::new(124744, 2),
                TransactionType::Debit,
                "Mortgage & Rent",
            )],
            vec![BudgetItem::new("Mortgage & Rent", Decimal::from(1250))],
        );
        let analytics = analyze(&dataset).unwrap();
        assert_eq!(analytics.total_spending(), Decimal::new(124744, 2));
        assert_eq!(analytics.budget_comparison()[0].difference, Decimal::new(-256, 2));
    }

    #[tokio::test]
    async fn test_csv_source_analyze() {
        let env = TestEnv::new().await;
        let source = env.config().source();
        let analytics = analyze(&source).unwrap();
        assert_eq!(analytics.total_income(), Decimal::from(18000));
        assert_eq!(analytics.total_transactions(), 23);
    }

    #[test]
    fn test_csv_source_missing_file() {
        let source = CsvSource::new("/nonexistent/transactions.csv", "/nonexistent/budget.csv");
        let err = analyze(&source).unwrap_err();
        assert!(err.to_string().contains("Unable to open file"), "{err}");
    }
}
