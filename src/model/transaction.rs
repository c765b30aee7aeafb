use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// Whether money left (`debit`) or arrived in (`credit`) an account.
///
/// Exports occasionally carry other values in this column. Those are kept as `Other` so that the
/// record still loads; such a transaction counts as neither spending nor income.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    #[default]
    Debit,
    Credit,
    #[serde(other)]
    Other,
}

serde_plain::derive_display_from_serialize!(TransactionType);
serde_plain::derive_fromstr_from_deserialize!(TransactionType);

/// A single row of a transactions export.
///
/// The serialized field names match the CSV header row:
/// `Date,Description,Amount,Transaction Type,Category,Account Name`
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Transaction {
    /// The date as written in the export, `MM/DD/YYYY`.
    date: String,
    #[serde(default)]
    description: String,
    /// The magnitude of the transaction. The direction is given by `transaction_type`.
    amount: Amount,
    #[serde(rename = "Transaction Type")]
    transaction_type: TransactionType,
    category: String,
    #[serde(rename = "Account Name", default)]
    account_name: String,
}

impl Transaction {
    pub fn new(
        date: impl Into<String>,
        amount: impl Into<Amount>,
        transaction_type: TransactionType,
        category: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            description: String::new(),
            amount: amount.into(),
            transaction_type,
            category: category.into(),
            account_name: String::new(),
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_account_name(mut self, account_name: impl Into<String>) -> Self {
        self.account_name = account_name.into();
        self
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn transaction_type(&self) -> TransactionType {
        self.transaction_type
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn account_name(&self) -> &str {
        &self.account_name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_transaction_type_from_str() {
        assert_eq!(
            TransactionType::from_str("debit").unwrap(),
            TransactionType::Debit
        );
        assert_eq!(
            TransactionType::from_str("credit").unwrap(),
            TransactionType::Credit
        );
        assert_eq!(
            TransactionType::from_str("transfer").unwrap(),
            TransactionType::Other
        );
        assert_eq!(TransactionType::Credit.to_string(), "credit");
    }

    #[test]
    fn test_deserialize_json_row() {
        let json = r#"{
            "Date": "01/03/2018",
            "Description": "Credit Card Payment",
            "Amount": "2298.09",
            "Transaction Type": "credit",
            "Category": "Credit Card Payment",
            "Account Name": "Platinum Card"
        }"#;
        let t: Transaction = serde_json::from_str(json).unwrap();
        assert_eq!(t.date(), "01/03/2018");
        assert_eq!(t.amount(), Amount::from_str("2298.09").unwrap());
        assert_eq!(t.transaction_type(), TransactionType::Credit);
        assert_eq!(t.category(), "Credit Card Payment");
        assert_eq!(t.account_name(), "Platinum Card");
    }
}
