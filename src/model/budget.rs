use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// A spending ceiling for one category over one period.
///
/// Serialized with the budget export's header names: `Category,Budget`.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BudgetItem {
    category: String,
    budget: Amount,
}

impl BudgetItem {
    pub fn new(category: impl Into<String>, budget: impl Into<Amount>) -> Self {
        Self {
            category: category.into(),
            budget: budget.into(),
        }
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn budget(&self) -> Amount {
        self.budget
    }
}
