use rust_decimal::Decimal;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::collections::HashMap;

/// A category paired with an amount of money.
#[derive(Debug, Clone, Default, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

impl CategoryAmount {
    pub fn new(category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            category: category.into(),
            amount,
        }
    }
}

/// Running totals per category that remember the order in which categories were first seen.
///
/// Serializes as a JSON object whose keys appear in first-seen order.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct CategoryTotals {
    entries: Vec<CategoryAmount>,
    index: HashMap<String, usize>,
}

impl CategoryTotals {
    /// Adds `amount` to the total for `category`, appending the category if it is new.
    pub fn add(&mut self, category: &str, amount: Decimal) {
        match self.index.get(category) {
            Some(&ix) => {
                let entry = &mut self.entries[ix];
                entry.amount = entry.amount.saturating_add(amount);
            }
            None => {
                self.index.insert(category.to_string(), self.entries.len());
                self.entries.push(CategoryAmount::new(category, amount));
            }
        }
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.index.get(category).map(|&ix| self.entries[ix].amount)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategoryAmount> {
        self.entries.iter()
    }

    /// The `n` largest totals, largest first. Equal totals keep their first-seen order.
    pub fn top(&self, n: usize) -> Vec<CategoryAmount> {
        let mut sorted = self.entries.clone();
        // slice::sort_by is stable
        sorted.sort_by(|a, b| b.amount.cmp(&a.amount));
        sorted.truncate(n);
        sorted
    }
}

impl Serialize for CategoryTotals {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.category, &entry.amount)?;
        }
        map.end()
    }
}

impl<'a> FromIterator<(&'a str, Decimal)> for CategoryTotals {
    fn from_iter<T: IntoIterator<Item = (&'a str, Decimal)>>(iter: T) -> Self {
        let mut totals = CategoryTotals::default();
        for (category, amount) in iter {
            totals.add(category, amount);
        }
        totals
    }
}
