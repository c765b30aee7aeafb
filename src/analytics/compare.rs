//! Period-over-period comparison of `Analytics` against a baseline, and budget performance.

use crate::analytics::{percent_of, Analytics, CategoryAmount};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Budget performance percentages are capped here so that one runaway category does not dwarf the
/// rest of a chart.
pub const PERFORMANCE_CAP: Decimal = Decimal::from_parts(150, 0, 0, false, 0);

/// Monthly averages spread a period's spending over a twelve month year.
pub const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Spending figures for a period to compare against, such as the previous period or a historical
/// average. These are supplied from outside, they are not produced by `aggregate`.
///
/// Example:
/// ```json
/// {
///   "total_spending": 1950.25,
///   "top_categories": [{ "category": "Mortgage & Rent", "amount": 1247.44 }],
///   "monthly_spending": { "2018-01": 1793.03 }
/// }
/// ```
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Baseline {
    total_spending: Decimal,
    #[serde(default)]
    top_categories: Vec<CategoryAmount>,
    #[serde(default)]
    monthly_spending: BTreeMap<String, Decimal>,
}

impl Baseline {
    pub fn new(
        total_spending: Decimal,
        top_categories: Vec<CategoryAmount>,
        monthly_spending: BTreeMap<String, Decimal>,
    ) -> Self {
        Self {
            total_spending,
            top_categories,
            monthly_spending,
        }
    }

    pub fn total_spending(&self) -> Decimal {
        self.total_spending
    }

    pub fn top_categories(&self) -> &[CategoryAmount] {
        &self.top_categories
    }

    pub fn monthly_spending(&self) -> &BTreeMap<String, Decimal> {
        &self.monthly_spending
    }

    /// The baseline amount for `category`, taken from the first entry with exactly that name.
    fn category_amount(&self, category: &str) -> Decimal {
        self.top_categories
            .iter()
            .find(|entry| entry.category == category)
            .map(|entry| entry.amount)
            .unwrap_or_default()
    }
}

/// A top spending category in the current period next to its baseline amount.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryChange {
    pub category: String,
    pub current: Decimal,
    pub previous: Decimal,
    /// Percent change from `previous`, zero when there is no previous amount.
    pub change: Decimal,
}

/// Current spending for a month next to the baseline spending for the same month.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct MonthlyChange {
    pub month: String,
    pub current: Decimal,
    pub previous: Decimal,
    /// `current - previous`, in dollars.
    pub change: Decimal,
}

/// Headline movement between the current period and a baseline.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct PeriodChange {
    /// Percent change in total spending.
    pub total_spending_change: Decimal,
    /// Percent change in average monthly spending over a twelve month year.
    pub average_monthly_change: Decimal,
    /// How much less was spent than in the baseline. Negative when more was spent.
    pub saved: Decimal,
}

/// How much of its budget a category used, for categories with a positive budget.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BudgetPerformance {
    pub category: String,
    /// Percent of budget used, capped at `PERFORMANCE_CAP`.
    pub actual: Decimal,
    /// Always 100; the line a category should stay under.
    pub target: Decimal,
}

/// The change from `previous` to `current` as a percentage of `previous`, saturating on overflow.
fn percent_change(current: Decimal, previous: Decimal) -> Decimal {
    percent_of(current.saturating_sub(previous), previous)
}

/// Compares each of the current top categories against the baseline.
pub fn category_changes(analytics: &Analytics, baseline: &Baseline) -> Vec<CategoryChange> {
    analytics
        .top_categories()
        .iter()
        .map(|entry| {
            let previous = baseline.category_amount(&entry.category);
            CategoryChange {
                category: entry.category.clone(),
                current: entry.amount,
                previous,
                change: percent_change(entry.amount, previous),
            }
        })
        .collect()
}

/// Compares spending in each month of the current trend against the baseline's same month.
pub fn monthly_changes(analytics: &Analytics, baseline: &Baseline) -> Vec<MonthlyChange> {
    analytics
        .monthly_trend()
        .iter()
        .map(|trend| {
            let previous = baseline
                .monthly_spending()
                .get(&trend.month)
                .copied()
                .unwrap_or_default();
            MonthlyChange {
                month: trend.month.clone(),
                current: trend.spending,
                previous,
                change: trend.spending.saturating_sub(previous),
            }
        })
        .collect()
}

pub fn period_change(analytics: &Analytics, baseline: &Baseline) -> PeriodChange {
    let current = analytics.total_spending();
    let previous = baseline.total_spending();
    PeriodChange {
        total_spending_change: percent_change(current, previous),
        average_monthly_change: percent_change(
            current / MONTHS_PER_YEAR,
            previous / MONTHS_PER_YEAR,
        ),
        saved: previous.saturating_sub(current),
    }
}

/// Budget usage for every budgeted category, largest budget first.
pub fn budget_performance(analytics: &Analytics) -> Vec<BudgetPerformance> {
    let mut rows: Vec<_> = analytics
        .budget_comparison()
        .iter()
        .filter(|row| row.budget > Decimal::ZERO)
        .collect();
    rows.sort_by(|a, b| b.budget.cmp(&a.budget));
    rows.into_iter()
        .map(|row| BudgetPerformance {
            category: row.category.clone(),
            actual: row.percentage.min(PERFORMANCE_CAP),
            target: Decimal::ONE_HUNDRED,
        })
        .collect()
}
