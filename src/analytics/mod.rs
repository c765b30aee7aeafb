//! The aggregation engine that turns a flat list of transactions and a budget into the
//! `Analytics` consumed by reports.
//!
//! `aggregate` is a pure function. It borrows its inputs, never mutates them and builds every
//! output structure from scratch, so concurrent calls need no coordination.

mod compare;
mod palette;
mod totals;

use crate::model::{month_key, BudgetItem, Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, trace};

pub use compare::{
    budget_performance, category_changes, monthly_changes, period_change, Baseline,
    BudgetPerformance, CategoryChange, MonthlyChange, PeriodChange, MONTHS_PER_YEAR,
    PERFORMANCE_CAP,
};
pub use palette::{category_color, DEFAULT_COLOR};
pub use totals::{CategoryAmount, CategoryTotals};

/// The most categories that `top_categories` will hold.
pub const TOP_CATEGORY_LIMIT: usize = 8;

/// A debit is spending unless its category contains this text.
pub const CARD_PAYMENT_MARKER: &str = "Credit Card Payment";

/// A credit is income only if its category contains this text.
pub const INCOME_MARKER: &str = "Income";

/// Spending and income for one `YYYY-MM` month.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct MonthlyTrend {
    pub month: String,
    pub spending: Decimal,
    pub income: Decimal,
}

/// How actual spending in a category measured up against its budget.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct BudgetComparison {
    pub category: String,
    pub budget: Decimal,
    pub actual: Decimal,
    /// `actual - budget`; positive when over budget.
    pub difference: Decimal,
    /// `actual / budget * 100`, or zero when the budget is not positive.
    pub percentage: Decimal,
}

impl BudgetComparison {
    fn new(item: &BudgetItem, actual: Decimal) -> Self {
        let budget = item.budget().value();
        let percentage = if budget > Decimal::ZERO {
            percent_of(actual, budget)
        } else {
            Decimal::ZERO
        };
        Self {
            category: item.category().to_string(),
            budget,
            actual,
            difference: actual.saturating_sub(budget),
            percentage,
        }
    }
}

/// Everything derived from one set of transactions and one budget.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize)]
pub struct Analytics {
    total_spending: Decimal,
    total_income: Decimal,
    total_transactions: usize,
    top_categories: Vec<CategoryAmount>,
    category_spending: CategoryTotals,
    monthly_spending: BTreeMap<String, Decimal>,
    monthly_income: BTreeMap<String, Decimal>,
    monthly_trend: Vec<MonthlyTrend>,
    budget_comparison: Vec<BudgetComparison>,
}

impl Analytics {
    /// Debits outside of credit card payments.
    pub fn total_spending(&self) -> Decimal {
        self.total_spending
    }

    /// Credits in income categories.
    pub fn total_income(&self) -> Decimal {
        self.total_income
    }

    /// The number of transactions counted as either spending or income.
    pub fn total_transactions(&self) -> usize {
        self.total_transactions
    }

    /// Up to `TOP_CATEGORY_LIMIT` spending categories, largest first.
    pub fn top_categories(&self) -> &[CategoryAmount] {
        &self.top_categories
    }

    pub fn category_spending(&self) -> &CategoryTotals {
        &self.category_spending
    }

    pub fn monthly_spending(&self) -> &BTreeMap<String, Decimal> {
        &self.monthly_spending
    }

    pub fn monthly_income(&self) -> &BTreeMap<String, Decimal> {
        &self.monthly_income
    }

    /// One entry per month that saw spending or income, oldest first.
    pub fn monthly_trend(&self) -> &[MonthlyTrend] {
        &self.monthly_trend
    }

    /// One entry per budget item, in budget order.
    pub fn budget_comparison(&self) -> &[BudgetComparison] {
        &self.budget_comparison
    }
}

/// `part` as a percentage of `whole`, or zero when `whole` is zero. A result too large for a
/// `Decimal` saturates to `Decimal::MAX` or `Decimal::MIN`.
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    part.checked_div(whole)
        .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
        .unwrap_or(if part.is_sign_negative() == whole.is_sign_negative() {
            Decimal::MAX
        } else {
            Decimal::MIN
        })
}

/// Whether a transaction counts toward spending. Card payments are debits too, but counting them
/// would count the purchases they pay for twice.
pub fn is_spending(t: &Transaction) -> bool {
    t.transaction_type() == TransactionType::Debit && !t.category().contains(CARD_PAYMENT_MARKER)
}

/// Whether a transaction counts toward income.
pub fn is_income(t: &Transaction) -> bool {
    t.transaction_type() == TransactionType::Credit && t.category().contains(INCOME_MARKER)
}

/// Computes `Analytics` for `transactions` measured against `budget`.
///
/// Category matching is by substring: any debit whose category contains `Credit Card Payment` is
/// excluded from spending and any credit whose category contains `Income` is income. Transactions
/// that are neither are ignored entirely. Amounts are not validated.
///
/// This never panics. Sums and percentages that would overflow a `Decimal` saturate to
/// `Decimal::MAX` (or `Decimal::MIN`) instead.
pub fn aggregate(transactions: &[Transaction], budget: &[BudgetItem]) -> Analytics {
    let spending: Vec<&Transaction> = transactions.iter().filter(|t| is_spending(t)).collect();
    let income: Vec<&Transaction> = transactions.iter().filter(|t| is_income(t)).collect();
    trace!(
        "Partitioned {} transactions into {} spending and {} income",
        transactions.len(),
        spending.len(),
        income.len()
    );

    let category_spending: CategoryTotals = spending
        .iter()
        .map(|t| (t.category(), t.amount().value()))
        .collect();

    let monthly_spending = sum_by_month(&spending);
    let monthly_income = sum_by_month(&income);
    let months: BTreeSet<&String> = monthly_spending
        .keys()
        .chain(monthly_income.keys())
        .collect();
    let monthly_trend = months
        .into_iter()
        .map(|month| MonthlyTrend {
            month: month.clone(),
            spending: monthly_spending.get(month).copied().unwrap_or_default(),
            income: monthly_income.get(month).copied().unwrap_or_default(),
        })
        .collect();

    let budget_comparison = budget
        .iter()
        .map(|item| {
            let actual = category_spending
                .get(item.category())
                .unwrap_or_default();
            BudgetComparison::new(item, actual)
        })
        .collect();

    let analytics = Analytics {
        total_spending: sum(&spending),
        total_income: sum(&income),
        total_transactions: spending.len() + income.len(),
        top_categories: category_spending.top(TOP_CATEGORY_LIMIT),
        category_spending,
        monthly_spending,
        monthly_income,
        monthly_trend,
        budget_comparison,
    };
    debug!(
        "Aggregated {} transactions across {} categories and {} months",
        analytics.total_transactions,
        analytics.category_spending.len(),
        analytics.monthly_trend.len()
    );
    analytics
}

fn sum(transactions: &[&Transaction]) -> Decimal {
    transactions
        .iter()
        .fold(Decimal::ZERO, |total, t| total.saturating_add(t.amount().value()))
}

fn sum_by_month(transactions: &[&Transaction]) -> BTreeMap<String, Decimal> {
    let mut totals = BTreeMap::new();
    for t in transactions {
        let total = totals.entry(month_key(t.date())).or_insert(Decimal::ZERO);
        *total = total.saturating_add(t.amount().value());
    }
    totals
}
