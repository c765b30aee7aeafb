use crate::analytics::{budget_performance, BudgetComparison, BudgetPerformance};
use crate::commands::{load_analytics, money, percent, Out};
use crate::{Config, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// Budget variance for every budget item plus the capped performance of budgeted categories.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct BudgetReport {
    pub comparison: Vec<BudgetComparison>,
    pub performance: Vec<BudgetPerformance>,
}

impl BudgetReport {
    fn render(&self) -> String {
        if self.comparison.is_empty() {
            return String::from("The budget is empty");
        }
        let mut lines = vec![format!(
            "{:<24}{:>14}{:>14}{:>14}{:>9}",
            "Category", "Budget", "Actual", "Difference", "Used"
        )];
        for row in &self.comparison {
            let flag = if row.difference > Decimal::ZERO {
                "  over"
            } else {
                ""
            };
            lines.push(format!(
                "{:<24}{:>14}{:>14}{:>14}{:>9}{flag}",
                row.category,
                money(row.budget),
                money(row.actual),
                money(row.difference),
                percent(row.percentage),
            ));
        }
        lines.join("\n")
    }
}

/// Compares actual spending with every item of the budget. Spending in categories that have no
/// budget item is not reported here.
pub async fn budget(config: Config) -> Result<Out<BudgetReport>> {
    let analytics = load_analytics(&config)?;
    let report = BudgetReport {
        comparison: analytics.budget_comparison().to_vec(),
        performance: budget_performance(&analytics),
    };
    Ok(Out::new(report.render(), report))
}
