use crate::analytics::{percent_of, Analytics, MONTHS_PER_YEAR};
use crate::commands::{load_analytics, money, percent, Out};
use crate::{Config, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// Headline figures for the whole data set.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Summary {
    pub total_spending: Decimal,
    pub total_income: Decimal,
    /// `total_income - total_spending`
    pub net: Decimal,
    pub total_transactions: usize,
    /// Total spending spread over a twelve month year.
    pub average_monthly_spending: Decimal,
    /// Percent of income not spent, zero when there is no income.
    pub savings_rate: Decimal,
}

impl Summary {
    pub fn new(analytics: &Analytics) -> Self {
        let spending = analytics.total_spending();
        let income = analytics.total_income();
        let net = income.saturating_sub(spending);
        let savings_rate = if income > Decimal::ZERO {
            percent_of(net, income)
        } else {
            Decimal::ZERO
        };
        Self {
            total_spending: spending,
            total_income: income,
            net,
            total_transactions: analytics.total_transactions(),
            average_monthly_spending: spending / MONTHS_PER_YEAR,
            savings_rate,
        }
    }

    fn render(&self) -> String {
        [
            ("Total spending", money(self.total_spending)),
            ("Total income", money(self.total_income)),
            ("Net", money(self.net)),
            ("Transactions", self.total_transactions.to_string()),
            ("Average monthly", money(self.average_monthly_spending)),
            ("Savings rate", percent(self.savings_rate)),
        ]
        .iter()
        .map(|(label, value)| format!("{label:<20}{value:>16}"))
        .collect::<Vec<_>>()
        .join("\n")
    }
}

/// Reports totals, the number of counted transactions, average monthly spending and the savings
/// rate.
pub async fn summary(config: Config) -> Result<Out<Summary>> {
    let analytics = load_analytics(&config)?;
    let summary = Summary::new(&analytics);
    Ok(Out::new(summary.render(), summary))
}
