use crate::analytics::MonthlyTrend;
use crate::commands::{load_analytics, money, Out};
use crate::model::month_label;
use crate::{Config, Result};

fn render(trend: &[MonthlyTrend]) -> String {
    if trend.is_empty() {
        return String::from("No spending or income found");
    }
    let mut lines = vec![format!(
        "{:<12}{:>14}{:>14}{:>14}",
        "Month", "Spending", "Income", "Net"
    )];
    for month in trend {
        lines.push(format!(
            "{:<12}{:>14}{:>14}{:>14}",
            month_label(&month.month),
            money(month.spending),
            money(month.income),
            money(month.income.saturating_sub(month.spending))
        ));
    }
    lines.join("\n")
}

/// Reports spending and income for every month that had either, oldest first.
pub async fn trend(config: Config) -> Result<Out<Vec<MonthlyTrend>>> {
    let analytics = load_analytics(&config)?;
    let trend = analytics.monthly_trend().to_vec();
    Ok(Out::new(render(&trend), trend))
}
