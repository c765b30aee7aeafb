use crate::analytics::{
    category_changes, monthly_changes, period_change, CategoryChange, MonthlyChange, PeriodChange,
};
use crate::args::{Against, CompareArgs};
use crate::commands::{load_analytics, money, signed_percent, Out};
use crate::error::{ErrorType, IntoResult};
use crate::model::month_label;
use crate::{Config, Result};
use serde::Serialize;
use tracing::debug;

/// The current period measured against a baseline.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct Comparison {
    pub against: Against,
    pub period: PeriodChange,
    pub categories: Vec<CategoryChange>,
    pub months: Vec<MonthlyChange>,
}

impl Comparison {
    fn render(&self) -> String {
        let title = match self.against {
            Against::Previous => "previous period",
            Against::Average => "historical average",
        };
        let mut lines = vec![
            format!(
                "Total spending {} vs {title}",
                signed_percent(self.period.total_spending_change)
            ),
            format!(
                "Average monthly spending {} vs {title}",
                signed_percent(self.period.average_monthly_change)
            ),
            format!("Saved {}", money(self.period.saved)),
            String::new(),
            format!(
                "{:<24}{:>14}{:>14}{:>10}",
                "Category", "Current", "Baseline", "Change"
            ),
        ];
        for c in &self.categories {
            lines.push(format!(
                "{:<24}{:>14}{:>14}{:>10}",
                c.category,
                money(c.current),
                money(c.previous),
                signed_percent(c.change)
            ));
        }
        lines.push(String::new());
        lines.push(format!(
            "{:<12}{:>14}{:>14}{:>14}",
            "Month", "Current", "Baseline", "Change"
        ));
        for m in &self.months {
            lines.push(format!(
                "{:<12}{:>14}{:>14}{:>14}",
                month_label(&m.month),
                money(m.current),
                money(m.previous),
                money(m.change)
            ));
        }
        lines.join("\n")
    }
}

/// Compares current spending with the configured previous-period or historical-average baseline.
pub async fn compare(config: Config, args: CompareArgs) -> Result<Out<Comparison>> {
    let against = args.against();
    let baseline = config.baseline(against).await.pub_result(ErrorType::Data)?;
    debug!("Loaded {against} baseline");
    let analytics = load_analytics(&config)?;
    let comparison = Comparison {
        against,
        period: period_change(&analytics, &baseline),
        categories: category_changes(&analytics, &baseline),
        months: monthly_changes(&analytics, &baseline),
    };
    Ok(Out::new(comparison.render(), comparison))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::error_type;
    use crate::test::TestEnv;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[tokio::test]
    async fn test_compare_previous() {
        let env = TestEnv::new().await;
        let out = compare(env.config(), CompareArgs::new(Against::Previous))
            .await
            .unwrap();
        let c = out.structure().unwrap();
        assert_eq!(c.against, Against::Previous);
        assert_eq!(c.period.saved, Decimal::from_str("-1161.99").unwrap());
        assert_eq!(c.categories.len(), 8);
        assert_eq!(c.months.len(), 2);
        assert!(
            out.message().contains("vs previous period"),
            "{}",
            out.message()
        );
        assert!(out.message().contains("+59.6%"), "{}", out.message());
    }

    #[tokio::test]
    async fn test_compare_average() {
        let env = TestEnv::new().await;
        let out = compare(env.config(), CompareArgs::new(Against::Average))
            .await
            .unwrap();
        let c = out.structure().unwrap();
        let rent = &c.categories[0];
        assert_eq!(rent.previous, Decimal::from(1200));
        assert_eq!(c.months[1].previous, Decimal::from(1750));
        assert!(out.message().contains("historical average"));
    }

    #[tokio::test]
    async fn test_compare_missing_baseline() {
        let env = TestEnv::empty().await;
        let err = compare(env.config(), CompareArgs::new(Against::Previous))
            .await
            .unwrap_err();
        assert_eq!(error_type(&err), Some(ErrorType::Data));
    }
}
