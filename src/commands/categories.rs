use crate::analytics::{category_color, percent_of, Analytics, CategoryAmount};
use crate::args::CategoriesArgs;
use crate::commands::{load_analytics, money, percent, Out};
use crate::{Config, Result};
use rust_decimal::Decimal;
use serde::Serialize;

/// One spending category as it would appear in a chart legend.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct CategoryRow {
    pub category: String,
    pub amount: Decimal,
    /// Percent of total spending.
    pub share: Decimal,
    /// Hex color for charts.
    pub color: String,
}

fn rows(analytics: &Analytics, all: bool) -> Vec<CategoryRow> {
    let entries: Vec<CategoryAmount> = if all {
        analytics
            .category_spending()
            .top(analytics.category_spending().len())
    } else {
        analytics.top_categories().to_vec()
    };
    let total = analytics.total_spending();
    entries
        .into_iter()
        .map(|entry| {
            let share = percent_of(entry.amount, total);
            CategoryRow {
                color: category_color(&entry.category).to_string(),
                category: entry.category,
                amount: entry.amount,
                share,
            }
        })
        .collect()
}

fn render(rows: &[CategoryRow]) -> String {
    if rows.is_empty() {
        return String::from("No spending found");
    }
    let mut lines = vec![format!("{:<24}{:>14}{:>9}", "Category", "Amount", "Share")];
    for row in rows {
        lines.push(format!(
            "{:<24}{:>14}{:>9}",
            row.category,
            money(row.amount),
            percent(row.share)
        ));
    }
    lines.join("\n")
}

/// Lists spending by category, largest first. Only the top categories are shown unless `all` is
/// set.
pub async fn categories(config: Config, args: CategoriesArgs) -> Result<Out<Vec<CategoryRow>>> {
    let analytics = load_analytics(&config)?;
    let rows = rows(&analytics, args.all());
    Ok(Out::new(render(&rows), rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::{DEFAULT_COLOR, TOP_CATEGORY_LIMIT};
    use crate::test::TestEnv;

    #[tokio::test]
    async fn test_top_categories() {
        let env = TestEnv::new().await;
        let out = categories(env.config(), CategoriesArgs::new(false))
            .await
            .unwrap();
        let rows = out.structure().unwrap();
        assert_eq!(rows.len(), TOP_CATEGORY_LIMIT);
        assert_eq!(rows[0].category, "Mortgage & Rent");
        assert_eq!(rows[0].color, "#ef4444");
        let dining = rows.iter().find(|r| r.category == "Dining").unwrap();
        assert_eq!(dining.color, DEFAULT_COLOR);
        assert!(out.message().contains("$2,494.88"), "{}", out.message());
    }

    #[tokio::test]
    async fn test_all_categories() {
        let env = TestEnv::new().await;
        let out = categories(env.config(), CategoriesArgs::new(true))
            .await
            .unwrap();
        let rows = out.structure().unwrap();
        assert_eq!(rows.len(), 9);
        assert_eq!(rows[8].category, "Home Improvement");
        assert_eq!(rows[8].color, "#14b8a6");
        let share: Decimal = rows.iter().map(|r| r.share).sum();
        assert!((share - Decimal::ONE_HUNDRED).abs() < Decimal::new(1, 6));
    }

    #[tokio::test]
    async fn test_no_spending() {
        let env = TestEnv::new().await;
        env.write(
            "transactions.csv",
            "Date,Description,Amount,Transaction Type,Category,Account Name\n",
        )
        .await;
        let out = categories(env.config(), CategoriesArgs::new(false))
            .await
            .unwrap();
        assert!(out.structure().unwrap().is_empty());
        assert_eq!(out.message(), "No spending found");
    }
}
