//! Chart colors for spending categories.

/// The color used for any category that is not in `CATEGORY_COLORS`.
pub const DEFAULT_COLOR: &str = "#6b7280";

const CATEGORY_COLORS: &[(&str, &str)] = &[
    ("Mortgage & Rent", "#ef4444"),
    ("Restaurants", "#f59e0b"),
    ("Groceries", "#10b981"),
    ("Shopping", "#8b5cf6"),
    ("Utilities", "#06b6d4"),
    ("Gas & Fuel", "#f97316"),
    ("Entertainment", "#ec4899"),
    ("Home Improvement", "#14b8a6"),
    ("Mobile Phone", "#3b82f6"),
    ("Fast Food", "#84cc16"),
];

/// Looks up the hex color for `category` by exact name, falling back to `DEFAULT_COLOR`.
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_COLOR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_category() {
        assert_eq!(category_color("Groceries"), "#10b981");
        assert_eq!(category_color("Mortgage & Rent"), "#ef4444");
    }

    #[test]
    fn test_unknown_category_falls_back() {
        assert_eq!(category_color("Dining"), DEFAULT_COLOR);
        assert_eq!(category_color("groceries"), DEFAULT_COLOR);
        assert_eq!(category_color(""), DEFAULT_COLOR);
    }
}
