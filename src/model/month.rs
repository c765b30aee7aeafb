//! Month keys of the form `YYYY-MM` derived from `MM/DD/YYYY` transaction dates.

use chrono::NaiveDate;

/// Derives the `YYYY-MM` month key for a transaction date written as `MM/DD/YYYY`.
///
/// The date is split on `/` into month, day and year and the month is left-padded with `0` to two
/// characters. Nothing is validated: a date with a different shape produces a malformed key, with
/// missing pieces left empty, rather than an error.
///
/// ```
/// # use ledger_lens::model::month_key;
/// assert_eq!(month_key("1/02/2018"), "2018-01");
/// assert_eq!(month_key("2018-01-02"), "-2018-01-02");
/// ```
pub fn month_key(date: &str) -> String {
    let mut parts = date.split('/');
    let month = parts.next().unwrap_or_default();
    let _day = parts.next();
    let year = parts.next().unwrap_or_default();
    format!("{year}-{month:0>2}")
}

/// Formats a `YYYY-MM` month key for display, e.g. `Jan 2018`. Keys that do not name a real month
/// are returned unchanged.
pub fn month_label(key: &str) -> String {
    key.split_once('-')
        .and_then(|(year, month)| {
            let year = year.parse::<i32>().ok()?;
            let month = month.parse::<u32>().ok()?;
            NaiveDate::from_ymd_opt(year, month, 1)
        })
        .map(|date| date.format("%b %Y").to_string())
        .unwrap_or_else(|| key.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_key_zero_padded() {
        assert_eq!(month_key("01/02/2018"), "2018-01");
        assert_eq!(month_key("2/19/2018"), "2018-02");
        assert_eq!(month_key("12/31/1999"), "1999-12");
    }

    #[test]
    fn test_month_key_does_not_validate() {
        assert_eq!(month_key("13/01/2018"), "2018-13");
        assert_eq!(month_key("01-02-2018"), "-01-02-2018");
        assert_eq!(month_key(""), "-00");
        assert_eq!(month_key("01/02/2018/extra"), "2018-01");
    }

    #[test]
    fn test_month_label() {
        assert_eq!(month_label("2018-01"), "Jan 2018");
        assert_eq!(month_label("2024-12"), "Dec 2024");
    }

    #[test]
    fn test_month_label_malformed() {
        assert_eq!(month_label("2018-13"), "2018-13");
        assert_eq!(month_label("-00"), "-00");
        assert_eq!(month_label("garbage"), "garbage");
    }
}
