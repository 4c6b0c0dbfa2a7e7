use chrono::{DateTime, Datelike, Locale, Months, NaiveDate, NaiveTime, Utc};

pub const MONTH_LABEL_FORMAT: &str = "%B %Y";
pub const SHORT_MONTH_FORMAT: &str = "%b %Y";
pub const REPORT_LOCALE: Locale = Locale::ro_RO;

/// Last day of the month `offset` months after (`year`, `month`).
fn month_end(year: i32, month: u32, offset: usize) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)?
        .checked_add_months(Months::new(offset as u32 + 1))?
        .pred_opt()
}

/// `count` consecutive month-end dates, the first being the end of (`year`, `month`).
pub fn month_end_dates(year: i32, month: u32, count: usize) -> Option<Vec<NaiveDate>> {
    (0..count).map(|i| month_end(year, month, i)).collect()
}

/// The `count` month-end dates that follow `last`.
pub fn next_month_ends(last: NaiveDate, count: usize) -> Option<Vec<NaiveDate>> {
    (1..=count)
        .map(|i| month_end(last.year(), last.month(), i))
        .collect()
}

fn localized(date: NaiveDate, fmt: &str) -> String {
    let dt = DateTime::<Utc>::from_naive_utc_and_offset(date.and_time(NaiveTime::default()), Utc);
    dt.format_localized(fmt, REPORT_LOCALE).to_string()
}

/// Full month label as shown in the report, e.g. "Martie 2025".
pub fn month_label(date: NaiveDate) -> String {
    capitalize_first(&localized(date, MONTH_LABEL_FORMAT))
}

/// Compact month label for chart axes, e.g. "Mar 2025".
pub fn short_month_label(date: NaiveDate) -> String {
    capitalize_first(&localized(date, SHORT_MONTH_FORMAT))
}

pub fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_month_end_dates_start_at_january_end() {
        let dates = month_end_dates(2025, 1, 3).unwrap();
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
                NaiveDate::from_ymd_opt(2025, 2, 28).unwrap(),
                NaiveDate::from_ymd_opt(2025, 3, 31).unwrap(),
            ]
        );
    }

    #[test]
    fn test_next_month_ends_crosses_year_and_leap_day() {
        let last = NaiveDate::from_ymd_opt(2027, 12, 31).unwrap();
        let next = next_month_ends(last, 2).unwrap();
        assert_eq!(next[0], NaiveDate::from_ymd_opt(2028, 1, 31).unwrap());
        assert_eq!(next[1], NaiveDate::from_ymd_opt(2028, 2, 29).unwrap());
    }

    #[test]
    fn test_month_label_is_capitalized_romanian() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 31).unwrap();
        assert_eq!(month_label(date), "Martie 2025");
    }

    #[test]
    fn test_capitalize_first_handles_unicode_and_empty() {
        assert_eq!(capitalize_first("ștefan"), "Ștefan");
        assert_eq!(capitalize_first(""), "");
    }
}
