use chrono::{Datelike, NaiveDate};

/// Chinese month labels, indexed by zero-based month.
const MONTH_NAMES: [&str; 12] = [
    "一月",
    "二月",
    "三月",
    "四月",
    "五月",
    "六月",
    "七月",
    "八月",
    "九月",
    "十月",
    "十一月",
    "十二月",
];

/// Number of days in the given month (`month0` is zero-based).
///
/// Computed as the predecessor of the first day of the following month, so
/// leap years fall out of the calendar system instead of a lookup table.
pub fn days_in_month(year: i32, month0: u32) -> u32 {
    debug_assert!(month0 < 12);

    let (next_year, next_month0) = if month0 == 11 {
        (year + 1, 0)
    } else {
        (year, month0 + 1)
    };

    NaiveDate::from_ymd_opt(next_year, next_month0 + 1, 1)
        .and_then(|d| d.pred_opt())
        .map(|d| d.day())
        .unwrap_or(0)
}

/// Weekday of the first day of the month, 0 = Sunday .. 6 = Saturday.
pub fn first_weekday_of_month(year: i32, month0: u32) -> u32 {
    debug_assert!(month0 < 12);

    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .map(|d| d.weekday().num_days_from_sunday())
        .unwrap_or(0)
}

/// Chinese label of a zero-based month index.
///
/// Panics for indices outside `0..12`; callers guarantee validity.
pub fn month_name(month0: u32) -> &'static str {
    MONTH_NAMES[month0 as usize]
}

/// Leading pad cells of a Monday-first grid given the Sunday-indexed
/// weekday of the 1st. Monday lands in the first column, Sunday in the last.
pub fn monday_first_offset(first_weekday: u32) -> u32 {
    (first_weekday + 6) % 7
}

/// First day of the month `delta` months away from `base`, with year
/// rollover in both directions. `delta = 0` normalizes to the first of
/// `base`'s own month.
pub fn offset_month(base: NaiveDate, delta: i32) -> NaiveDate {
    let total = base.year() * 12 + base.month0() as i32 + delta;
    let year = total.div_euclid(12);
    let month0 = total.rem_euclid(12) as u32;

    NaiveDate::from_ymd_opt(year, month0 + 1, 1)
        .expect("normalized month arithmetic yields a valid first-of-month")
}

/// The three-month window around `base`: first-of-month dates of the
/// previous, current and next month.
pub fn neighboring_months(base: NaiveDate) -> [NaiveDate; 3] {
    [
        offset_month(base, -1),
        offset_month(base, 0),
        offset_month(base, 1),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn month_lengths_match_gregorian_calendar() {
        assert_eq!(days_in_month(2024, 1), 29); // leap February
        assert_eq!(days_in_month(2025, 1), 28);
        assert_eq!(days_in_month(2024, 0), 31);
        assert_eq!(days_in_month(2024, 3), 30);
        assert_eq!(days_in_month(2024, 11), 31);
        assert_eq!(days_in_month(2100, 1), 28); // century non-leap
    }

    #[test]
    fn first_weekday_is_sunday_indexed() {
        // 2024-09-01 was a Sunday, 2024-01-01 a Monday.
        assert_eq!(first_weekday_of_month(2024, 8), 0);
        assert_eq!(first_weekday_of_month(2024, 0), 1);
        // 2024-06-01 was a Saturday.
        assert_eq!(first_weekday_of_month(2024, 5), 6);
    }

    #[test]
    fn monday_first_padding() {
        // Sunday-first month pads a full week minus one, Monday-first none.
        assert_eq!(monday_first_offset(0), 6);
        assert_eq!(monday_first_offset(1), 0);
        assert_eq!(monday_first_offset(6), 5);
    }

    #[test]
    fn month_names_are_chinese_labels() {
        assert_eq!(month_name(0), "一月");
        assert_eq!(month_name(11), "十二月");
    }

    #[test]
    #[should_panic]
    fn month_name_panics_out_of_range() {
        month_name(12);
    }

    #[test]
    fn window_is_three_consecutive_first_of_months() {
        let window = neighboring_months(date(2024, 6, 15));
        assert_eq!(
            window,
            [date(2024, 5, 1), date(2024, 6, 1), date(2024, 7, 1)]
        );
    }

    #[test]
    fn window_rolls_over_year_boundaries() {
        assert_eq!(
            neighboring_months(date(2024, 1, 10)),
            [date(2023, 12, 1), date(2024, 1, 1), date(2024, 2, 1)]
        );
        assert_eq!(
            neighboring_months(date(2024, 12, 31)),
            [date(2024, 11, 1), date(2024, 12, 1), date(2025, 1, 1)]
        );
    }

    #[test]
    fn offset_month_crosses_multiple_years() {
        assert_eq!(offset_month(date(2024, 3, 20), -15), date(2022, 12, 1));
        assert_eq!(offset_month(date(2024, 3, 20), 22), date(2026, 1, 1));
    }
}
