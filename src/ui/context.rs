use crate::calendar;
use crate::insight::MonthlyInsight;
use chrono::NaiveDate;

/// The whole of the view state: the base date the window is centered on,
/// plus the insight (or its absence) for that month. Owned exclusively by
/// the app; render functions only ever borrow it.
pub struct Context {
    base_date: NaiveDate,
    today: NaiveDate,
    insight: Option<MonthlyInsight>,
    loading: bool,
    insight_seq: u64,
}

impl Context {
    pub fn new(today: NaiveDate) -> Context {
        Context {
            base_date: calendar::offset_month(today, 0),
            today,
            insight: None,
            loading: false,
            insight_seq: 0,
        }
    }

    pub fn base_date(&self) -> NaiveDate {
        self.base_date
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn insight(&self) -> Option<&MonthlyInsight> {
        self.insight.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// First-of-month dates of the previous, current and next month.
    pub fn window(&self) -> [NaiveDate; 3] {
        calendar::neighboring_months(self.base_date)
    }

    /// Moves the window by whole months and invalidates the insight.
    /// Returns the sequence number the next fetch must carry.
    pub fn shift_months(&mut self, delta: i32) -> u64 {
        self.base_date = calendar::offset_month(self.base_date, delta);
        self.begin_fetch()
    }

    pub fn prev_month(&mut self) -> u64 {
        self.shift_months(-1)
    }

    pub fn next_month(&mut self) -> u64 {
        self.shift_months(1)
    }

    /// Re-centers the window on today's month.
    pub fn jump_to_today(&mut self) -> u64 {
        self.base_date = calendar::offset_month(self.today, 0);
        self.begin_fetch()
    }

    /// Enters the loading state and bumps the fetch sequence number, so
    /// responses of earlier fetches become stale.
    pub fn begin_fetch(&mut self) -> u64 {
        self.insight_seq += 1;
        self.loading = true;
        self.insight_seq
    }

    /// Accepts only the newest in-flight fetch; responses carrying an old
    /// sequence number are dropped and leave the state untouched.
    pub fn apply_insight(&mut self, seq: u64, insight: MonthlyInsight) -> bool {
        if seq != self.insight_seq {
            log::debug!(
                "discarding stale insight response (seq {}, current {})",
                seq,
                self.insight_seq
            );
            return false;
        }

        self.insight = Some(insight);
        self.loading = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insight;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn starts_centered_on_todays_month() {
        let context = Context::new(date(2024, 6, 15));
        assert_eq!(context.base_date(), date(2024, 6, 1));
        assert_eq!(
            context.window(),
            [date(2024, 5, 1), date(2024, 6, 1), date(2024, 7, 1)]
        );
    }

    #[test]
    fn navigation_shifts_the_window() {
        let mut context = Context::new(date(2024, 1, 10));
        context.shift_months(-1);
        assert_eq!(context.base_date(), date(2023, 12, 1));
        context.shift_months(1);
        context.shift_months(1);
        assert_eq!(context.base_date(), date(2024, 2, 1));
        context.jump_to_today();
        assert_eq!(context.base_date(), date(2024, 1, 1));
    }

    #[test]
    fn stale_responses_are_rejected() {
        let mut context = Context::new(date(2024, 3, 3));
        let first = context.begin_fetch();
        let second = context.shift_months(1);
        assert!(second > first);

        // the late response of the first fetch must not win
        assert!(!context.apply_insight(first, insight::fallback_insight("三月")));
        assert!(context.insight().is_none());
        assert!(context.is_loading());

        assert!(context.apply_insight(second, insight::fallback_insight("四月")));
        assert_eq!(context.insight().unwrap().month, "四月");
        assert!(!context.is_loading());
    }

    #[test]
    fn refresh_invalidates_current_insight_display() {
        let mut context = Context::new(date(2024, 3, 3));
        let seq = context.begin_fetch();
        context.apply_insight(seq, insight::fallback_insight("三月"));
        assert!(!context.is_loading());

        context.begin_fetch();
        assert!(context.is_loading());
        // the previous insight is still held but rendered as loading
        assert!(context.insight().is_some());
    }
}
