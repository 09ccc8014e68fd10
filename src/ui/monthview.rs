use crate::calendar;
use crate::holiday;
use crate::ui::util::{self, Line};
use chrono::{Datelike, NaiveDate};
use termion::{color, style};

/// Seven four-column day cells.
pub const PANE_WIDTH: usize = 28;

/// Monday-first weekday labels; the weekend sits in the last two columns.
const WEEKDAY_LABELS: [&str; 7] = ["一", "二", "三", "四", "五", "六", "日"];

/// One month grid of the three-month window. Renders to lines of exactly
/// [`PANE_WIDTH`] visible columns so panes can be placed side by side.
pub struct MonthPane {
    first_of_month: NaiveDate,
    today: NaiveDate,
    focused: bool,
}

/// All annotated days of a month, in day order.
pub fn month_holidays(year: i32, month0: u32) -> Vec<(u32, &'static str)> {
    (1..=calendar::days_in_month(year, month0))
        .filter_map(|day| holiday::holiday_for(year, month0, day).map(|label| (day, label)))
        .collect()
}

/// Grid rows needed for `days` days behind `padding` leading pad cells.
pub fn week_rows(padding: u32, days: u32) -> usize {
    ((padding + days + 6) / 7) as usize
}

impl MonthPane {
    pub fn new(first_of_month: NaiveDate, today: NaiveDate, focused: bool) -> MonthPane {
        MonthPane {
            first_of_month,
            today,
            focused,
        }
    }

    pub fn render(&self) -> Vec<String> {
        let year = self.first_of_month.year();
        let month0 = self.first_of_month.month0();
        let days = calendar::days_in_month(year, month0);
        let padding = calendar::monday_first_offset(calendar::first_weekday_of_month(year, month0));

        let mut lines = Vec::with_capacity(2 + week_rows(padding, days));

        lines.push(self.title_line(year, month0));
        lines.push(weekday_header());

        let mut week = Line::new();
        for _ in 0..padding {
            week.push("    ");
        }

        for day in 1..=days {
            self.push_day_cell(&mut week, year, month0, day);
            if week.width() == PANE_WIDTH {
                lines.push(std::mem::take(&mut week).into_string());
            }
        }
        if week.width() > 0 {
            week.pad_to(PANE_WIDTH);
            lines.push(week.into_string());
        }

        lines.push(" ".repeat(PANE_WIDTH));
        for (day, label) in month_holidays(year, month0) {
            lines.push(legend_line(day, label));
        }

        lines
    }

    fn title_line(&self, year: i32, month0: u32) -> String {
        let text = if self.focused {
            format!("◆ {}年 {}", year, calendar::month_name(month0))
        } else {
            format!("{}年 {}", year, calendar::month_name(month0))
        };

        let mut line = Line::new();
        if self.focused {
            line.push_styled(
                &util::pad_center(&text, PANE_WIDTH),
                format!("{}{}", color::Fg(color::Blue), style::Bold),
            );
        } else {
            line.push_styled(
                &util::pad_center(&text, PANE_WIDTH),
                color::Fg(color::LightBlack),
            );
        }
        line.into_string()
    }

    fn push_day_cell(&self, week: &mut Line, year: i32, month0: u32, day: u32) {
        let cell = format!("{:>3} ", day);
        let is_today = self.today.year() == year
            && self.today.month0() == month0
            && self.today.day() == day;
        let label = holiday::holiday_for(year, month0, day);

        if is_today {
            week.push_styled(
                &cell,
                format!(
                    "{}{}{}",
                    color::Bg(color::Blue),
                    color::Fg(color::White),
                    style::Bold
                ),
            );
        } else if label.map_or(false, holiday::is_lunar_new_year) {
            week.push_styled(
                &cell,
                format!("{}{}", color::Bg(color::Red), color::Fg(color::White)),
            );
        } else if label.is_some() {
            week.push_styled(&cell, color::Fg(color::Red));
        } else {
            week.push(&cell);
        }
    }
}

fn weekday_header() -> String {
    let mut line = Line::new();
    for (idx, label) in WEEKDAY_LABELS.iter().enumerate() {
        let cell = format!(" {} ", label);
        if idx >= 5 {
            line.push_styled(&cell, color::Fg(color::Red));
        } else {
            line.push_styled(&cell, color::Fg(color::LightBlack));
        }
    }
    line.into_string()
}

fn legend_line(day: u32, label: &str) -> String {
    let mut line = Line::new();
    let text = format!("{:>2}日 {}", day, label);
    if holiday::is_lunar_new_year(label) {
        line.push_styled(&text, format!("{}{}", color::Fg(color::Red), style::Bold));
    } else {
        line.push_styled(&text, color::Fg(color::Red));
    }
    line.pad_to(PANE_WIDTH);
    line.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_of(year: i32, month: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, 1).unwrap()
    }

    #[test]
    fn week_row_counts() {
        // Feb 2024: 1st is a Thursday (pad 3), 29 days -> 5 rows.
        assert_eq!(week_rows(3, 29), 5);
        // Sep 2024: 1st is a Sunday (pad 6), 30 days -> 6 rows.
        assert_eq!(week_rows(6, 30), 6);
        // Feb 2027 starts on a Monday and has exactly 4 rows.
        assert_eq!(week_rows(0, 28), 4);
    }

    #[test]
    fn collects_month_holidays_in_day_order() {
        let holidays = month_holidays(2024, 1);
        assert_eq!(
            holidays,
            vec![
                (2, "小年"),
                (9, "除夕"),
                (10, "春节"),
                (14, "情人节"),
                (24, "元宵节"),
            ]
        );

        // outside the lunar table only solar-fixed entries remain
        assert_eq!(month_holidays(2027, 1), vec![(14, "情人节")]);
    }

    #[test]
    fn renders_title_header_grid_and_legend() {
        let pane = MonthPane::new(first_of(2024, 2), first_of(2024, 2), true);
        let lines = pane.render();

        // title + weekday header + 5 week rows + separator + 5 legend rows
        assert_eq!(lines.len(), 13);
        assert!(lines[0].contains("2024年"));
        assert!(lines[0].contains("二月"));
        assert!(lines[1].contains("一"));
        assert!(lines.iter().any(|line| line.contains("春节")));
    }

    #[test]
    fn unfocused_pane_has_no_focus_marker() {
        let pane = MonthPane::new(first_of(2024, 3), first_of(2024, 2), false);
        let lines = pane.render();
        assert!(!lines[0].contains('◆'));
    }
}
