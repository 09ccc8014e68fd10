use crate::calendar;
use crate::ui::util::{self, Line};
use crate::ui::Context;
use chrono::Datelike;
use termion::{color, style};
use unicode_width::UnicodeWidthStr;

const ADVICE_PREFIX: &str = "高效建议 ";

/// Title and key hints, hints right-aligned when the width allows it.
pub fn header(width: usize) -> String {
    let hints = "h/← 上月  l/→ 下月  t 今天  r 刷新  q 退出";

    let mut line = Line::new();
    line.push_styled("三月日历 · TripleView", style::Bold);

    let hint_width = UnicodeWidthStr::width(hints);
    if width > line.width() + hint_width {
        line.pad_to(width - hint_width);
    } else {
        line.push("  ");
    }
    line.push_styled(hints, color::Fg(color::LightBlack));

    line.into_string()
}

/// The insight banner for the center month: a loading placeholder while a
/// fetch is in flight, otherwise the quote and the advice. A fallback
/// insight renders exactly like a fetched one.
pub fn insight_banner(context: &Context, width: usize) -> Vec<String> {
    let month_name = calendar::month_name(context.base_date().month0());
    let mut lines = Vec::new();

    let mut heading = Line::new();
    heading.push_styled(
        &format!("✦ AI 月度灵感 · {}", month_name),
        format!("{}{}", color::Fg(color::Magenta), style::Bold),
    );
    lines.push(heading.into_string());

    match context.insight() {
        Some(insight) if !context.is_loading() => {
            for chunk in util::wrap_visible(&format!("「 {} 」", insight.quote), width) {
                let mut line = Line::new();
                line.push_styled(&chunk, style::Italic);
                lines.push(line.into_string());
            }

            let prefix_width = UnicodeWidthStr::width(ADVICE_PREFIX);
            let advice_width = width.saturating_sub(prefix_width);
            for (idx, chunk) in util::wrap_visible(&insight.advice, advice_width)
                .into_iter()
                .enumerate()
            {
                let mut line = Line::new();
                if idx == 0 {
                    line.push_styled(
                        ADVICE_PREFIX,
                        format!("{}{}", color::Fg(color::Cyan), style::Bold),
                    );
                } else {
                    line.push(&" ".repeat(prefix_width));
                }
                line.push(&chunk);
                lines.push(line.into_string());
            }
        }
        _ => {
            let mut line = Line::new();
            line.push_styled("正在为本月生成灵感…", color::Fg(color::LightBlack));
            lines.push(line.into_string());
        }
    }

    lines
}

/// Color legend matching the day-cell styles of the grids.
pub fn footer() -> String {
    let mut line = Line::new();
    line.push_styled("■", color::Fg(color::Blue));
    line.push(" 今日   ");
    line.push_styled("■", color::Fg(color::Red));
    line.push(" 春节/除夕   ");
    line.push_styled("●", color::Fg(color::Red));
    line.push(" 节假日   ");
    line.push_styled("◆", color::Fg(color::Blue));
    line.push(" 焦点月");
    line.into_string()
}
