use crate::calendar;
use crate::cmds::Cmd;
use crate::config::{Config, InsightConfig};
use crate::events::{Dispatcher, Event};
use crate::insight;
use crate::ui::banner;
use crate::ui::monthview::{MonthPane, PANE_WIDTH};
use crate::ui::Context;
use chrono::{Datelike, Local, NaiveDate};
use itertools::Itertools;
use std::error::Error;
use std::io::{self, Write};
use std::sync::mpsc;
use std::thread;

const PANE_GAP: usize = 2;

pub struct App<'a> {
    config: &'a Config,
    context: Context,
}

impl<'a> App<'a> {
    pub fn new(config: &'a Config) -> App<'a> {
        App {
            config,
            context: Context::new(Local::now().date_naive()),
        }
    }

    pub fn run<W: Write>(
        &mut self,
        dispatcher: Dispatcher,
        screen: &mut W,
    ) -> Result<(), Box<dyn Error>> {
        // initial fetch for the startup base date
        let seq = self.context.begin_fetch();
        spawn_fetch(
            self.config.insight.clone(),
            self.context.base_date(),
            seq,
            dispatcher.event_sink().clone(),
        );

        loop {
            self.draw(screen)?;

            match dispatcher.next()? {
                Event::Tick => self.context.set_today(Local::now().date_naive()),
                Event::Insight { seq, insight } => {
                    self.context.apply_insight(seq, insight);
                }
                Event::Input(key) => {
                    let cmd = self
                        .config
                        .key_map
                        .get(&key)
                        .copied()
                        .unwrap_or(Cmd::Noop);

                    match cmd {
                        Cmd::Noop => {}
                        Cmd::Exit => break,
                        Cmd::PrevMonth => self.refetch(Context::prev_month, &dispatcher),
                        Cmd::NextMonth => self.refetch(Context::next_month, &dispatcher),
                        Cmd::Today => self.refetch(Context::jump_to_today, &dispatcher),
                        Cmd::RefreshInsight => self.refetch(Context::begin_fetch, &dispatcher),
                    }
                }
            }
        }

        Ok(())
    }

    fn refetch(&mut self, transition: fn(&mut Context) -> u64, dispatcher: &Dispatcher) {
        let seq = transition(&mut self.context);
        spawn_fetch(
            self.config.insight.clone(),
            self.context.base_date(),
            seq,
            dispatcher.event_sink().clone(),
        );
    }

    fn draw<W: Write>(&self, screen: &mut W) -> io::Result<()> {
        write!(screen, "{}", termion::clear::All)?;
        for (row, line) in self.render_lines().iter().enumerate() {
            write!(screen, "{}{}", termion::cursor::Goto(1, row as u16 + 1), line)?;
        }
        screen.flush()
    }

    /// The full view as plain lines: header, insight banner, three month
    /// panes side by side with the center one emphasized, color legend.
    pub fn render_lines(&self) -> Vec<String> {
        let width = 3 * PANE_WIDTH + 2 * PANE_GAP;

        let mut lines = vec![banner::header(width), String::new()];
        lines.extend(banner::insight_banner(&self.context, width));
        lines.push(String::new());

        let panes: Vec<Vec<String>> = self
            .context
            .window()
            .iter()
            .enumerate()
            .map(|(idx, first)| MonthPane::new(*first, self.context.today(), idx == 1).render())
            .collect();
        lines.extend(beside(&panes, PANE_GAP));

        lines.push(String::new());
        lines.push(banner::footer());
        lines
    }

    /// One-shot non-interactive rendering: fetch the insight synchronously,
    /// print the composed view, done.
    pub fn show<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let seq = self.context.begin_fetch();
        let base = self.context.base_date();
        let insight = insight::fetch_monthly_insight(
            &self.config.insight,
            calendar::month_name(base.month0()),
            base.year(),
        );
        self.context.apply_insight(seq, insight);

        for line in self.render_lines() {
            writeln!(out, "{}", line)?;
        }
        out.flush()
    }
}

/// Detached worker for one insight round-trip. Communicates only through
/// the event channel; the sequence tag lets the context drop stale results.
fn spawn_fetch(config: InsightConfig, base: NaiveDate, seq: u64, tx: mpsc::Sender<Event>) {
    thread::spawn(move || {
        let month_name = calendar::month_name(base.month0());
        let insight = insight::fetch_monthly_insight(&config, month_name, base.year());
        // the app may have exited in the meantime
        let _ = tx.send(Event::Insight { seq, insight });
    });
}

/// Merges pane line lists column-wise, padding short panes with blanks.
fn beside(panes: &[Vec<String>], gap: usize) -> Vec<String> {
    let rows = panes.iter().map(Vec::len).max().unwrap_or(0);
    let blank = " ".repeat(PANE_WIDTH);
    let gap = " ".repeat(gap);

    (0..rows)
        .map(|row| {
            panes
                .iter()
                .map(|pane| pane.get(row).map(String::as_str).unwrap_or(&blank))
                .join(&gap)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beside_pads_shorter_panes() {
        let left = vec!["aaaa".to_owned(), "bbbb".to_owned()];
        let right = vec!["cccc".to_owned()];
        let merged = beside(&[left, right], 1);

        assert_eq!(merged.len(), 2);
        assert_eq!(merged[0], "aaaa cccc");
        assert_eq!(merged[1], format!("bbbb {}", " ".repeat(PANE_WIDTH)));
    }

    #[test]
    fn view_contains_all_three_months() {
        let config = Config::default();
        let mut app = App::new(&config);
        app.context = Context::new(NaiveDate::from_ymd_opt(2024, 2, 10).unwrap());

        let lines = app.render_lines();
        let view = lines.join("\n");
        assert!(view.contains("一月"));
        assert!(view.contains("二月"));
        assert!(view.contains("三月"));
        // center month is the focused pane
        assert!(view.contains("◆ 2024年 二月"));
    }
}
