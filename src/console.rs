use std::io::{self, Write};

use crate::model::HistorySummary;
use crate::view::{HistoryRow, StatusView, TextSink, View};

/// Terminal rendering of the attendance widget. Each region of the web page
/// becomes a labelled line; the clock redraws in place on its own line.
pub struct ConsoleView;

impl TextSink for ConsoleView {
    fn set_text(&self, slot: &str, text: &str) {
        println!("{slot}: {text}");
    }
}

impl View for ConsoleView {
    fn render_status(&self, status: &StatusView) {
        println!();
        println!("[{}] {}", status.state.indicator_class(), status.status_text);
        println!(
            "  check-in [{}]  check-out [{}]",
            enabled(status.check_in_enabled),
            enabled(status.check_out_enabled),
        );
        if let Some(info) = &status.info {
            println!("  in: {}  out: {}", info.check_in_time, info.check_out_time);
        }
    }

    fn render_clock(&self, time: &str, date: &str) {
        print!("\r{time}  {date} ");
        let _ = io::stdout().flush();
    }

    fn set_loading(&self, visible: bool) {
        if visible {
            println!("...");
        }
    }

    fn show_error(&self, message: &str) {
        println!();
        println!("[error] {message}");
    }

    fn hide_error(&self) {}

    fn show_success(&self, message: &str) {
        println!();
        println!("[ok] {message}");
    }

    fn hide_success(&self) {}

    fn render_history(&self, rows: &[HistoryRow], summary: &HistorySummary) {
        println!();
        for row in rows {
            println!(
                "{}  {}  {}  {}  {:>7}  {}  {}",
                row.date,
                row.weekday,
                row.check_in_time,
                row.check_out_time,
                row.work_hours,
                row.status_text,
                row.notes,
            );
        }
        println!(
            "days: {}  hours: {}h  present: {}  absent: {}",
            summary.total_days, summary.total_hours, summary.present_days, summary.absent_days,
        );
    }

    fn show_history_empty(&self) {
        println!();
        println!("(no attendance records)");
    }
}

fn enabled(on: bool) -> &'static str {
    if on { "enabled" } else { "disabled" }
}
