//! Rendering seam. The web widget wrote straight into the document tree;
//! here every DOM region becomes a method on [`View`] so the driver's state
//! machine is testable without any real output device.

use chrono::Datelike;

use crate::clock;
use crate::i18n::I18n;
use crate::model::{
    AttendanceState, HistoryRecord, HistorySummary, NO_TIME, StatusSnapshot,
};

/// Patchable text slots, the i18n side of the rendering seam.
pub trait TextSink {
    fn set_text(&self, slot: &str, text: &str);
}

/// Everything the attendance page can show.
pub trait View: TextSink {
    fn render_status(&self, status: &StatusView);
    fn render_clock(&self, time: &str, date: &str);
    fn set_loading(&self, visible: bool);
    fn show_error(&self, message: &str);
    fn hide_error(&self);
    fn show_success(&self, message: &str);
    fn hide_success(&self);
    fn render_history(&self, rows: &[HistoryRow], summary: &HistorySummary);
    fn show_history_empty(&self);
}

/// Check-in/check-out times shown when the info panel is visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoPanel {
    pub check_in_time: String,
    pub check_out_time: String,
}

/// Fully resolved render state for the status block. Only [`status_view`]
/// builds these, so button enablement and panel visibility cannot drift from
/// the reported state.
#[derive(Debug, Clone, PartialEq)]
pub struct StatusView {
    pub state: AttendanceState,
    pub status_text: String,
    pub check_in_enabled: bool,
    pub check_out_enabled: bool,
    /// `None` means the info panel is hidden.
    pub info: Option<InfoPanel>,
}

pub fn status_view(snapshot: &StatusSnapshot, i18n: &I18n) -> StatusView {
    let check_in_time = || {
        snapshot
            .check_in_time
            .clone()
            .unwrap_or_else(|| NO_TIME.to_owned())
    };

    match snapshot.status {
        AttendanceState::NotCheckedIn => StatusView {
            state: snapshot.status,
            status_text: i18n.lookup(
                "attendance.status_text.not_checked_in",
                "Chưa chấm công hôm nay",
            ),
            check_in_enabled: true,
            check_out_enabled: false,
            info: None,
        },
        AttendanceState::CheckedIn => StatusView {
            state: snapshot.status,
            status_text: i18n.lookup(
                "attendance.status_text.checked_in",
                "Đã check in - Sẵn sàng check out",
            ),
            check_in_enabled: false,
            check_out_enabled: true,
            info: Some(InfoPanel {
                check_in_time: check_in_time(),
                // The day is still open, so the out-time is always the sentinel.
                check_out_time: NO_TIME.to_owned(),
            }),
        },
        AttendanceState::CheckedOut => StatusView {
            state: snapshot.status,
            status_text: i18n.lookup(
                "attendance.status_text.checked_out",
                "Hoàn thành chấm công hôm nay",
            ),
            check_in_enabled: false,
            check_out_enabled: false,
            info: Some(InfoPanel {
                check_in_time: check_in_time(),
                check_out_time: snapshot
                    .check_out_time
                    .clone()
                    .unwrap_or_else(|| NO_TIME.to_owned()),
            }),
        },
    }
}

/// One display-ready table row of attendance history.
#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRow {
    pub date: String,
    pub weekday: String,
    pub check_in_time: String,
    pub check_out_time: String,
    pub work_hours: String,
    pub badge_class: String,
    pub status_text: String,
    pub notes: String,
}

pub fn history_rows(records: &[HistoryRecord], i18n: &I18n) -> Vec<HistoryRow> {
    let lang = i18n.active_language();
    records
        .iter()
        .map(|record| HistoryRow {
            date: clock::format_date(lang, record.date),
            weekday: clock::weekday_label(lang, record.date.weekday()).to_owned(),
            check_in_time: record
                .check_in_time
                .clone()
                .unwrap_or_else(|| NO_TIME.to_owned()),
            check_out_time: record
                .check_out_time
                .clone()
                .unwrap_or_else(|| NO_TIME.to_owned()),
            work_hours: match record.work_hours {
                Some(hours) if hours > 0.0 => format!("{hours}h"),
                _ => "--".to_owned(),
            },
            badge_class: format!("status-{}", record.status),
            status_text: i18n.lookup(
                &format!("attendance.day_status.{}", record.status),
                &record.status.to_string(),
            ),
            notes: record.notes.clone().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::DayStatus;
    use crate::storage::MemoryLanguageStore;
    use chrono::NaiveDate;
    use rstest::rstest;

    fn i18n(code: &str) -> I18n {
        I18n::new(Box::new(MemoryLanguageStore::with_value(code)))
    }

    fn snapshot(status: AttendanceState) -> StatusSnapshot {
        StatusSnapshot {
            status,
            check_in_time: Some("08:05:00".into()),
            check_out_time: Some("17:30:00".into()),
            work_hours: None,
            message: None,
        }
    }

    #[rstest]
    #[case(AttendanceState::NotCheckedIn, true, false, false)]
    #[case(AttendanceState::CheckedIn, false, true, true)]
    #[case(AttendanceState::CheckedOut, false, false, true)]
    fn buttons_and_panel_follow_the_state_table(
        #[case] state: AttendanceState,
        #[case] check_in: bool,
        #[case] check_out: bool,
        #[case] panel_visible: bool,
    ) {
        let view = status_view(&snapshot(state), &i18n("en"));
        assert_eq!(view.state, state);
        assert_eq!(view.check_in_enabled, check_in);
        assert_eq!(view.check_out_enabled, check_out);
        assert_eq!(view.info.is_some(), panel_visible);
    }

    #[test]
    fn checked_in_masks_the_out_time() {
        let snap = StatusSnapshot {
            status: AttendanceState::CheckedIn,
            check_in_time: Some("08:05".into()),
            check_out_time: None,
            work_hours: None,
            message: None,
        };
        let view = status_view(&snap, &i18n("en"));
        let info = view.info.unwrap();
        assert_eq!(info.check_in_time, "08:05");
        assert_eq!(info.check_out_time, NO_TIME);
    }

    #[test]
    fn checked_out_shows_both_times() {
        let view = status_view(&snapshot(AttendanceState::CheckedOut), &i18n("vi"));
        assert_eq!(view.status_text, "Hoàn thành chấm công hôm nay");
        let info = view.info.unwrap();
        assert_eq!(info.check_in_time, "08:05:00");
        assert_eq!(info.check_out_time, "17:30:00");
    }

    #[test]
    fn rows_localize_and_fill_placeholders() {
        let records = vec![HistoryRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 3).unwrap(), // a Monday
            check_in_time: Some("08:00:00".into()),
            check_out_time: None,
            work_hours: Some(0.0),
            status: DayStatus::Late,
            notes: None,
        }];

        let rows = history_rows(&records, &i18n("vi"));
        assert_eq!(rows.len(), 1);
        let row = &rows[0];
        assert_eq!(row.date, "03/08/2026");
        assert_eq!(row.weekday, "T2");
        assert_eq!(row.check_out_time, NO_TIME);
        assert_eq!(row.work_hours, "--");
        assert_eq!(row.badge_class, "status-late");
        assert_eq!(row.status_text, "Đi muộn");
        assert_eq!(row.notes, "");
    }

    #[test]
    fn positive_hours_render_with_suffix() {
        let records = vec![HistoryRecord {
            date: NaiveDate::from_ymd_opt(2026, 8, 4).unwrap(),
            check_in_time: Some("08:00:00".into()),
            check_out_time: Some("16:30:00".into()),
            work_hours: Some(8.5),
            status: DayStatus::Present,
            notes: Some("worked from office".into()),
        }];

        let rows = history_rows(&records, &i18n("en"));
        assert_eq!(rows[0].work_hours, "8.5h");
        assert_eq!(rows[0].status_text, "Present");
        assert_eq!(rows[0].weekday, "Tue");
    }
}
