pub mod attendance;
pub mod history;

pub use attendance::{AttendanceState, NO_TIME, StatusSnapshot};
pub use history::{DayStatus, HistoryRecord, HistorySummary, default_range, summarize};
