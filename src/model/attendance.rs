use serde::{Deserialize, Serialize};

/// Placeholder shown wherever the server has no time for us.
pub const NO_TIME: &str = "--:--";

/// Today's attendance state as reported by the status endpoint. The client
/// never derives this locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceState {
    NotCheckedIn,
    CheckedIn,
    CheckedOut,
}

impl AttendanceState {
    /// Indicator style name, kept identical to the web widget's CSS classes.
    pub fn indicator_class(&self) -> &'static str {
        match self {
            AttendanceState::NotCheckedIn => "status-not-checked",
            AttendanceState::CheckedIn => "status-checked-in",
            AttendanceState::CheckedOut => "status-checked-out",
        }
    }
}

/// Server-reported snapshot of today's attendance. Fetched fresh on load and
/// after every mutating action, overwritten wholesale each time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub status: AttendanceState,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub work_hours: Option<f64>,
    #[serde(default)]
    pub message: Option<String>,
}
