use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

/// Per-day attendance classification used by history rows and summary cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DayStatus {
    Present,
    Absent,
    Late,
    HalfDay,
}

/// One row of the attendance-history response, one per calendar date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub date: NaiveDate,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub work_hours: Option<f64>,
    pub status: DayStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HistorySummary {
    pub total_days: usize,
    /// Sum of reported work hours, rounded to one decimal.
    pub total_hours: f64,
    pub present_days: usize,
    pub absent_days: usize,
}

pub fn summarize(history: &[HistoryRecord]) -> HistorySummary {
    let mut total_hours = 0.0;
    let mut present_days = 0;
    let mut absent_days = 0;

    for record in history {
        if let Some(hours) = record.work_hours {
            total_hours += hours;
        }
        match record.status {
            DayStatus::Present => present_days += 1,
            DayStatus::Absent => absent_days += 1,
            _ => {}
        }
    }

    HistorySummary {
        total_days: history.len(),
        total_hours: (total_hours * 10.0).round() / 10.0,
        present_days,
        absent_days,
    }
}

/// Last 30 days ending today, the widget's default history filter.
pub fn default_range(today: NaiveDate) -> (NaiveDate, NaiveDate) {
    (today - Duration::days(30), today)
}
