use async_trait::async_trait;
use chrono::NaiveDate;
use serde::Deserialize;
use thiserror::Error;

use crate::model::{HistoryRecord, StatusSnapshot};

pub mod http;

pub use http::HttpAttendanceApi;

/// The two failure channels of the attendance endpoints: a 2xx body carrying
/// an `error` field, and everything the transport or decoder can throw.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Response-carried `{error}` payload; the text goes to the user verbatim.
    #[error("{0}")]
    Backend(String),
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("unexpected response shape: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Success payload of a check-in or check-out call.
#[derive(Debug, Clone, Deserialize)]
pub struct ActionReceipt {
    pub message: String,
    #[serde(default)]
    pub check_in_time: Option<String>,
    #[serde(default)]
    pub check_out_time: Option<String>,
    #[serde(default)]
    pub work_hours: Option<f64>,
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Success payload of an attendance-history call. The server echoes the
/// range it actually resolved.
#[derive(Debug, Clone, Deserialize)]
pub struct HistoryPage {
    pub history: Vec<HistoryRecord>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}

/// Client port for the four attendance endpoints. The driver talks to this
/// trait only; tests supply an in-memory implementation. Futures are `?Send`
/// on purpose: the whole layer runs on a single-threaded cooperative runtime.
#[async_trait(?Send)]
pub trait AttendanceApi {
    async fn status(&self) -> Result<StatusSnapshot, ApiError>;
    async fn check_in(&self) -> Result<ActionReceipt, ApiError>;
    async fn check_out(&self) -> Result<ActionReceipt, ApiError>;
    async fn history(&self, start_date: &str, end_date: &str) -> Result<HistoryPage, ApiError>;
}
