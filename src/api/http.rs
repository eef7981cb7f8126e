use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use super::{ActionReceipt, ApiError, AttendanceApi, HistoryPage};
use crate::model::StatusSnapshot;

/// HTTP implementation of [`AttendanceApi`] against the HR backend.
///
/// No timeouts and no retries: a hung request simply keeps the loading
/// indicator up, matching the web widget.
pub struct HttpAttendanceApi {
    client: Client,
    base_url: String,
    api_prefix: String,
}

impl HttpAttendanceApi {
    pub fn new(client: Client, base_url: impl Into<String>, api_prefix: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_prefix: api_prefix.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}{}", self.base_url, self.api_prefix, path)
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "GET");
        let body = self
            .client
            .get(&url)
            .query(query)
            .send()
            .await?
            .json::<Value>()
            .await?;
        Ok(body)
    }

    async fn post(&self, path: &str) -> Result<Value, ApiError> {
        let url = self.url(path);
        debug!(%url, "POST");
        // Empty JSON body, same as the widget's fetch calls.
        let body = self
            .client
            .post(&url)
            .json(&serde_json::json!({}))
            .send()
            .await?
            .json::<Value>()
            .await?;
        Ok(body)
    }
}

/// A body with an `error` field wins regardless of HTTP status; anything
/// else must decode as the expected success shape.
fn unwrap_envelope<T: DeserializeOwned>(body: Value) -> Result<T, ApiError> {
    if let Some(message) = body.get("error").and_then(Value::as_str) {
        return Err(ApiError::Backend(message.to_owned()));
    }
    Ok(serde_json::from_value(body)?)
}

#[async_trait(?Send)]
impl AttendanceApi for HttpAttendanceApi {
    async fn status(&self) -> Result<StatusSnapshot, ApiError> {
        unwrap_envelope(self.get("/attendance-status", &[]).await?)
    }

    async fn check_in(&self) -> Result<ActionReceipt, ApiError> {
        unwrap_envelope(self.post("/check-in").await?)
    }

    async fn check_out(&self) -> Result<ActionReceipt, ApiError> {
        unwrap_envelope(self.post("/check-out").await?)
    }

    async fn history(&self, start_date: &str, end_date: &str) -> Result<HistoryPage, ApiError> {
        let query = [("start_date", start_date), ("end_date", end_date)];
        unwrap_envelope(self.get("/attendance-history", &query).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttendanceState;
    use serde_json::json;

    #[test]
    fn error_field_beats_success_shape() {
        let body = json!({"error": "Already checked in today"});
        let parsed = unwrap_envelope::<ActionReceipt>(body);
        match parsed {
            Err(ApiError::Backend(message)) => assert_eq!(message, "Already checked in today"),
            other => panic!("expected backend error, got {other:?}"),
        }
    }

    #[test]
    fn success_body_decodes() {
        let body = json!({
            "status": "checked_in",
            "check_in_time": "08:05:00",
            "message": "Checked in, ready to check out"
        });
        let snapshot: StatusSnapshot = unwrap_envelope(body).unwrap();
        assert_eq!(snapshot.status, AttendanceState::CheckedIn);
        assert_eq!(snapshot.check_in_time.as_deref(), Some("08:05:00"));
        assert!(snapshot.check_out_time.is_none());
    }

    #[test]
    fn garbage_body_is_a_decode_error() {
        let body = json!({"unexpected": true});
        assert!(matches!(
            unwrap_envelope::<StatusSnapshot>(body),
            Err(ApiError::Decode(_))
        ));
    }
}
