use reqwest::{Response, Url};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::EmployeeRecord;

pub const LIST_FAILED: &str = "Failed to fetch employee details.";
pub const CREATE_FAILED: &str = "Error adding employee.";
pub const UPDATE_FAILED: &str = "Failed to update employee.";
pub const DELETE_FAILED: &str = "Failed to delete employee.";
pub const CREATED: &str = "Employee added successfully.";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("invalid API base URL: {0}")]
    InvalidBaseUrl(String),
    #[error("request failed: {0}")]
    Transport(String),
    #[error("server responded with status {status}")]
    Rejected { status: u16, message: Option<String> },
    #[error("unexpected response body: {0}")]
    Decode(String),
}

impl ApiError {
    /// Text for the view: whatever the server said, or `fallback` when the
    /// failure carried no message.
    pub fn message_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected { message: Some(message), .. } => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Pulls a human readable message out of a response body.
pub fn server_message(body: &str) -> Option<String> {
    let body = body.trim();
    if body.is_empty() {
        return None;
    }
    match serde_json::from_str::<Value>(body) {
        Ok(Value::String(s)) => Some(s).filter(|s| !s.trim().is_empty()),
        Ok(Value::Object(map)) => ["message", "error", "msg"]
            .iter()
            .find_map(|key| map.get(*key).and_then(Value::as_str))
            .map(str::to_string)
            .or_else(|| Some(body.to_string())),
        _ => Some(body.to_string()),
    }
}

/// Thin client for the employee REST API. No retries, no caching.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: Url,
    http: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, ApiError> {
        let base = Url::parse(base_url.trim()).map_err(|e| ApiError::InvalidBaseUrl(e.to_string()))?;
        if base.cannot_be_a_base() || !matches!(base.scheme(), "http" | "https") {
            return Err(ApiError::InvalidBaseUrl(base_url.to_string()));
        }
        Ok(Self {
            base,
            http: reqwest::Client::new(),
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base
    }

    /// Appends percent-encoded path segments to the base URL.
    pub fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        url.set_query(None);
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub async fn list_employees(&self) -> Result<Vec<EmployeeRecord>, ApiError> {
        let url = self.endpoint(&["employees"]);
        debug!(%url, "listing employees");
        let resp = self.http.get(url).send().await.map_err(transport)?;
        let resp = ensure_success(resp).await?;
        let records: Vec<EmployeeRecord> = resp
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))?;
        debug!(count = records.len(), "employees fetched");
        Ok(records)
    }

    /// Returns the server's confirmation message.
    pub async fn create_employee(&self, record: &EmployeeRecord) -> Result<String, ApiError> {
        let url = self.endpoint(&["add-employee"]);
        debug!(%url, employee_id = %record.employee_id, "creating employee");
        let resp = self.http.post(url).json(record).send().await.map_err(transport)?;
        let resp = ensure_success(resp).await?;
        let body = resp.text().await.map_err(transport)?;
        Ok(server_message(&body).unwrap_or_else(|| CREATED.to_string()))
    }

    pub async fn update_employee(&self, employee_id: &str, record: &EmployeeRecord) -> Result<(), ApiError> {
        let url = self.endpoint(&["employees", employee_id]);
        debug!(%url, "updating employee");
        let resp = self.http.put(url).json(record).send().await.map_err(transport)?;
        ensure_success(resp).await?;
        Ok(())
    }

    pub async fn delete_employee(&self, employee_id: &str) -> Result<(), ApiError> {
        let url = self.endpoint(&["employees", employee_id]);
        debug!(%url, "deleting employee");
        let resp = self.http.delete(url).send().await.map_err(transport)?;
        ensure_success(resp).await?;
        Ok(())
    }
}

fn transport(e: reqwest::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

async fn ensure_success(resp: Response) -> Result<Response, ApiError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let body = resp.text().await.unwrap_or_default();
    let message = server_message(&body);
    warn!(status = status.as_u16(), ?message, "request rejected");
    Err(ApiError::Rejected {
        status: status.as_u16(),
        message,
    })
}
