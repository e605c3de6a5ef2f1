//! What each form button does, with the reactive wiring left to the pages.
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::api::{ApiClient, CREATE_FAILED, DELETE_FAILED, UPDATE_FAILED};
use crate::models::EmployeeRecord;
use crate::notice::Notice;
use crate::validation::{validate, ValidationError};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Caught before any request went out.
    Rejected(ValidationError),
    /// `reset` is the draft the form continues with.
    Created { message: String, reset: EmployeeRecord },
    Failed(String),
}

impl SubmitOutcome {
    pub fn notice(&self) -> Notice {
        match self {
            SubmitOutcome::Rejected(err) => Notice::error(err.to_string()),
            SubmitOutcome::Created { message, .. } => Notice::success(message.clone()),
            SubmitOutcome::Failed(message) => Notice::error(message.clone()),
        }
    }
}

pub async fn submit_new(api: &ApiClient, draft: &EmployeeRecord, today: NaiveDate) -> SubmitOutcome {
    if let Err(err) = validate(draft, today) {
        debug!(%err, "draft rejected");
        return SubmitOutcome::Rejected(err);
    }

    match api.create_employee(draft).await {
        Ok(message) => {
            info!(employee_id = %draft.employee_id, "employee created");
            SubmitOutcome::Created {
                message,
                reset: EmployeeRecord::default(),
            }
        }
        Err(err) => {
            warn!(%err, employee_id = %draft.employee_id, "create failed");
            SubmitOutcome::Failed(err.message_or(CREATE_FAILED))
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Rejected(ValidationError),
    /// The record to patch into the listing.
    Saved(EmployeeRecord),
    Failed(String),
}

pub async fn save_edit(
    api: &ApiClient,
    employee_id: &str,
    draft: &EmployeeRecord,
    today: NaiveDate,
) -> SaveOutcome {
    if let Err(err) = validate(draft, today) {
        debug!(%err, %employee_id, "edit rejected");
        return SaveOutcome::Rejected(err);
    }

    match api.update_employee(employee_id, draft).await {
        Ok(()) => {
            info!(%employee_id, "employee updated");
            SaveOutcome::Saved(draft.clone())
        }
        Err(err) => {
            warn!(%err, %employee_id, "update failed");
            SaveOutcome::Failed(err.message_or(UPDATE_FAILED))
        }
    }
}

/// Error text is ready for display.
pub async fn delete_record(api: &ApiClient, employee_id: &str) -> Result<(), String> {
    match api.delete_employee(employee_id).await {
        Ok(()) => {
            info!(%employee_id, "employee deleted");
            Ok(())
        }
        Err(err) => {
            warn!(%err, %employee_id, "delete failed");
            Err(err.message_or(DELETE_FAILED))
        }
    }
}
