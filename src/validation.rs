//! Client-side checks run before any create or update request.
use chrono::{Local, NaiveDate};
use regex::Regex;
use std::sync::OnceLock;
use thiserror::Error;

use crate::models::{parse_join_date, Department, EmployeeRecord, Field};

/// The `Display` text of each variant is what the form shows.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("All fields are mandatory.")]
    MissingField(Field),
    #[error("Employee ID must be a maximum of 10 characters.")]
    EmployeeIdTooLong,
    #[error("Phone number must be exactly 10 digits.")]
    InvalidPhone,
    #[error("Date of Joining must be a valid date.")]
    InvalidJoinDate,
    #[error("Date of Joining cannot be a future date.")]
    FutureJoinDate,
    #[error("Department must be one of IT, HR, Finance, Marketing.")]
    UnknownDepartment,
}

fn phone_pattern() -> &'static Regex {
    static PHONE: OnceLock<Regex> = OnceLock::new();
    PHONE.get_or_init(|| Regex::new(r"^[0-9]{10}$").unwrap())
}

/// The user's calendar date, used as the upper bound for join dates.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Checks a draft in a fixed order and reports the first failure.
pub fn validate(record: &EmployeeRecord, today: NaiveDate) -> Result<(), ValidationError> {
    if let Some(field) = record.first_empty_field() {
        return Err(ValidationError::MissingField(field));
    }

    if record.employee_id.chars().count() > Field::EMPLOYEE_ID_MAX_LEN {
        return Err(ValidationError::EmployeeIdTooLong);
    }

    if !phone_pattern().is_match(&record.phone) {
        return Err(ValidationError::InvalidPhone);
    }

    let joined = parse_join_date(&record.date_of_joining).ok_or(ValidationError::InvalidJoinDate)?;
    if joined > today {
        return Err(ValidationError::FutureJoinDate);
    }

    record
        .department
        .parse::<Department>()
        .map_err(|_| ValidationError::UnknownDepartment)?;

    Ok(())
}
