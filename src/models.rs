use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;
use std::str::FromStr;

/// A single employee as exchanged with the remote API.
///
/// Every field is kept as the raw text the form or the server produced; the
/// same struct doubles as the draft held by the creation form and the edit
/// panel. Incoming values that are not strings (a numeric phone, a `null`
/// role, a missing key) are read as text so one odd row cannot fail the list.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase", default)]
pub struct EmployeeRecord {
    #[serde(deserialize_with = "lenient_text")]
    pub name: String,
    #[serde(deserialize_with = "lenient_text")]
    pub employee_id: String,
    #[serde(deserialize_with = "lenient_text")]
    pub email: String,
    #[serde(deserialize_with = "lenient_text")]
    pub phone: String,
    #[serde(deserialize_with = "lenient_text")]
    pub department: String,
    #[serde(deserialize_with = "lenient_text")]
    pub date_of_joining: String,
    #[serde(deserialize_with = "lenient_text")]
    pub role: String,
}

fn lenient_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    })
}

impl EmployeeRecord {
    /// Copy used to seed the edit panel. The join date is cut down to
    /// `YYYY-MM-DD` so a date input can display it.
    pub fn for_editing(&self) -> Self {
        let mut draft = self.clone();
        if let Some(date) = parse_join_date(&self.date_of_joining) {
            draft.date_of_joining = date.format("%Y-%m-%d").to_string();
        }
        draft
    }

    pub fn first_empty_field(&self) -> Option<Field> {
        Field::ALL.into_iter().find(|f| f.value(self).trim().is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Department {
    It,
    Hr,
    Finance,
    Marketing,
}

impl Department {
    pub const ALL: [Department; 4] = [
        Department::It,
        Department::Hr,
        Department::Finance,
        Department::Marketing,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Department::It => "IT",
            Department::Hr => "HR",
            Department::Finance => "Finance",
            Department::Marketing => "Marketing",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Department {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Department::ALL
            .into_iter()
            .find(|d| d.as_str() == s)
            .ok_or_else(|| format!("unknown department: {}", s))
    }
}

/// Which widget renders a field.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Control {
    Input(&'static str),
    DepartmentSelect,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    EmployeeId,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    /// Creation form order.
    pub const ALL: [Field; 7] = [
        Field::Name,
        Field::EmployeeId,
        Field::Email,
        Field::Phone,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    /// Fields offered by the edit panel. The employee ID keys the update
    /// request, so it is shown read-only instead.
    pub const EDITABLE: [Field; 6] = [
        Field::Name,
        Field::Email,
        Field::Phone,
        Field::Department,
        Field::DateOfJoining,
        Field::Role,
    ];

    pub const EMPLOYEE_ID_MAX_LEN: usize = 10;

    /// Form control name, matching the JSON key.
    pub fn name(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::EmployeeId => "employeeId",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Department => "department",
            Field::DateOfJoining => "dateOfJoining",
            Field::Role => "role",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::Phone => "Phone Number",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }

    pub fn control(self) -> Control {
        match self {
            Field::Email => Control::Input("email"),
            Field::Phone => Control::Input("tel"),
            Field::Department => Control::DepartmentSelect,
            Field::DateOfJoining => Control::Input("date"),
            Field::Name | Field::EmployeeId | Field::Role => Control::Input("text"),
        }
    }

    pub fn max_len(self) -> Option<usize> {
        match self {
            Field::EmployeeId => Some(Self::EMPLOYEE_ID_MAX_LEN),
            _ => None,
        }
    }

    pub fn value(self, record: &EmployeeRecord) -> &str {
        match self {
            Field::Name => &record.name,
            Field::EmployeeId => &record.employee_id,
            Field::Email => &record.email,
            Field::Phone => &record.phone,
            Field::Department => &record.department,
            Field::DateOfJoining => &record.date_of_joining,
            Field::Role => &record.role,
        }
    }

    pub fn assign(self, record: &mut EmployeeRecord, value: String) {
        let slot = match self {
            Field::Name => &mut record.name,
            Field::EmployeeId => &mut record.employee_id,
            Field::Email => &mut record.email,
            Field::Phone => &mut record.phone,
            Field::Department => &mut record.department,
            Field::DateOfJoining => &mut record.date_of_joining,
            Field::Role => &mut record.role,
        };
        *slot = value;
    }
}

/// Parses a join date given either as `YYYY-MM-DD` or as an RFC 3339
/// timestamp whose date part is used.
pub fn parse_join_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let date_part = match raw.split_once('T') {
        Some((date, _)) => date,
        None => raw,
    };
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()
}

/// Join date as shown in the listing table.
pub fn format_join_date(raw: &str) -> String {
    match parse_join_date(raw) {
        Some(date) => locale_date(date),
        None => raw.to_string(),
    }
}

#[cfg(target_arch = "wasm32")]
fn locale_date(date: NaiveDate) -> String {
    use chrono::Datelike;

    // Built from local components so the day never shifts with the timezone.
    let js = js_sys::Date::new_with_year_month_day(
        date.year() as u32,
        date.month0() as i32,
        date.day() as i32,
    );
    js.to_locale_date_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

#[cfg(not(target_arch = "wasm32"))]
fn locale_date(date: NaiveDate) -> String {
    date.format("%-m/%-d/%Y").to_string()
}
