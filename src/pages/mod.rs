mod creation;
mod field;
mod listing;

pub use creation::AddEmployee;
pub use field::FieldInput;
pub use listing::EmployeeDetails;

/// Client-side routes.
pub mod paths {
    pub const CREATE: &str = "/";
    pub const LIST: &str = "/employees";
}
