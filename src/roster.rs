//! In-memory state behind the listing page.
use crate::models::EmployeeRecord;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Failed(String),
    Loaded,
}

/// What the listing page renders in place of the table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ListingDisplay {
    Loading,
    Failed(String),
    Empty,
    Table,
}

impl ListingDisplay {
    pub fn resolve(load: &LoadState, roster_is_empty: bool) -> Self {
        match load {
            LoadState::Loading => ListingDisplay::Loading,
            LoadState::Failed(message) => ListingDisplay::Failed(message.clone()),
            LoadState::Loaded if roster_is_empty => ListingDisplay::Empty,
            LoadState::Loaded => ListingDisplay::Table,
        }
    }
}

/// Records as last fetched, patched locally after each successful edit or
/// delete instead of re-fetching.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Roster {
    records: Vec<EmployeeRecord>,
}

impl From<Vec<EmployeeRecord>> for Roster {
    fn from(records: Vec<EmployeeRecord>) -> Self {
        Self { records }
    }
}

impl Roster {
    pub fn records(&self) -> &[EmployeeRecord] {
        &self.records
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn get(&self, employee_id: &str) -> Option<&EmployeeRecord> {
        self.records.iter().find(|r| r.employee_id == employee_id)
    }

    /// Swaps in `updated` for every record sharing its employee ID.
    pub fn replace(&mut self, updated: &EmployeeRecord) -> bool {
        let mut hit = false;
        for record in self.records.iter_mut().filter(|r| r.employee_id == updated.employee_id) {
            *record = updated.clone();
            hit = true;
        }
        hit
    }

    pub fn remove(&mut self, employee_id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.employee_id != employee_id);
        self.records.len() != before
    }
}

/// Which record, if any, the inline edit panel is showing.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EditPanel {
    employee_id: Option<String>,
}

impl EditPanel {
    pub fn employee_id(&self) -> Option<&str> {
        self.employee_id.as_deref()
    }

    pub fn is_open(&self) -> bool {
        self.employee_id.is_some()
    }

    pub fn open(&mut self, employee_id: String) {
        self.employee_id = Some(employee_id);
    }

    pub fn close(&mut self) {
        self.employee_id = None;
    }

    /// Closes the panel only while it still shows `employee_id`; a request
    /// finishing late must not close a panel opened for another record.
    pub fn close_if_showing(&mut self, employee_id: &str) -> bool {
        if self.employee_id() != Some(employee_id) {
            return false;
        }
        self.close();
        true
    }
}
