//! Persisted snapshot layout

use serde::{Deserialize, Serialize};
use shared::models::{Company, Department, Employee};

use crate::db::models::User;

/// The complete persisted state: four named record collections.
///
/// Rewritten wholesale on every mutation; collections keep insertion order,
/// which is also the order reads return.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default)]
    pub companies: Vec<Company>,
    #[serde(default)]
    pub departments: Vec<Department>,
    #[serde(default)]
    pub users: Vec<User>,
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Snapshot {
    pub fn find_company(&self, id: &str) -> Option<&Company> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn find_department(&self, id: &str) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }
}
