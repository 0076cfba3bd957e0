//! Employee Model

use serde::{Deserialize, Serialize};

/// Employee entity as persisted in the snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub full_name: String,
    pub position: String,
    /// Must reference an existing company (checked at create/update)
    pub company_id: String,
    /// Optional; cleared to null when the department is deleted
    #[serde(default)]
    pub department_id: Option<String>,
    pub phone: String,
    pub email: String,
}

/// Create employee payload
///
/// fullName, position, companyId, phone and email are required non-empty;
/// departmentId is optional.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeCreate {
    #[serde(default)]
    pub full_name: String,
    #[serde(default)]
    pub position: String,
    #[serde(default)]
    pub company_id: String,
    #[serde(default)]
    pub department_id: Option<String>,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub email: String,
}

/// Update employee payload
///
/// Full replacement, not a merge: fields omitted by the caller deserialize to
/// their defaults and are validated exactly like a create.
pub type EmployeeUpdate = EmployeeCreate;

/// Employee enriched with resolved company/department names
///
/// Computed at read time; `company_name`/`department_name` fall back to the
/// empty string when the reference does not resolve.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedEmployee {
    #[serde(flatten)]
    pub employee: Employee,
    pub company_name: String,
    pub department_name: String,
}
