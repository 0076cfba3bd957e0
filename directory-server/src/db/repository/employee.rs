//! Employee Repository
//!
//! Holds the query/enrichment engine besides plain CRUD: listing joins in
//! the human-readable company and department names at read time.

use std::sync::Arc;

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, EnrichedEmployee};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::{DirectoryStore, Snapshot};
use crate::utils::validation::missing_fields;

#[derive(Clone)]
pub struct EmployeeRepository {
    base: BaseRepository,
}

impl EmployeeRepository {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// List employees, optionally filtered, enriched with resolved names
    ///
    /// Both filters are optional and combine with AND. The search term
    /// matches case-insensitively against the full name and the resolved
    /// department name, and as a raw substring against the phone. Results
    /// keep the store's insertion order.
    pub fn find_enriched(
        &self,
        company_id: Option<&str>,
        search: Option<&str>,
    ) -> RepoResult<Vec<EnrichedEmployee>> {
        let snap = self.base.store().load()?;
        let needle = search.map(str::to_lowercase);

        let mut result = Vec::new();
        for employee in &snap.employees {
            if let Some(cid) = company_id {
                if employee.company_id != cid {
                    continue;
                }
            }

            let department_name = employee
                .department_id
                .as_deref()
                .and_then(|id| snap.find_department(id))
                .map(|d| d.name.clone())
                .unwrap_or_default();

            if let (Some(term), Some(lowered)) = (search, needle.as_deref()) {
                let matched = employee.full_name.to_lowercase().contains(lowered)
                    || employee.phone.contains(term)
                    || (!department_name.is_empty()
                        && department_name.to_lowercase().contains(lowered));
                if !matched {
                    continue;
                }
            }

            let company_name = snap
                .find_company(&employee.company_id)
                .map(|c| c.name.clone())
                .unwrap_or_default();

            result.push(EnrichedEmployee {
                employee: employee.clone(),
                company_name,
                department_name,
            });
        }

        Ok(result)
    }

    /// Create a new employee
    pub fn create(&self, data: EmployeeCreate) -> RepoResult<Employee> {
        self.base.store().mutate(|snap| {
            Self::validate(&data, snap)?;

            let employee = Employee {
                id: Uuid::new_v4().to_string(),
                full_name: data.full_name,
                position: data.position,
                company_id: data.company_id,
                department_id: normalize_department(data.department_id),
                phone: data.phone,
                email: data.email,
            };
            snap.employees.push(employee.clone());
            Ok(employee)
        })
    }

    /// Replace an existing employee's fields
    ///
    /// Full replacement, not a merge; the payload is validated exactly like
    /// a create so the company reference stays live.
    pub fn update(&self, id: &str, data: EmployeeUpdate) -> RepoResult<Employee> {
        self.base.store().mutate(|snap| {
            let index = snap
                .employees
                .iter()
                .position(|e| e.id == id)
                .ok_or_else(|| RepoError::NotFound(format!("Employee {} not found", id)))?;

            Self::validate(&data, snap)?;

            let employee = Employee {
                id: id.to_string(),
                full_name: data.full_name,
                position: data.position,
                company_id: data.company_id,
                department_id: normalize_department(data.department_id),
                phone: data.phone,
                email: data.email,
            };
            snap.employees[index] = employee.clone();
            Ok(employee)
        })
    }

    /// Delete an employee; no-op when the id does not exist
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.base.store().mutate(|snap| {
            snap.employees.retain(|e| e.id != id);
            Ok(())
        })
    }

    /// Required-field and referential checks shared by create and update
    fn validate(data: &EmployeeCreate, snap: &Snapshot) -> Result<(), RepoError> {
        let missing = missing_fields(&[
            ("fullName", &data.full_name),
            ("position", &data.position),
            ("companyId", &data.company_id),
            ("phone", &data.phone),
            ("email", &data.email),
        ]);
        if !missing.is_empty() {
            return Err(RepoError::Validation(format!(
                "Missing required field(s): {}",
                missing.join(", ")
            )));
        }

        if snap.find_company(&data.company_id).is_none() {
            return Err(RepoError::Validation(format!(
                "Unknown company: {}",
                data.company_id
            )));
        }

        if let Some(department_id) = data.department_id.as_deref().filter(|d| !d.is_empty()) {
            if snap.find_department(department_id).is_none() {
                return Err(RepoError::Validation(format!(
                    "Unknown department: {}",
                    department_id
                )));
            }
        }

        Ok(())
    }
}

/// An absent department may arrive as null or as an empty string; store null
fn normalize_department(department_id: Option<String>) -> Option<String> {
    department_id.filter(|d| !d.trim().is_empty())
}
