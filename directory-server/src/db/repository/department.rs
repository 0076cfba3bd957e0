//! Department Repository

use std::sync::Arc;

use shared::models::{Department, DepartmentCreate};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::DirectoryStore;

#[derive(Clone)]
pub struct DepartmentRepository {
    base: BaseRepository,
}

impl DepartmentRepository {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// List all departments in insertion order
    pub fn find_all(&self) -> RepoResult<Vec<Department>> {
        Ok(self.base.store().load()?.departments)
    }

    /// Create a new department
    ///
    /// Name uniqueness is case-insensitive and global (departments are not
    /// scoped to a company).
    pub fn create(&self, data: DepartmentCreate) -> RepoResult<Department> {
        let name = data.name.trim().to_string();
        if name.is_empty() {
            return Err(RepoError::Validation(
                "Department name is required".to_string(),
            ));
        }

        self.base.store().mutate(|snap| {
            let lowered = name.to_lowercase();
            if snap
                .departments
                .iter()
                .any(|d| d.name.to_lowercase() == lowered)
            {
                return Err(RepoError::Duplicate(format!(
                    "Department '{}' already exists",
                    name
                )));
            }

            let department = Department {
                id: Uuid::new_v4().to_string(),
                name,
            };
            snap.departments.push(department.clone());
            Ok(department)
        })
    }

    /// Delete a department, orphaning employees that referenced it
    ///
    /// The employees survive with `departmentId` cleared to null. No-op when
    /// the id does not exist.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.base.store().mutate(|snap| {
            snap.departments.retain(|d| d.id != id);
            for employee in snap.employees.iter_mut() {
                if employee.department_id.as_deref() == Some(id) {
                    employee.department_id = None;
                }
            }
            Ok(())
        })
    }
}
