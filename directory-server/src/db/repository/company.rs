//! Company Repository

use std::sync::Arc;

use shared::models::{Company, CompanyCreate};
use uuid::Uuid;

use super::{BaseRepository, RepoError, RepoResult};
use crate::db::DirectoryStore;

#[derive(Clone)]
pub struct CompanyRepository {
    base: BaseRepository,
}

impl CompanyRepository {
    pub fn new(store: Arc<DirectoryStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// List all companies in insertion order
    pub fn find_all(&self) -> RepoResult<Vec<Company>> {
        Ok(self.base.store().load()?.companies)
    }

    /// Find company by id
    pub fn find_by_id(&self, id: &str) -> RepoResult<Option<Company>> {
        Ok(self.base.store().load()?.find_company(id).cloned())
    }

    /// Create a new company
    ///
    /// Name uniqueness is case-insensitive.
    pub fn create(&self, data: CompanyCreate) -> RepoResult<Company> {
        let name = data.name.trim().to_string();
        if name.is_empty() {
            return Err(RepoError::Validation("Company name is required".to_string()));
        }

        self.base.store().mutate(|snap| {
            let lowered = name.to_lowercase();
            if snap
                .companies
                .iter()
                .any(|c| c.name.to_lowercase() == lowered)
            {
                return Err(RepoError::Duplicate(format!(
                    "Company '{}' already exists",
                    name
                )));
            }

            let company = Company {
                id: Uuid::new_v4().to_string(),
                name,
            };
            snap.companies.push(company.clone());
            Ok(company)
        })
    }

    /// Delete a company, cascading to its employees
    ///
    /// No-op (not an error) when the id does not exist.
    pub fn delete(&self, id: &str) -> RepoResult<()> {
        self.base.store().mutate(|snap| {
            snap.companies.retain(|c| c.id != id);
            snap.employees.retain(|e| e.company_id != id);
            Ok(())
        })
    }
}
