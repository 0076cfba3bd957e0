//! Company Model

use serde::{Deserialize, Serialize};

/// Company entity
///
/// Immutable once created: only the name is set at creation, records are
/// later deleted (cascading to employees), never updated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    pub name: String,
}

/// Create company payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompanyCreate {
    pub name: String,
}
