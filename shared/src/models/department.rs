//! Department Model

use serde::{Deserialize, Serialize};

/// Department entity
///
/// Global, not scoped to a company. Deleting a department orphans the
/// employees that referenced it instead of deleting them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Department {
    pub id: String,
    pub name: String,
}

/// Create department payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DepartmentCreate {
    pub name: String,
}
