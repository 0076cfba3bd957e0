//! Department API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use shared::models::{Department, DepartmentCreate};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::DepartmentRepository;
use crate::utils::AppResult;

const RESOURCE: &str = "department";

/// List all departments
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Department>>> {
    let repo = DepartmentRepository::new(state.store());
    Ok(Json(repo.find_all()?))
}

/// Create a new department
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<DepartmentCreate>,
) -> AppResult<Json<Department>> {
    let repo = DepartmentRepository::new(state.store());
    let department = repo.create(payload)?;

    audit_log!(&user.id, "create", format!("{}:{}", RESOURCE, department.id));

    Ok(Json(department))
}

/// Delete a department
///
/// Orphans: employees that referenced it survive with a null departmentId.
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = DepartmentRepository::new(state.store());
    repo.delete(&id)?;

    audit_log!(&user.id, "delete", format!("{}:{}", RESOURCE, id));

    Ok(Json(true))
}
