//! Company API Handlers

use axum::{
    Extension, Json,
    extract::{Path, State},
};

use shared::models::{Company, CompanyCreate};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::CompanyRepository;
use crate::utils::AppResult;

const RESOURCE: &str = "company";

/// List all companies
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<Company>>> {
    let repo = CompanyRepository::new(state.store());
    Ok(Json(repo.find_all()?))
}

/// Create a new company
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<CompanyCreate>,
) -> AppResult<Json<Company>> {
    let repo = CompanyRepository::new(state.store());
    let company = repo.create(payload)?;

    audit_log!(&user.id, "create", format!("{}:{}", RESOURCE, company.id));

    Ok(Json(company))
}

/// Delete a company
///
/// Cascades: employees of the deleted company are deleted with it.
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = CompanyRepository::new(state.store());
    repo.delete(&id)?;

    audit_log!(&user.id, "delete", format!("{}:{}", RESOURCE, id));

    Ok(Json(true))
}
