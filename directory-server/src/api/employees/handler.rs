//! Employee API Handlers

use axum::{
    Extension, Json,
    extract::{Path, Query, State},
    http::{HeaderMap, HeaderValue, header},
};
use serde::Deserialize;

use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, EnrichedEmployee};

use crate::audit_log;
use crate::auth::CurrentUser;
use crate::core::ServerState;
use crate::db::repository::{CompanyRepository, EmployeeRepository};
use crate::services::export_employees;
use crate::utils::{AppError, AppResult};

const RESOURCE: &str = "employee";

/// Filename fallback when the requested company id does not resolve
const UNKNOWN_COMPANY: &str = "Компания";

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListQuery {
    pub company_id: Option<String>,
    pub search: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportQuery {
    pub company_id: Option<String>,
}

/// List employees, enriched with company/department names
///
/// Optional filters: `companyId` (exact) and `search` (substring over full
/// name, phone, and resolved department name).
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListQuery>,
) -> AppResult<Json<Vec<EnrichedEmployee>>> {
    let repo = EmployeeRepository::new(state.store());

    let company_id = query.company_id.as_deref().filter(|s| !s.is_empty());
    let search = query.search.as_deref().filter(|s| !s.is_empty());

    Ok(Json(repo.find_enriched(company_id, search)?))
}

/// Create a new employee
pub async fn create(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Json(payload): Json<EmployeeCreate>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.store());
    let employee = repo.create(payload)?;

    audit_log!(&user.id, "create", format!("{}:{}", RESOURCE, employee.id));

    Ok(Json(employee))
}

/// Replace an employee's fields
pub async fn update(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
    Json(payload): Json<EmployeeUpdate>,
) -> AppResult<Json<Employee>> {
    let repo = EmployeeRepository::new(state.store());
    let employee = repo.update(&id, payload)?;

    audit_log!(&user.id, "update", format!("{}:{}", RESOURCE, id));

    Ok(Json(employee))
}

/// Delete an employee
pub async fn delete(
    State(state): State<ServerState>,
    Extension(user): Extension<CurrentUser>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = EmployeeRepository::new(state.store());
    repo.delete(&id)?;

    audit_log!(&user.id, "delete", format!("{}:{}", RESOURCE, id));

    Ok(Json(true))
}

/// Export employees as a styled XLSX document
///
/// Applies the company filter only (no free-text search). The response
/// carries the workbook bytes with a suggested, URL-encoded filename.
pub async fn export(
    State(state): State<ServerState>,
    Query(query): Query<ExportQuery>,
) -> AppResult<(HeaderMap, Vec<u8>)> {
    let company_id = query.company_id.as_deref().filter(|s| !s.is_empty());

    let rows = EmployeeRepository::new(state.store()).find_enriched(company_id, None)?;

    let company_label = match company_id {
        Some(id) => Some(
            CompanyRepository::new(state.store())
                .find_by_id(id)?
                .map(|c| c.name)
                .unwrap_or_else(|| UNKNOWN_COMPANY.to_string()),
        ),
        None => None,
    };

    let export = export_employees(
        &rows,
        company_label.as_deref(),
        chrono::Local::now().date_naive(),
    )
    .map_err(|e| AppError::internal(format!("Failed to build workbook: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static(
            "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet",
        ),
    );
    headers.insert(
        header::CONTENT_DISPOSITION,
        HeaderValue::from_str(&format!(
            "attachment; filename=\"{}\"",
            urlencoding::encode(&export.filename)
        ))
        .map_err(|e| AppError::internal(format!("Bad export filename: {}", e)))?,
    );

    Ok((headers, export.bytes))
}
