//! Directory behavior: referential rules, search, enrichment
//!
//! Drives the repositories against a real snapshot file on disk.

use std::sync::Arc;

use directory_server::db::DirectoryStore;
use directory_server::db::repository::{
    CompanyRepository, DepartmentRepository, EmployeeRepository, RepoError, UserRepository,
};
use shared::models::{CompanyCreate, DepartmentCreate, EmployeeCreate};

fn test_store() -> (tempfile::TempDir, Arc<DirectoryStore>) {
    let dir = tempfile::tempdir().unwrap();
    let store = Arc::new(DirectoryStore::new(dir.path().join("directory.json")));
    (dir, store)
}

fn employee_payload(
    full_name: &str,
    company_id: &str,
    department_id: Option<&str>,
    phone: &str,
) -> EmployeeCreate {
    EmployeeCreate {
        full_name: full_name.to_string(),
        position: "Manager".to_string(),
        company_id: company_id.to_string(),
        department_id: department_id.map(str::to_string),
        phone: phone.to_string(),
        email: format!(
            "{}@directory.test",
            full_name.to_lowercase().replace(' ', ".")
        ),
    }
}

#[test]
fn duplicate_company_name_fails_case_insensitively() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store);

    companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();

    let err = companies
        .create(CompanyCreate {
            name: "acme".to_string(),
        })
        .unwrap_err();

    assert!(matches!(err, RepoError::Duplicate(_)));
    assert_eq!(companies.find_all().unwrap().len(), 1);
}

#[test]
fn duplicate_username_fails_case_insensitively() {
    let (_dir, store) = test_store();
    let users = UserRepository::new(store);

    users.register("Sam", "password1").unwrap();
    let err = users.register("sAM", "password2").unwrap_err();

    assert!(matches!(err, RepoError::Duplicate(_)));
}

#[test]
fn short_password_is_rejected() {
    let (_dir, store) = test_store();
    let users = UserRepository::new(store);

    let err = users.register("sam", "12345").unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn unknown_user_and_wrong_password_fail_the_same_way() {
    let (_dir, store) = test_store();
    let users = UserRepository::new(store);

    users.register("sam", "password1").unwrap();

    assert!(matches!(
        users.authenticate("nobody", "password1"),
        Err(RepoError::InvalidCredentials)
    ));
    assert!(matches!(
        users.authenticate("sam", "wrong-password"),
        Err(RepoError::InvalidCredentials)
    ));
    assert!(users.authenticate("sam", "password1").is_ok());
}

#[test]
fn company_delete_cascades_only_its_employees() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();
    let globex = companies
        .create(CompanyCreate {
            name: "Globex".to_string(),
        })
        .unwrap();

    employees
        .create(employee_payload("Ivan Petrov", &acme.id, None, "+111"))
        .unwrap();
    employees
        .create(employee_payload("Anna Sidorova", &acme.id, None, "+222"))
        .unwrap();
    let survivor = employees
        .create(employee_payload("Hank Scorpio", &globex.id, None, "+333"))
        .unwrap();

    companies.delete(&acme.id).unwrap();

    let remaining = employees.find_enriched(None, None).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].employee.id, survivor.id);

    // Unknown id is a no-op, not an error
    companies.delete("no-such-company").unwrap();
    assert_eq!(employees.find_enriched(None, None).unwrap().len(), 1);
}

#[test]
fn department_delete_orphans_employees() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let departments = DepartmentRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();
    let sales = departments
        .create(DepartmentCreate {
            name: "Sales".to_string(),
        })
        .unwrap();

    let created = employees
        .create(employee_payload(
            "Ivan Petrov",
            &acme.id,
            Some(&sales.id),
            "+111",
        ))
        .unwrap();

    departments.delete(&sales.id).unwrap();

    let listed = employees.find_enriched(None, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employee.id, created.id);
    assert_eq!(listed[0].employee.department_id, None);
    assert_eq!(listed[0].department_name, "");
}

#[test]
fn search_matches_department_name() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let departments = DepartmentRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();
    let sales = departments
        .create(DepartmentCreate {
            name: "Sales".to_string(),
        })
        .unwrap();

    employees
        .create(employee_payload(
            "Ivan Petrov",
            &acme.id,
            Some(&sales.id),
            "+111",
        ))
        .unwrap();
    employees
        .create(employee_payload("Anna Sidorova", &acme.id, None, "+222"))
        .unwrap();

    // Term matches neither name nor phone of the first employee, only the
    // resolved department name
    let hits = employees.find_enriched(None, Some("sales")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].employee.full_name, "Ivan Petrov");

    // Name search is case-insensitive
    let hits = employees.find_enriched(None, Some("anna")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].employee.full_name, "Anna Sidorova");

    // Phone search is a raw substring match
    let hits = employees.find_enriched(None, Some("+22")).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].employee.full_name, "Anna Sidorova");
}

#[test]
fn filters_combine_with_and_semantics() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();
    let globex = companies
        .create(CompanyCreate {
            name: "Globex".to_string(),
        })
        .unwrap();

    employees
        .create(employee_payload("Ivan Petrov", &acme.id, None, "+111"))
        .unwrap();
    employees
        .create(employee_payload("Ivan Smirnov", &globex.id, None, "+222"))
        .unwrap();

    let hits = employees
        .find_enriched(Some(&globex.id), Some("ivan"))
        .unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].employee.full_name, "Ivan Smirnov");
}

#[test]
fn created_employee_lists_with_resolved_names() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let departments = DepartmentRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();
    let sales = departments
        .create(DepartmentCreate {
            name: "Sales".to_string(),
        })
        .unwrap();

    employees
        .create(EmployeeCreate {
            full_name: "Ivan Petrov".to_string(),
            position: "Manager".to_string(),
            company_id: acme.id.clone(),
            department_id: Some(sales.id.clone()),
            phone: "+1234567890".to_string(),
            email: "ivan@acme.test".to_string(),
        })
        .unwrap();

    let listed = employees.find_enriched(Some(&acme.id), None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].company_name, "Acme");
    assert_eq!(listed[0].department_name, "Sales");

    // Deleting the department re-lists the same employee, orphaned
    departments.delete(&sales.id).unwrap();
    let listed = employees.find_enriched(Some(&acme.id), None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employee.department_id, None);
    assert_eq!(listed[0].department_name, "");
}

#[test]
fn employee_create_validates_fields_and_references() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();

    // Empty required fields are reported by name
    let mut payload = employee_payload("Ivan Petrov", &acme.id, None, "+111");
    payload.position = String::new();
    payload.phone = "  ".to_string();
    let err = employees.create(payload).unwrap_err();
    match err {
        RepoError::Validation(msg) => {
            assert!(msg.contains("position"));
            assert!(msg.contains("phone"));
        }
        other => panic!("expected validation error, got {other:?}"),
    }

    // companyId must reference a live company
    let err = employees
        .create(employee_payload("Ivan Petrov", "ghost-company", None, "+111"))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));

    // departmentId, when present, must reference a live department
    let err = employees
        .create(employee_payload(
            "Ivan Petrov",
            &acme.id,
            Some("ghost-department"),
            "+111",
        ))
        .unwrap_err();
    assert!(matches!(err, RepoError::Validation(_)));
}

#[test]
fn employee_update_replaces_the_record() {
    let (_dir, store) = test_store();
    let companies = CompanyRepository::new(store.clone());
    let employees = EmployeeRepository::new(store);

    let acme = companies
        .create(CompanyCreate {
            name: "Acme".to_string(),
        })
        .unwrap();

    let created = employees
        .create(employee_payload("Ivan Petrov", &acme.id, None, "+111"))
        .unwrap();

    let mut replacement = employee_payload("Ivan Petrov", &acme.id, None, "+999");
    replacement.position = "Director".to_string();
    let updated = employees.update(&created.id, replacement).unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.position, "Director");
    assert_eq!(updated.phone, "+999");

    let listed = employees.find_enriched(None, None).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].employee.phone, "+999");

    // Unknown id is an error for update, unlike delete
    let err = employees
        .update("no-such-id", employee_payload("X Y", &acme.id, None, "+1"))
        .unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));

    employees.delete(&created.id).unwrap();
    employees.delete(&created.id).unwrap(); // no-op the second time
    assert!(employees.find_enriched(None, None).unwrap().is_empty());
}
