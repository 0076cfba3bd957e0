//! Business services
//!
//! - [`export`] - spreadsheet projection of the employee directory

pub mod export;

pub use export::{EmployeeExport, export_employees};
