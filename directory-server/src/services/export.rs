//! Employee spreadsheet export
//!
//! Projects an enriched employee set into a styled XLSX workbook. The
//! projection is pure: it produces bytes plus a suggested filename and has
//! no other side effects; HTTP delivery is the handler's job.

use chrono::NaiveDate;
use rust_xlsxwriter::{Color, Format, FormatAlign, Workbook, XlsxError};
use shared::models::EnrichedEmployee;

/// Localized column headers, fixed order
const HEADERS: [&str; 6] = ["ФИО", "Должность", "Отдел", "Компания", "Телефон", "Email"];

/// Fixed column widths, one per header
const COLUMN_WIDTHS: [f64; 6] = [25.0, 20.0, 15.0, 18.0, 18.0, 30.0];

const SHEET_NAME: &str = "Сотрудники";

/// Cell fallbacks for unresolved references
const NO_DEPARTMENT: &str = "Не указан";
const NO_COMPANY: &str = "Не указана";

/// Filename placeholder when exporting across all companies
const ALL_COMPANIES: &str = "Все_компании";

/// Header row fill color
const HEADER_FILL: u32 = 0x4472C4;

/// A rendered export document
#[derive(Debug)]
pub struct EmployeeExport {
    /// Suggested filename encoding the company scope and the export date
    pub filename: String,
    /// XLSX document bytes
    pub bytes: Vec<u8>,
}

/// Render the employee rows into a workbook
///
/// `company_label` is the resolved company name when the export is scoped to
/// one company, `None` for an all-companies export. The date is passed in so
/// the output (including the filename) is deterministic.
pub fn export_employees(
    rows: &[EnrichedEmployee],
    company_label: Option<&str>,
    date: NaiveDate,
) -> Result<EmployeeExport, XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let header_format = Format::new()
        .set_bold()
        .set_font_color(Color::White)
        .set_background_color(Color::RGB(HEADER_FILL))
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);

    for (col, header) in HEADERS.iter().enumerate() {
        worksheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
        worksheet.write_with_format(0, col as u16, *header, &header_format)?;
    }

    for (i, row) in rows.iter().enumerate() {
        let r = (i + 1) as u32;
        let department = if row.department_name.is_empty() {
            NO_DEPARTMENT
        } else {
            row.department_name.as_str()
        };
        let company = if row.company_name.is_empty() {
            NO_COMPANY
        } else {
            row.company_name.as_str()
        };

        worksheet.write(r, 0, row.employee.full_name.as_str())?;
        worksheet.write(r, 1, row.employee.position.as_str())?;
        worksheet.write(r, 2, department)?;
        worksheet.write(r, 3, company)?;
        worksheet.write(r, 4, row.employee.phone.as_str())?;
        worksheet.write(r, 5, row.employee.email.as_str())?;
    }

    let bytes = workbook.save_to_buffer()?;
    let filename = format!(
        "Сотрудники_{}_{}.xlsx",
        company_label.unwrap_or(ALL_COMPANIES),
        date.format("%Y-%m-%d")
    );

    Ok(EmployeeExport { filename, bytes })
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::Employee;

    fn sample_row(full_name: &str, department_name: &str) -> EnrichedEmployee {
        EnrichedEmployee {
            employee: Employee {
                id: "e1".to_string(),
                full_name: full_name.to_string(),
                position: "Manager".to_string(),
                company_id: "c1".to_string(),
                department_id: None,
                phone: "+1234567890".to_string(),
                email: "ivan@acme.test".to_string(),
            },
            company_name: "Acme".to_string(),
            department_name: department_name.to_string(),
        }
    }

    #[test]
    fn test_filename_encodes_scope_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();

        let all = export_employees(&[], None, date).unwrap();
        assert_eq!(all.filename, "Сотрудники_Все_компании_2024-03-07.xlsx");

        let scoped = export_employees(&[], Some("Acme"), date).unwrap();
        assert_eq!(scoped.filename, "Сотрудники_Acme_2024-03-07.xlsx");
    }

    #[test]
    fn test_workbook_bytes_are_produced() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
        let rows = vec![
            sample_row("Ivan Petrov", "Sales"),
            sample_row("Anna Sidorova", ""),
        ];

        let export = export_employees(&rows, Some("Acme"), date).unwrap();

        // XLSX is a ZIP container
        assert_eq!(&export.bytes[..4], b"PK\x03\x04");
    }
}
