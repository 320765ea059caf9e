use strum::IntoEnumIterator;

use super::{Column, Status};

/// One sheet column: header text plus a width hint per backend. Excel widths
/// are in characters, Google Sheets widths in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnDef {
    pub name: &'static str,
    pub excel_width: f64,
    pub pixel_width: i32,
}

fn column(name: &'static str, excel_width: f64, pixel_width: i32) -> ColumnDef {
    ColumnDef {
        name,
        excel_width,
        pixel_width,
    }
}

const STATUS_COLUMN_NAME: &str = "Application Status";

/// The constant tracker schema both renderers consume. Built once at program
/// start, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetSpec {
    pub worksheet_title: &'static str,
    columns: Vec<ColumnDef>,
    statuses: Vec<Status>,
    status_column: usize,
}

impl SheetSpec {
    pub fn job_tracker() -> Self {
        let columns = vec![
            column("#", 5.0, 50),
            column("Company Name", 25.0, 150),
            column("Job Title", 25.0, 150),
            column("Job Location", 20.0, 120),
            column("Date Applied", 15.0, 100),
            column("Job Posting Link", 40.0, 250),
            column("Resume Link", 40.0, 250),
            column("Cover Letter Link", 40.0, 250),
            column(STATUS_COLUMN_NAME, 20.0, 120),
            column("Follow-Up Date", 15.0, 100),
            column("Response Received?", 20.0, 150),
            column("Notes", 40.0, 250),
        ];

        let status_column = columns
            .iter()
            .position(|c| c.name == STATUS_COLUMN_NAME)
            .expect("Schema must contain the status column");

        SheetSpec {
            worksheet_title: "Job Applications",
            columns,
            statuses: Status::iter().collect(),
            status_column,
        }
    }

    pub fn columns(&self) -> &[ColumnDef] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn headers(&self) -> Vec<&'static str> {
        self.columns.iter().map(|c| c.name).collect()
    }

    pub fn statuses(&self) -> &[Status] {
        &self.statuses
    }

    /// Dropdown entries for the status column, in vocabulary order.
    pub fn status_values(&self) -> Vec<String> {
        self.statuses.iter().map(Status::to_string).collect()
    }

    /// 0-based position of the status column.
    pub fn status_column_index(&self) -> usize {
        self.status_column
    }

    /// 1-based status column, for A1 ranges and formulas.
    pub fn status_column(&self) -> Column {
        Column::from_index(self.status_column)
    }

    pub fn last_column(&self) -> Column {
        Column::from_index(self.column_count() - 1)
    }

    /// Formula matching rows whose status equals `status`, anchored to the
    /// status column so the fill applies across the whole row.
    pub fn status_formula(&self, status: Status) -> String {
        format!(r#"=${}2="{}""#, self.status_column(), status)
    }
}
