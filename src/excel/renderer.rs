use std::path::PathBuf;

use error_stack::ResultExt;
use rust_xlsxwriter::{Color, ConditionalFormatFormula, DataValidation, Format, Workbook};
use tracing::instrument;

use crate::renderer::{RenderError, RenderOutcome, Renderer};
use crate::schema::SheetSpec;

/// Last 0-based worksheet row (xlsx sheets hold 1,048,576 rows).
const LAST_ROW: u32 = 1_048_575;

/// Writes the tracker as a styled local `.xlsx` file.
#[derive(Debug, Clone)]
pub struct ExcelRenderer {
    output_path: PathBuf,
}

impl ExcelRenderer {
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            output_path: output_path.into(),
        }
    }
}

#[async_trait::async_trait]
impl Renderer for ExcelRenderer {
    fn name(&self) -> &str {
        "Excel"
    }

    #[instrument(skip(spec), name = "ExcelRenderer::render")]
    async fn render(&self, spec: &SheetSpec) -> error_stack::Result<RenderOutcome, RenderError> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(spec.worksheet_title)
            .change_context(RenderError::Workbook)?;

        let header_format = Format::new().set_bold();
        for (index, column) in spec.columns().iter().enumerate() {
            worksheet
                .write_with_format(0, index as u16, column.name, &header_format)
                .change_context(RenderError::Workbook)?;
            worksheet
                .set_column_width(index as u16, column.excel_width)
                .change_context(RenderError::Workbook)?;
        }

        let values = spec.status_values();
        let dropdown = DataValidation::new()
            .allow_list_strings(&values.iter().map(String::as_str).collect::<Vec<_>>())
            .change_context(RenderError::Workbook)?;
        let status_col = spec.status_column_index() as u16;
        worksheet
            .add_data_validation(1, status_col, LAST_ROW, status_col, &dropdown)
            .change_context(RenderError::Workbook)?;

        // One formula rule per status, spanning every table column so the
        // whole row takes the status fill.
        let last_col = spec.column_count() as u16 - 1;
        for status in spec.statuses() {
            let fill = Format::new().set_background_color(Color::RGB(status.fill().as_u32()));
            let formula = spec.status_formula(*status);
            let rule = ConditionalFormatFormula::new()
                .set_rule(formula.as_str())
                .set_format(fill);
            worksheet
                .add_conditional_format(1, 0, LAST_ROW, last_col, &rule)
                .change_context(RenderError::Workbook)?;
        }

        worksheet
            .set_freeze_panes(1, 0)
            .change_context(RenderError::Workbook)?;

        workbook
            .save(&self.output_path)
            .change_context(RenderError::Workbook)
            .attach_printable_lazy(|| {
                format!("Could not save workbook to {}", self.output_path.display())
            })?;

        tracing::info!("Wrote {}", self.output_path.display());
        Ok(RenderOutcome::File(self.output_path.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_writes_workbook_to_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tracker.xlsx");

        let renderer = ExcelRenderer::new(path.clone());
        let outcome = renderer.render(&SheetSpec::job_tracker()).await.unwrap();

        assert_eq!(outcome, RenderOutcome::File(path.clone()));
        assert!(path.metadata().unwrap().len() > 0);
    }

    #[tokio::test]
    async fn test_render_is_structurally_deterministic() {
        let dir = tempfile::tempdir().unwrap();
        let spec = SheetSpec::job_tracker();

        let first = dir.path().join("first.xlsx");
        let second = dir.path().join("second.xlsx");
        ExcelRenderer::new(first.clone())
            .render(&spec)
            .await
            .unwrap();
        ExcelRenderer::new(second.clone())
            .render(&spec)
            .await
            .unwrap();

        // Same schema in, same amount of workbook out.
        assert_eq!(
            first.metadata().unwrap().len(),
            second.metadata().unwrap().len()
        );
    }

    #[tokio::test]
    async fn test_unwritable_path_is_an_error() {
        let renderer = ExcelRenderer::new("/nonexistent-dir/tracker.xlsx");
        let result = renderer.render(&SheetSpec::job_tracker()).await;
        assert!(result.is_err());
    }
}
