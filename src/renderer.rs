use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::schema::SheetSpec;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Failed to build or write the workbook")]
    Workbook,
    #[error("Service account credentials missing or rejected")]
    Credentials,
    #[error("Spreadsheet API call failed")]
    Api,
}

/// Where the rendered tracker ended up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutcome {
    File(PathBuf),
    Remote { url: String },
}

impl fmt::Display for RenderOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderOutcome::File(path) => write!(
                f,
                "Excel job tracker created successfully: {}",
                path.display()
            ),
            RenderOutcome::Remote { url } => {
                write!(f, "Google Sheets job tracker created successfully: {url}")
            }
        }
    }
}

/// An output backend. Both renderers consume the spec read-only and report
/// where the tracker landed.
#[async_trait::async_trait]
pub trait Renderer {
    fn name(&self) -> &str;

    async fn render(&self, spec: &SheetSpec) -> error_stack::Result<RenderOutcome, RenderError>;
}
