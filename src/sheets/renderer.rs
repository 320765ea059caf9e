use std::path::PathBuf;

use error_stack::{report, ResultExt};
use google_sheets4::api::{
    BatchUpdateSpreadsheetRequest, Spreadsheet, SpreadsheetProperties, ValueRange,
};
use google_sheets4::Sheets;
use tracing::instrument;

use crate::renderer::{RenderError, RenderOutcome, Renderer};
use crate::schema::SheetSpec;

use super::value_range_factory::ValueRangeFactory;
use super::{auth, http_client, requests};

type SheetsHub = Sheets<
    google_sheets4::hyper_rustls::HttpsConnector<google_sheets4::hyper::client::HttpConnector>,
>;

/// Creates the tracker as a brand-new Google Sheet, authenticated with a
/// service account key.
#[derive(Debug, Clone)]
pub struct GoogleSheetsRenderer {
    credentials_file: PathBuf,
    sheet_name: String,
}

impl GoogleSheetsRenderer {
    pub fn new(credentials_file: impl Into<PathBuf>, sheet_name: impl Into<String>) -> Self {
        Self {
            credentials_file: credentials_file.into(),
            sheet_name: sheet_name.into(),
        }
    }

    async fn hub(&self) -> error_stack::Result<SheetsHub, RenderError> {
        let client = http_client::http_client();
        let auth = auth::auth(&self.credentials_file, client.clone()).await?;
        Ok(Sheets::new(client, auth))
    }
}

#[async_trait::async_trait]
impl Renderer for GoogleSheetsRenderer {
    fn name(&self) -> &str {
        "Google Sheets"
    }

    #[instrument(skip(self, spec), name = "GoogleSheetsRenderer::render")]
    async fn render(&self, spec: &SheetSpec) -> error_stack::Result<RenderOutcome, RenderError> {
        let hub = self.hub().await?;

        tracing::info!("Creating spreadsheet \"{}\"", self.sheet_name);
        let create_request = Spreadsheet {
            properties: Some(SpreadsheetProperties {
                title: Some(self.sheet_name.clone()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let (_, spreadsheet) = hub
            .spreadsheets()
            .create(create_request)
            .doit()
            .await
            .change_context(RenderError::Api)
            .attach_printable("Could not create spreadsheet")?;

        let spreadsheet_id = spreadsheet
            .spreadsheet_id
            .ok_or_else(|| report!(RenderError::Api))
            .attach_printable("Spreadsheet id missing from create response")?;
        let sheet_id = spreadsheet
            .sheets
            .as_ref()
            .and_then(|sheets| sheets.first())
            .and_then(|sheet| sheet.properties.as_ref())
            .and_then(|properties| properties.sheet_id)
            .ok_or_else(|| report!(RenderError::Api))
            .attach_printable("First sheet id missing from create response")?;

        let header_range = format!("A1:{}1", spec.last_column());
        hub.spreadsheets()
            .values_update(
                ValueRange::from_row(&spec.headers()),
                &spreadsheet_id,
                &header_range,
            )
            .value_input_option("USER_ENTERED")
            .doit()
            .await
            .change_context(RenderError::Api)
            .attach_printable_lazy(|| format!("Could not write header row to {header_range}"))?;

        let batch = BatchUpdateSpreadsheetRequest {
            requests: Some(requests::build_format_requests(spec, sheet_id)),
            ..Default::default()
        };
        hub.spreadsheets()
            .batch_update(batch, &spreadsheet_id)
            .doit()
            .await
            .change_context(RenderError::Api)
            .attach_printable("Could not apply formatting to the new spreadsheet")?;

        let url = spreadsheet.spreadsheet_url.unwrap_or_else(|| {
            format!("https://docs.google.com/spreadsheets/d/{spreadsheet_id}")
        });
        tracing::info!("Spreadsheet ready at {}", url);
        Ok(RenderOutcome::Remote { url })
    }
}
