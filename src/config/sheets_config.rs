#[derive(serde::Deserialize, Debug, Clone)]
pub struct SheetsConfig {
    /// Path to the service account JSON key, if the user keeps one around.
    #[serde(default)]
    pub credentials_file: Option<Box<str>>,
    #[serde(default = "default_sheet_name")]
    pub sheet_name: String,
}

impl Default for SheetsConfig {
    fn default() -> Self {
        Self {
            credentials_file: None,
            sheet_name: default_sheet_name(),
        }
    }
}

fn default_sheet_name() -> String {
    "Job Tracker".to_owned()
}
