#[derive(serde::Deserialize, Debug, Clone)]
pub struct ExcelConfig {
    #[serde(default = "default_output_file")]
    pub output_file: String,
}

impl Default for ExcelConfig {
    fn default() -> Self {
        Self {
            output_file: default_output_file(),
        }
    }
}

fn default_output_file() -> String {
    "Job_Tracker.xlsx".to_owned()
}
