use std::sync::LazyLock;

use config::Config;

/// Optional `Config.toml` in the working directory. Every field has a
/// default, so the file only needs to exist when the user wants to pre-seed
/// the interactive prompts.
#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub excel: super::excel_config::ExcelConfig,
    #[serde(default)]
    pub sheets: super::sheets_config::SheetsConfig,
}

pub static CONFIG: LazyLock<AppConfig> = LazyLock::new(|| {
    match Config::builder()
        .add_source(config::File::with_name("Config").required(false))
        .build()
    {
        Ok(config) => config,
        Err(e) => {
            panic!("Error reading config file: {:?}", e);
        }
    }
    .try_deserialize()
    .expect("Should deserialize built config into struct")
});
