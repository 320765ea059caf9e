pub mod app_config;
pub mod excel_config;
pub mod sheets_config;
