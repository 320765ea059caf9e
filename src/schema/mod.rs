pub mod column;
pub mod sheet_spec;
pub mod status;

pub use column::Column;
pub use sheet_spec::SheetSpec;
pub use status::Status;
