use std::io::{self, BufRead, Write};

use error_stack::{report, ResultExt};
use thiserror::Error;

use crate::config::app_config::CONFIG;
use crate::excel::renderer::ExcelRenderer;
use crate::renderer::Renderer;
use crate::sheets::renderer::GoogleSheetsRenderer;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("Failed to read from stdin")]
    Io,
    #[error("Invalid choice: {0}. Please enter 1 or 2.")]
    InvalidChoice(String),
    #[error("Google Sheets creation requires a service account credentials file")]
    MissingCredentials,
}

/// What the user picked, before any backend is constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuSelection {
    Excel {
        output_file: String,
    },
    GoogleSheets {
        credentials_file: String,
        sheet_name: String,
    },
}

impl MenuSelection {
    pub fn into_renderer(self) -> Box<dyn Renderer> {
        match self {
            MenuSelection::Excel { output_file } => Box::new(ExcelRenderer::new(output_file)),
            MenuSelection::GoogleSheets {
                credentials_file,
                sheet_name,
            } => Box::new(GoogleSheetsRenderer::new(credentials_file, sheet_name)),
        }
    }
}

/// Interactive menu: pick the backend and collect its inputs. Empty answers
/// take the (config-seeded) defaults.
pub fn choose_renderer() -> error_stack::Result<Box<dyn Renderer>, MenuError> {
    let stdin = io::stdin();
    let selection = read_selection(&mut stdin.lock())?;
    Ok(selection.into_renderer())
}

fn read_selection(input: &mut impl BufRead) -> error_stack::Result<MenuSelection, MenuError> {
    println!("Job Tracker Spreadsheet Creator");
    println!("1. Create Excel file (.xlsx)");
    println!("2. Create Google Sheets (requires service account credentials)");

    let choice = prompt(input, "Enter your choice (1 or 2): ").change_context(MenuError::Io)?;
    match choice.as_str() {
        "1" => {
            let default = CONFIG.excel.output_file.clone();
            let output_file = prompt_with_default(
                input,
                &format!("Enter output filename (default: {default}): "),
                &default,
            )
            .change_context(MenuError::Io)?;
            Ok(MenuSelection::Excel { output_file })
        }
        "2" => {
            let credentials_default = CONFIG.sheets.credentials_file.as_deref().unwrap_or("");
            let label = if credentials_default.is_empty() {
                "Enter path to your Google service account credentials JSON file: ".to_owned()
            } else {
                format!(
                    "Enter path to your Google service account credentials JSON file (default: {credentials_default}): "
                )
            };
            let credentials_file = prompt_with_default(input, &label, credentials_default)
                .change_context(MenuError::Io)?;
            if credentials_file.is_empty() {
                return Err(report!(MenuError::MissingCredentials));
            }

            let name_default = CONFIG.sheets.sheet_name.clone();
            let sheet_name = prompt_with_default(
                input,
                &format!("Enter name for your Google Sheet (default: {name_default}): "),
                &name_default,
            )
            .change_context(MenuError::Io)?;

            Ok(MenuSelection::GoogleSheets {
                credentials_file,
                sheet_name,
            })
        }
        other => Err(report!(MenuError::InvalidChoice(other.to_owned()))),
    }
}

fn prompt(input: &mut impl BufRead, label: &str) -> io::Result<String> {
    print!("{label}");
    io::stdout().flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim().to_owned())
}

fn prompt_with_default(input: &mut impl BufRead, label: &str, default: &str) -> io::Result<String> {
    let answer = prompt(input, label)?;
    Ok(if answer.is_empty() {
        default.to_owned()
    } else {
        answer
    })
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;

    fn select(input: &str) -> error_stack::Result<MenuSelection, MenuError> {
        read_selection(&mut Cursor::new(input))
    }

    #[test]
    fn test_excel_with_explicit_filename() {
        let selection = select("1\ncustom.xlsx\n").unwrap();
        assert_eq!(
            selection,
            MenuSelection::Excel {
                output_file: "custom.xlsx".to_owned()
            }
        );
    }

    #[test]
    fn test_excel_empty_input_takes_default() {
        let selection = select("1\n\n").unwrap();
        assert_eq!(
            selection,
            MenuSelection::Excel {
                output_file: "Job_Tracker.xlsx".to_owned()
            }
        );
    }

    #[test]
    fn test_google_sheets_with_credentials_and_default_name() {
        let selection = select("2\ncreds.json\n\n").unwrap();
        assert_eq!(
            selection,
            MenuSelection::GoogleSheets {
                credentials_file: "creds.json".to_owned(),
                sheet_name: "Job Tracker".to_owned()
            }
        );
    }

    #[test]
    fn test_google_sheets_without_credentials_is_rejected() {
        let result = select("2\n\n\n");
        assert!(matches!(
            result.unwrap_err().current_context(),
            MenuError::MissingCredentials
        ));
    }

    #[test]
    fn test_unknown_choice_is_rejected() {
        let result = select("3\n");
        assert!(matches!(
            result.unwrap_err().current_context(),
            MenuError::InvalidChoice(choice) if choice == "3"
        ));
    }

    #[test]
    fn test_whitespace_around_choice_is_trimmed() {
        let selection = select(" 1 \nout.xlsx\n").unwrap();
        assert_eq!(
            selection,
            MenuSelection::Excel {
                output_file: "out.xlsx".to_owned()
            }
        );
    }

    #[test]
    fn test_selection_maps_to_renderer() {
        let excel = MenuSelection::Excel {
            output_file: "a.xlsx".to_owned(),
        };
        assert_eq!(excel.into_renderer().name(), "Excel");

        let sheets = MenuSelection::GoogleSheets {
            credentials_file: "creds.json".to_owned(),
            sheet_name: "Job Tracker".to_owned(),
        };
        assert_eq!(sheets.into_renderer().name(), "Google Sheets");
    }
}
