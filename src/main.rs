mod cli;
mod config;
mod excel;
mod renderer;
mod schema;
mod sheets;

use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::schema::SheetSpec;

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("job_tracker=info")),
        )
        .init();

    let renderer = match cli::menu::choose_renderer() {
        Ok(renderer) => renderer,
        Err(report) => {
            eprintln!("{report}");
            return ExitCode::FAILURE;
        }
    };

    let spec = SheetSpec::job_tracker();
    match renderer.render(&spec).await {
        Ok(outcome) => {
            tracing::info!("✅ {}: OK", renderer.name());
            println!("{outcome}");
            ExitCode::SUCCESS
        }
        Err(report) => {
            tracing::error!("❌ {}: {:?}", renderer.name(), report);
            ExitCode::FAILURE
        }
    }
}
