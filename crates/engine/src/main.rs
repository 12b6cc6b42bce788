//! Dice simulator - interactive entry point.

use std::io;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dicesim_engine::cli::Console;
use dicesim_engine::infrastructure::app_settings::AppSettings;
use dicesim_engine::App;

fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Logs go to stderr so they never interleave with the report.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dicesim_engine=warn,dicesim_domain=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let settings = AppSettings::from_env();
    tracing::info!(?settings, "Starting dice simulator");

    let app = App::new(settings);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout());
    console.run(&app)?;

    Ok(())
}

/// Load `.env.local` then `.env` from the working directory, if present.
fn load_dotenv() {
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
