use anyhow::Result;
use grade_tracker::{config::Config, error::SessionError, tracker::Tracker};
use std::io;
use tracing::{info, warn};

fn main() -> Result<()> {
    // Load configuration before logging so the level can come from it
    let config_path = Config::config_path();
    let loaded = Config::load_if_exists(&config_path);
    let level = match &loaded {
        Ok(Some(config)) => config.log_level(),
        _ => tracing::Level::WARN,
    };

    // Diagnostics go to stderr; stdout is the interactive console
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(level)
        .init();

    let config = match loaded {
        Ok(Some(config)) => config,
        Ok(None) => {
            info!("No config file found, using defaults");
            Config::default()
        }
        Err(e) => {
            warn!("Failed to load config {:?}: {}, using defaults", config_path, e);
            Config::default()
        }
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut tracker = Tracker::new(stdin.lock(), stdout.lock(), config.display);

    match tracker.run() {
        Ok(()) => Ok(()),
        Err(SessionError::EndOfInput) => {
            info!("Input closed, ending session");
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}
