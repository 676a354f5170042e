mod config;

pub use config::{CalendarConfig, Config, SuggestionsConfig, WeekStart};

use std::path::PathBuf;

/// Environment variable that points at an explicit config file.
pub const CONFIG_PATH_ENV: &str = "CYCLECARE_CONFIG";

/// Returns `~/.config/cyclecare[-dev]/` based on CYCLECARE_ENV.
///
/// Set CYCLECARE_ENV=dev to use development data directory.
///
/// # Errors
/// Returns an error if creating the config directory fails.
pub fn data_dir() -> std::io::Result<PathBuf> {
    let base_dir = dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".config");

    let env = std::env::var("CYCLECARE_ENV").unwrap_or_else(|_| "production".to_string());

    let dir = if env == "dev" {
        base_dir.join("cyclecare-dev")
    } else {
        base_dir.join("cyclecare")
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
