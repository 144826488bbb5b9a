use std::path::Path;

use anyhow::Result;
use monthcal::storage::config::{Config, ConfigError};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_cli_mode, CliMode, USAGE};
mod tui;
use tui::run_tui;

#[derive(Debug)]
enum ConfigLoad {
    Existing,
    Created,
    Failed(ConfigError),
}

fn main() -> Result<()> {
    let options = match parse_cli_mode() {
        Ok(CliMode::Run(options)) => options,
        Ok(CliMode::Help) => {
            println!("{}", USAGE);
            return Ok(());
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            println!("{}", USAGE);
            return Ok(());
        }
    };

    let config_path = Config::config_path();
    let (config, load) = load_config(&config_path);

    setup_logging(&config);
    log_config_load(&config_path, &load);

    run_tui(options, config)
}

fn load_config(path: &Path) -> (Config, ConfigLoad) {
    let first_run = !path.exists();
    match Config::load_or_create_at(path) {
        Ok(config) if first_run => (config, ConfigLoad::Created),
        Ok(config) => (config, ConfigLoad::Existing),
        Err(err) => (Config::default(), ConfigLoad::Failed(err)),
    }
}

fn log_config_load(path: &Path, load: &ConfigLoad) {
    match load {
        ConfigLoad::Existing => tracing::debug!("Loaded config from {}", path.display()),
        ConfigLoad::Created => tracing::info!("Wrote default config to {}", path.display()),
        ConfigLoad::Failed(err) => tracing::warn!("Using default config: {}", err),
    }
}

fn setup_logging(config: &Config) {
    let log_dir = config.log_dir();
    std::fs::create_dir_all(&log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(log_dir, "monthcal.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.logging.level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking)
        .with_ansi(false)
        .with_target(false)
        .init();

    std::mem::forget(_guard);

    tracing::info!("monthcal started");
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn first_load_reports_created_then_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let (_, load) = load_config(&path);
        assert!(matches!(load, ConfigLoad::Created));
        assert!(path.exists());

        let (_, load) = load_config(&path);
        assert!(matches!(load, ConfigLoad::Existing));
    }

    #[test]
    fn broken_config_falls_back_to_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntheme = ").unwrap();

        let (config, load) = load_config(&path);

        assert_eq!(config, Config::default());
        assert!(matches!(load, ConfigLoad::Failed(ConfigError::ParseError(_))));
    }
}
