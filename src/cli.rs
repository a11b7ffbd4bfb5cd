use clap::Parser;
use std::path::PathBuf;

use crate::config::{Config, ConfigError};

#[derive(Debug, Parser)]
#[command(name = "shoplist", version, about = "Keep a shopping list in your terminal")]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Override the log level (trace, debug, info, warn, error, off)
    #[arg(long, value_name = "LEVEL")]
    pub log_level: Option<String>,

    /// Disable the log file
    #[arg(long)]
    pub no_log: bool,

    /// Leave the mouse to the terminal (rows and buttons ignore clicks)
    #[arg(long)]
    pub no_mouse: bool,

    /// Override the redraw interval in milliseconds
    #[arg(long, value_name = "MS")]
    pub tick_rate: Option<u64>,
}

impl Cli {
    /// Loads the config file named on the command line (or the default one)
    /// and layers the flags on top. Validation runs after the overrides.
    pub fn resolve_config(&self) -> Result<Config, ConfigError> {
        let mut config = match &self.config {
            Some(path) => Config::read_from(path)?,
            None => {
                let path = Config::config_path();
                if path.exists() {
                    Config::read_from(&path)?
                } else {
                    Config::default()
                }
            }
        };
        self.apply(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub fn apply(&self, config: &mut Config) {
        if let Some(level) = &self.log_level {
            config.logging.level = level.clone();
        }
        if self.no_log {
            config.logging.enabled = false;
        }
        if self.no_mouse {
            config.ui.mouse = false;
        }
        if let Some(tick_rate) = self.tick_rate {
            config.ui.tick_rate_ms = tick_rate;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config() {
        let cli = Cli::parse_from([
            "shoplist",
            "--log-level",
            "debug",
            "--no-log",
            "--no-mouse",
            "--tick-rate",
            "100",
        ]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config.logging.level, "debug");
        assert!(!config.logging.enabled);
        assert!(!config.ui.mouse);
        assert_eq!(config.ui.tick_rate_ms, 100);
    }

    #[test]
    fn no_flags_keep_config() {
        let cli = Cli::parse_from(["shoplist"]);
        let mut config = Config::default();
        cli.apply(&mut config);
        assert_eq!(config, Config::default());
    }
}
