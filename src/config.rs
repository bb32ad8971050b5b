//! Logging configuration.
//!
//! Reads `.env` and the environment, then sets up log4rs. Logs always go to
//! stderr; stdout carries the report only.

use log::LevelFilter;
use log4rs::append::console::{ConsoleAppender, Target};
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use std::env;
use std::error::Error;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming a log4rs YAML file.
pub const ENV_LOG_FILE: &str = "INCIDR_LOG4RS";
/// Environment variable holding the base log level.
pub const ENV_LOG_LEVEL: &str = "INCIDR_LOG";

const DEFAULT_LOG_FILE: &str = "log4rs.yml";
const DEFAULT_LEVEL: LevelFilter = LevelFilter::Warn;
const PATTERN: &str = "{d(%H:%M:%S)} {h({l})} {t} - {m}{n}";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    /// log4rs YAML file, used instead of the built-in setup when it exists.
    pub file: PathBuf,
    pub level: LevelFilter,
}

impl LogConfig {
    /// Build from `.env`/environment, raised by the `-v` count.
    pub fn from_env(verbose: u8) -> LogConfig {
        dotenv::dotenv().ok();
        LogConfig::from_values(
            env::var(ENV_LOG_FILE).ok().as_deref(),
            env::var(ENV_LOG_LEVEL).ok().as_deref(),
            verbose,
        )
    }

    pub fn from_values(file: Option<&str>, level: Option<&str>, verbose: u8) -> LogConfig {
        let base = match level.map(LevelFilter::from_str) {
            Some(Ok(level)) => level,
            _ => DEFAULT_LEVEL,
        };
        LogConfig {
            file: PathBuf::from(file.unwrap_or(DEFAULT_LOG_FILE)),
            level: base.max(verbosity(verbose)),
        }
    }
}

fn verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger.
pub fn init_logging(config: &LogConfig) -> Result<(), Box<dyn Error>> {
    if Path::new(&config.file).exists() {
        log4rs::init_file(&config.file, Default::default()).map_err(|e| {
            format!(
                "Error initializing log4rs from {}: {e}",
                config.file.display()
            )
        })?;
        log::debug!("Logging from {}", config.file.display());
        return Ok(());
    }

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new(PATTERN)))
        .build();
    let log_config = Config::builder()
        .appender(Appender::builder().build("stderr", Box::new(stderr)))
        .build(Root::builder().appender("stderr").build(config.level))?;
    log4rs::init_config(log_config)?;
    log::debug!("Logging to stderr at {}", config.level);
    Ok(())
}
