use std::path::PathBuf;
use chrono::Utc;
use log::{info, debug};
use env_logger::{Builder, Target};

use crate::error::Result;

/// Directory that receives the log files, `~/.seqtools/logs` or `./.seqtools/logs` without a home.
pub fn log_directory() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".seqtools")
        .join("logs")
}

/// Install a file-backed logger and return the path of the file it writes to.
///
/// The library itself only emits records through `log`; applications that want them on disk
/// call this once at startup. Fails if another logger has already been installed.
pub fn init_logging() -> Result<PathBuf> {
    let log_dir = log_directory();
    std::fs::create_dir_all(&log_dir)?;

    let log_file = log_dir.join(format!("seqtools_{}.log", Utc::now().format("%Y%m%d_%H%M%S")));

    Builder::from_default_env()
        .target(Target::Pipe(Box::new(std::fs::File::create(&log_file)?)))
        .format(|buf, record| {
            use std::io::Write;
            writeln!(buf,
                "{} [{}] [{}:{}] [{}] {}",
                Utc::now().format("%Y-%m-%d %H:%M:%S%.3f UTC"),
                record.level(),
                record.module_path().unwrap_or("unknown"),
                record.line().unwrap_or(0),
                std::thread::current().name().unwrap_or("main"),
                record.args()
            )
        })
        .try_init()?;

    info!("Logging system initialized");
    info!("Log file: {log_file:?}");
    debug!("Log directory: {log_dir:?}");

    Ok(log_file)
}

/// Map a `SEQTOOLS_LOG_LEVEL` value onto a filter level, `None` when unrecognized.
fn parse_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Set logging level based on `SEQTOOLS_LOG_LEVEL` or default to info.
///
/// Must run before [`init_logging`], which reads `RUST_LOG`.
pub fn set_log_level() {
    let level = std::env::var("SEQTOOLS_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

    let env_filter = parse_level(&level).unwrap_or_else(|| {
        eprintln!("Invalid log level '{level}', defaulting to 'info'");
        "info"
    });

    std::env::set_var("RUST_LOG", format!("seqtools={env_filter}"));
}

/// Log build and host information, useful as the first lines of a log file.
pub fn log_system_info() {
    info!("seqtools version: {}", env!("CARGO_PKG_VERSION"));
    info!("Build target: {}", std::env::consts::ARCH);
    info!("Operating system: {}", std::env::consts::OS);
    info!("Available CPU cores: {}", num_cpus::get());

    debug!("Environment variables:");
    for (key, value) in std::env::vars() {
        if key.starts_with("SEQTOOLS_") || key == "RUST_LOG" {
            debug!("  {key}: {value}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("DEBUG"), Some("debug"));
        assert_eq!(parse_level("warn"), Some("warn"));
        assert_eq!(parse_level("loud"), None);
    }

    // only test that touches the process environment
    #[test]
    fn test_logging_initialization() {
        let temp_dir = tempdir().unwrap();
        std::env::set_var("HOME", temp_dir.path());
        std::env::set_var("SEQTOOLS_LOG_LEVEL", "DEBUG");

        set_log_level();
        assert_eq!(std::env::var("RUST_LOG").unwrap(), "seqtools=debug");

        let log_file = init_logging().unwrap();
        assert!(log_file.exists());
        assert!(log_file.starts_with(temp_dir.path()));

        log_system_info();
        // a second logger cannot be installed in the same process
        assert!(init_logging().is_err());
    }
}
