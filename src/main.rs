use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use lockstep_math::config::{load_config, DEFAULT_CONFIG_PATH};
use lockstep_math::lut_gen;
use tracing::{error, info};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const LOG_DIR: &str = "logs";
const LOG_PREFIX: &str = "lut_gen";
const LOGS_KEPT: usize = 25;
const DEFAULT_FILTER: &str = "lockstep_math=info,lut_gen=info";

/// Install stdout and per-run file logging. Returns the new log file's path.
fn init_logging(log_dir: &Path) -> io::Result<PathBuf> {
    fs::create_dir_all(log_dir)?;
    prune_logs(log_dir, LOGS_KEPT);

    let file_name = format!(
        "{LOG_PREFIX}_{}.log",
        chrono::Local::now().format("%Y%m%d_%H%M%S")
    );
    let appender = RollingFileAppender::new(Rotation::NEVER, log_dir, &file_name);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(appender).with_ansi(false))
        .with(fmt::layer().with_writer(io::stdout).with_target(false))
        .init();

    Ok(log_dir.join(file_name))
}

fn is_generator_log(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with(LOG_PREFIX) && name.ends_with(".log"))
}

/// Delete the oldest generator logs so at most `keep` remain. Returns how
/// many were removed.
fn prune_logs(log_dir: &Path, keep: usize) -> usize {
    let Ok(entries) = fs::read_dir(log_dir) else {
        return 0;
    };

    let mut logs: Vec<_> = entries
        .filter_map(Result::ok)
        .filter(|entry| is_generator_log(&entry.path()))
        .map(|entry| {
            let modified = entry.metadata().and_then(|m| m.modified()).ok();
            (modified, entry.path())
        })
        .collect();
    if logs.len() <= keep {
        return 0;
    }

    logs.sort();
    let excess = logs.len() - keep;
    logs.iter()
        .take(excess)
        .filter(|(_, path)| fs::remove_file(path).is_ok())
        .count()
}

fn main() -> ExitCode {
    let log_file = match init_logging(Path::new(LOG_DIR)) {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Cannot set up logging in {LOG_DIR}/: {e}");
            return ExitCode::FAILURE;
        }
    };

    println!("╔══════════════════════════════════════════════════════════╗");
    println!("║  lut_gen                                                 ║");
    println!("╠══════════════════════════════════════════════════════════╣");
    println!("║  Log file: {:<45} ║", log_file.display());
    println!("╚══════════════════════════════════════════════════════════╝");

    let config_path = std::env::args()
        .nth(1)
        .map_or_else(|| PathBuf::from(DEFAULT_CONFIG_PATH), PathBuf::from);

    let config = match load_config(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    match lut_gen::run(&config) {
        Ok(written) => {
            info!("lut_gen finished, {} files written", written.len());
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("lut_gen failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
