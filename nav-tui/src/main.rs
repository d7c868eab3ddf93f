mod app;
mod config;
mod paths;

use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use simplelog::{Config, LevelFilter, WriteLogger};

use crate::app::App;
use crate::config::NavConfig;

fn main() -> ExitCode {
    paths::rotate_logs();
    let log_path = paths::log_file();
    match File::create(&log_path) {
        Ok(log_file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Debug, Config::default(), log_file) {
                eprintln!("Warning: logging disabled: {}", e);
            }
        }
        Err(e) => eprintln!("Warning: no log file at {}: {}", log_path.display(), e),
    }

    let explicit = std::env::args_os().nth(1).map(PathBuf::from);
    let config = match NavConfig::resolve(explicit) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = App::new(config).run() {
        log::error!("terminal error: {}", e);
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
