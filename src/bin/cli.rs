// src/bin/cli.rs
use std::path::PathBuf;

use color_eyre::eyre::{Result, eyre};
use log::LevelFilter;

use leaguepedia_parser::{
    Leaguepedia, cli,
    config::consts::{DEFAULT_LOG_FILE, ENV_LOG_FILE},
    file::ensure_directory,
    logf,
};

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();

    let log_file = std::env::var(ENV_LOG_FILE)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_FILE));
    if let Some(dir) = log_file.parent().filter(|d| !d.as_os_str().is_empty()) {
        ensure_directory(dir)?;
    }
    let _log = leaguepedia_parser::log::init(&log_file, LevelFilter::Debug).map_err(|e| eyre!("log setup: {e}"))?;

    let params = cli::parse_args(std::env::args().skip(1)).map_err(|e| eyre!("{e}"))?;
    let site = Leaguepedia::from_env()?;
    logf!("{:?} via {}", params.page, site.options().api_url);

    if let Some(path) = cli::run(&params, &site).map_err(|e| eyre!("{e}"))? {
        logf!("wrote {}", path.display());
    }
    Ok(())
}
