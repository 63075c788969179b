// src/config/options.rs
use std::path::PathBuf;
use std::time::Duration;

use super::consts::*;

/// Connection settings for [`crate::core::net::Leaguepedia`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteOptions {
    pub api_url: String,
    pub timeout: Duration,
    pub page_limit: u32,
    pub user_agent: String,
}

impl Default for SiteOptions {
    fn default() -> Self {
        Self {
            api_url: s!(API_URL),
            timeout: Duration::from_secs(TIMEOUT_SECS),
            page_limit: PAGE_LIMIT,
            user_agent: s!(USER_AGENT),
        }
    }
}

impl SiteOptions {
    /// Defaults, overridden by `.env` / process environment where set.
    /// Unparseable overrides are ignored with a warning.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut opts = Self::default();
        if let Some(url) = lookup(ENV_API_URL).filter(|u| !u.trim().is_empty()) {
            opts.api_url = url.trim().to_string();
        }
        if let Some(v) = lookup(ENV_TIMEOUT_SECS) {
            match v.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => opts.timeout = Duration::from_secs(secs),
                _ => logw!("ignoring {ENV_TIMEOUT_SECS}={v:?}"),
            }
        }
        if let Some(v) = lookup(ENV_PAGE_LIMIT) {
            match v.trim().parse::<u32>() {
                Ok(n) if (1..=PAGE_LIMIT).contains(&n) => opts.page_limit = n,
                _ => logw!("ignoring {ENV_PAGE_LIMIT}={v:?}"),
            }
        }
        opts
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Tsv,
    Json,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Json => "json",
        }
    }

    /// Field separator; JSON has none.
    pub fn delim(&self) -> Option<char> {
        match self {
            ExportFormat::Csv => Some(','),
            ExportFormat::Tsv => Some('\t'),
            ExportFormat::Json => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    pub include_headers: bool,
    /// `None` → stdout.
    pub out: Option<PathBuf>,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            include_headers: true,
            out: None,
        }
    }
}
