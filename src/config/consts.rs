// src/config/consts.rs

// Remote
pub const API_URL: &str = "https://lol.fandom.com/api.php";
pub const FILE_PATH_URL: &str = "https://lol.fandom.com/wiki/Special:FilePath/";
pub const USER_AGENT: &str = concat!("leaguepedia_parser/", env!("CARGO_PKG_VERSION"));
pub const TIMEOUT_SECS: u64 = 30;

// Cargo answers at most this many rows per request; larger reads page by offset
pub const PAGE_LIMIT: u32 = 500;

// Env overrides (read by `SiteOptions::from_env`)
pub const ENV_API_URL: &str = "LEAGUEPEDIA_API_URL";
pub const ENV_TIMEOUT_SECS: &str = "LEAGUEPEDIA_TIMEOUT_SECS";
pub const ENV_PAGE_LIMIT: &str = "LEAGUEPEDIA_PAGE_LIMIT";
pub const ENV_LOG_FILE: &str = "LEAGUEPEDIA_LOG";

// Logging
pub const DEFAULT_LOG_FILE: &str = ".store/leaguepedia.log";

// Domain
pub const VALID_ROLES: [&str; 5] = ["Top", "Jungle", "Mid", "Bot", "Support"];
pub const MELEE_RANGE_MAX: f64 = 200.0;
pub const MAX_LINEAGE_DEPTH: usize = 16;
pub const DEFAULT_MATCH_HISTORY: u32 = 20;
pub const DEFAULT_MVP_MIN_GAMES: usize = 5;
