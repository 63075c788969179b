// src/lib.rs
//! Typed access to the Leaguepedia Cargo tables.
//!
//! ```no_run
//! use leaguepedia_parser::{Leaguepedia, get_tournament_standings};
//!
//! let site = Leaguepedia::from_env()?;
//! for s in get_tournament_standings(&site, "LEC 2024 Summer", None)? {
//!     println!("{} {:?}", s.team, s.series_win_rate());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[macro_use]
pub mod macros;
#[macro_use]
pub mod log;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod csv;
pub mod data;
pub mod error;
pub mod file;
pub mod parsers;
pub mod query;
pub mod site;
pub mod specs;

pub use crate::core::net::Leaguepedia;
pub use crate::error::{Error, Result, SiteError};
pub use crate::site::Site;

pub use crate::parsers::champions::*;
pub use crate::parsers::contracts::*;
pub use crate::parsers::games::*;
pub use crate::parsers::items::*;
pub use crate::parsers::players::*;
pub use crate::parsers::roster_changes::*;
pub use crate::parsers::scoreboard::*;
pub use crate::parsers::standings::*;
pub use crate::parsers::teams::*;
pub use crate::parsers::tournament_rosters::*;
