// src/specs/mod.rs
//! # Table “specs” module
//!
//! One spec per Cargo table (or join). Each spec encodes *which columns to
//! ask for* and *how to read a returned row* into a typed record.
//!
//! ## What lives here
//! - **Field lists** (`FIELDS`), fully qualified (`Standings.Team`), in the
//!   order they are sent.
//! - **Transmuters**: `transmute(&Row) -> Result<Record>`, pure functions of
//!   one row plus static lookup tables.
//! - **Tolerant extraction**: every column is read through a prioritized
//!   list of candidate keys (see `core::row`) so renamed columns keep working.
//!
//! ## What does **not** live here
//! - **Filtering, ordering, limits**: `parsers::*` decide what to ask for.
//! - **Network**: specs never see a `Site`.
//!
//! ## Conventions & invariants
//! - Optional columns degrade to `""`, `None` or an empty `Vec`.
//! - Only a missing *identity* column (team of a standing, name of a
//!   champion, ...) is an error: `Error::MalformedRecord`. Parsers skip such
//!   rows and keep going.
//!
//! In short: **`specs` knows how to read the tables.** Parsers decide what
//! to fetch and what to keep.

pub mod champions;
pub mod contracts;
pub mod games;
pub mod items;
pub mod players;
pub mod roster_changes;
pub mod scoreboard;
pub mod standings;
pub mod teams;

use crate::core::row::Row;
use crate::error::{Error, Result};

/// First non-blank text among `keys`, or `MalformedRecord`.
pub(crate) fn required(row: &Row, kind: &'static str, keys: &[&str]) -> Result<String> {
    row.text(keys)
        .ok_or_else(|| Error::malformed(kind, format!("missing {}", keys.join("/"))))
}
