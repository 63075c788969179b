// src/parsers/mod.rs
//! Public read operations, one module per entity.
//!
//! Every operation follows the same three steps: build a [`CargoQuery`]
//! from validated, escaped caller input; hand it to a [`Site`]; transmute
//! the rows with the matching `specs::*` function. Rows that fail to
//! transmute are logged and skipped. Site failures come back as
//! [`Error::QueryFailed`] naming the table that was asked.

pub mod champions;
pub mod contracts;
pub mod games;
pub mod items;
pub mod players;
pub mod roster_changes;
pub mod scoreboard;
pub mod standings;
pub mod teams;
pub mod tournament_rosters;

use std::time::Instant;

use chrono::{NaiveDate, Utc};

use crate::core::row::Row;
use crate::error::{Error, Result};
use crate::query::CargoQuery;
use crate::site::Site;

/// Run `q`, timing it; site failures become `QueryFailed`.
pub(crate) fn fetch(site: &impl Site, q: &CargoQuery) -> Result<Vec<Row>> {
    let started = Instant::now();
    let table = q.table_name();
    match site.query(q) {
        Ok(rows) => {
            logd!("{table}: {} row(s) in {:.2?}", rows.len(), started.elapsed());
            Ok(rows)
        }
        Err(source) => {
            loge!("{table}: query failed after {:.2?}: {source}", started.elapsed());
            Err(Error::QueryFailed { table: s!(table), source })
        }
    }
}

/// Transmute every row, skipping (and logging) the ones that don't fit.
pub(crate) fn collect<T>(
    rows: &[Row],
    transmute: impl Fn(&Row) -> Result<T>,
) -> Vec<T> {
    rows.iter()
        .filter_map(|row| match transmute(row) {
            Ok(v) => Some(v),
            Err(e) => {
                logw!("skipping row: {e}");
                None
            }
        })
        .collect()
}

/// `fetch` then `collect`.
pub(crate) fn fetch_records<T>(
    site: &impl Site,
    q: &CargoQuery,
    transmute: impl Fn(&Row) -> Result<T>,
) -> Result<Vec<T>> {
    Ok(collect(&fetch(site, q)?, transmute))
}

/// Client-side cap, for results filtered or ranked after the fetch.
pub(crate) fn truncate<T>(mut items: Vec<T>, limit: Option<u32>) -> Vec<T> {
    if let Some(n) = limit {
        items.truncate(n as usize);
    }
    items
}

/// Blank names never reach the query.
pub(crate) fn non_blank<'a>(what: &str, value: &'a str) -> Result<&'a str> {
    let v = value.trim();
    if v.is_empty() {
        Err(Error::invalid(format!("{what} must not be empty")))
    } else {
        Ok(v)
    }
}

pub(crate) fn today() -> NaiveDate {
    Utc::now().date_naive()
}
