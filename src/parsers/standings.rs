// src/parsers/standings.rs

use std::cmp::Ordering;

use crate::data::Standing;
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::standings::{FIELDS, transmute};

use super::{fetch_records, non_blank};

/// Standings filtered by tournament page and/or team, ordered by place.
pub fn get_standings(
    site: &impl Site,
    overview_page: Option<&str>,
    team: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<Standing>> {
    let w = Where::new()
        .eq_opt("Standings.OverviewPage", overview_page)?
        .eq_opt("Standings.Team", team)?;
    let q = CargoQuery::new("Standings")
        .fields(FIELDS)
        .filter(w)
        .order_by("Standings.Place")
        .limit(limit)?;
    fetch_records(site, &q, transmute)
}

pub fn get_tournament_standings(
    site: &impl Site,
    overview_page: &str,
    limit: Option<u32>,
) -> Result<Vec<Standing>> {
    get_standings(site, Some(non_blank("overview page", overview_page)?), None, limit)
}

/// Every standing line a team has, across tournaments.
pub fn get_team_standings(site: &impl Site, team: &str, limit: Option<u32>) -> Result<Vec<Standing>> {
    get_standings(site, None, Some(non_blank("team", team)?), limit)
}

pub fn get_standings_by_overview_page(
    site: &impl Site,
    overview_page: &str,
    limit: Option<u32>,
) -> Result<Vec<Standing>> {
    get_tournament_standings(site, overview_page, limit)
}

/// Best `n` teams of a tournament by series win rate. Teams without a rate
/// go last; equal rates keep table order.
pub fn get_top_standings(site: &impl Site, overview_page: &str, n: usize) -> Result<Vec<Standing>> {
    if n == 0 {
        return Err(Error::invalid("top standings: n must be at least 1"));
    }
    let mut all = get_tournament_standings(site, overview_page, None)?;
    all.sort_by(|a, b| match (a.series_win_rate(), b.series_win_rate()) {
        (Some(x), Some(y)) => y.partial_cmp(&x).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
    all.truncate(n);
    Ok(all)
}
