// src/parsers/roster_changes.rs

use chrono::{Days, NaiveDate};

use crate::data::{Direction, RosterChange};
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::roster_changes::{FIELDS, transmute};

use super::{fetch_records, non_blank, today};

/// What [`get_roster_changes`] asks for. Every set field narrows the
/// result; date bounds are inclusive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RosterChangeFilter<'a> {
    pub team: Option<&'a str>,
    pub player: Option<&'a str>,
    pub direction: Option<Direction>,
    /// Substring of the `Tournaments` list.
    pub tournament: Option<&'a str>,
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
    pub limit: Option<u32>,
}

/// Newest first.
pub fn get_roster_changes(site: &impl Site, filter: &RosterChangeFilter) -> Result<Vec<RosterChange>> {
    if let (Some(from), Some(to)) = (filter.from, filter.to) {
        if from > to {
            return Err(Error::invalid(format!("date window starts after it ends ({from} > {to})")));
        }
    }

    let mut w = Where::new()
        .eq_opt("RosterChanges.Team", filter.team)?
        .eq_opt("RosterChanges.Player", filter.player)?
        .eq_opt("RosterChanges.Direction", filter.direction.as_ref().map(Direction::as_str))?;
    if let Some(t) = filter.tournament {
        w = w.like("RosterChanges.Tournaments", t)?;
    }
    if let Some(d) = filter.from {
        w = w.ge_date("RosterChanges.Date_Sort", d);
    }
    if let Some(d) = filter.to {
        w = w.le_date("RosterChanges.Date_Sort", d);
    }

    let q = CargoQuery::new("RosterChanges")
        .fields(FIELDS)
        .filter(w)
        .order_by("RosterChanges.Date_Sort DESC")
        .limit(filter.limit)?;
    let mut changes = fetch_records(site, &q, transmute)?;

    // The server compares text; check the window again on parsed dates.
    if filter.from.is_some() || filter.to.is_some() {
        let from = filter.from.unwrap_or(NaiveDate::MIN);
        let to = filter.to.unwrap_or(NaiveDate::MAX);
        changes.retain(|c| c.is_between(from, to));
    }
    Ok(changes)
}

pub fn get_team_roster_changes(
    site: &impl Site,
    team: &str,
    tournament: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<RosterChange>> {
    let team = non_blank("team", team)?;
    get_roster_changes(site, &RosterChangeFilter { team: Some(team), tournament, limit, ..Default::default() })
}

pub fn get_player_roster_changes(site: &impl Site, player: &str, limit: Option<u32>) -> Result<Vec<RosterChange>> {
    let player = non_blank("player", player)?;
    get_roster_changes(site, &RosterChangeFilter { player: Some(player), limit, ..Default::default() })
}

/// Changes dated within the last `days` days, today included.
pub fn get_recent_roster_changes(
    site: &impl Site,
    days: u32,
    team: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<RosterChange>> {
    get_recent_roster_changes_at(site, days, team, limit, today())
}

pub fn get_recent_roster_changes_at(
    site: &impl Site,
    days: u32,
    team: Option<&str>,
    limit: Option<u32>,
    today: NaiveDate,
) -> Result<Vec<RosterChange>> {
    let from = today
        .checked_sub_days(Days::new(u64::from(days)))
        .ok_or_else(|| Error::invalid(format!("look-back of {days} days is out of range")))?;
    get_roster_changes(
        site,
        &RosterChangeFilter { team, from: Some(from), to: Some(today), limit, ..Default::default() },
    )
}

pub fn get_roster_additions(
    site: &impl Site,
    team: Option<&str>,
    tournament: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<RosterChange>> {
    get_roster_changes(
        site,
        &RosterChangeFilter { team, tournament, direction: Some(Direction::Join), limit, ..Default::default() },
    )
}

pub fn get_roster_removals(
    site: &impl Site,
    team: Option<&str>,
    tournament: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<RosterChange>> {
    get_roster_changes(
        site,
        &RosterChangeFilter { team, tournament, direction: Some(Direction::Leave), limit, ..Default::default() },
    )
}

/// Changes flagged `IsRetirement`, newest first.
pub fn get_retirements(site: &impl Site, limit: Option<u32>) -> Result<Vec<RosterChange>> {
    let q = CargoQuery::new("RosterChanges")
        .fields(FIELDS)
        .filter(Where::new().raw("RosterChanges.IsRetirement='Yes'"))
        .order_by("RosterChanges.Date_Sort DESC")
        .limit(limit)?;
    let mut changes = fetch_records(site, &q, transmute)?;
    changes.retain(RosterChange::is_retirement);
    Ok(changes)
}
