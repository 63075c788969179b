// src/parsers/tournament_rosters.rs

use crate::data::TournamentRosterEntry;
use crate::error::Result;
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::teams::{ROSTER_FIELDS, transmute_roster};

use super::{collect, fetch, non_blank};

/// One entry per registered player of `team`, optionally for a single
/// tournament. `limit` counts roster rows (one per tournament), not players.
pub fn get_tournament_rosters(
    site: &impl Site,
    team: &str,
    tournament: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<TournamentRosterEntry>> {
    let team = non_blank("team", team)?;
    let w = Where::new()
        .eq("TournamentRosters.Team", team)?
        .eq_opt("TournamentRosters.Tournament", tournament)?;
    let q = CargoQuery::new("TournamentRosters")
        .fields(ROSTER_FIELDS)
        .filter(w)
        .order_by("TournamentRosters.Tournament")
        .limit(limit)?;
    let rows = fetch(site, &q)?;
    Ok(collect(&rows, transmute_roster).into_iter().flatten().collect())
}
