// src/specs/teams.rs
//! `Teams`, `Tenures` (joined with `RosterChanges`) and `TournamentRosters`.

use crate::core::row::Row;
use crate::core::sanitize::{clean_player_name, normalize_ws, primary_role};
use crate::data::{Team, TeamPlayer, TournamentRosterEntry};
use crate::error::{Error, Result};

use super::required;

pub const TEAM_FIELDS: &[&str] = &[
    "Teams.Name",
    "Teams.Short",
    "Teams.Region",
    "Teams.Image",
    "Teams.RenamedTo",
    "Teams.IsDisbanded",
];

pub const TENURE_FIELDS: &[&str] = &["T.Player", "T.Team", "T.DateJoin", "RC.Roles"];

pub const ROSTER_FIELDS: &[&str] = &[
    "TournamentRosters.Team",
    "TournamentRosters.Tournament",
    "TournamentRosters.OverviewPage",
    "TournamentRosters.RosterLinks",
    "TournamentRosters.Roles",
];

/// `RosterLinks` and `Roles` are parallel lists separated by `;;`.
const ROSTER_DELIM: &str = ";;";

pub fn transmute_team(row: &Row) -> Result<Team> {
    Ok(Team {
        name: required(row, "team", &["Name"])?,
        short: row.text_or_empty(&["Short"]),
        region: row.text_or_empty(&["Region"]),
        image: row.text_or_empty(&["Image"]),
        renamed_to: row.text_or_empty(&["RenamedTo"]),
        is_disbanded: row.flag(&["IsDisbanded"]).unwrap_or(false),
    })
}

/// `Ok(None)` for staff and players without an in-game role.
pub fn transmute_tenure(row: &Row) -> Result<Option<TeamPlayer>> {
    let player = required(row, "tenure", &["Player"])?;
    Ok(primary_role(&row.text_or_empty(&["Roles"])).map(|role| TeamPlayer {
        name: clean_player_name(&player),
        role: s!(role),
    }))
}

/// One row holds the whole roster; it expands into one entry per player.
/// A missing role stays `""` so the slot is not lost.
pub fn transmute_roster(row: &Row) -> Result<Vec<TournamentRosterEntry>> {
    let team = required(row, "roster entry", &["Team"])?;
    let tournament = row.text_or_empty(&["Tournament"]);
    let overview_page = row.text_or_empty(&["OverviewPage"]);

    let players = slots(&row.text_or_empty(&["RosterLinks"]));
    let roles = slots(&row.text_or_empty(&["Roles"]));

    let entries: Vec<TournamentRosterEntry> = players
        .into_iter()
        .enumerate()
        .filter(|(_, player)| !player.is_empty())
        .map(|(i, player)| TournamentRosterEntry {
            team: team.clone(),
            tournament: tournament.clone(),
            overview_page: overview_page.clone(),
            player: clean_player_name(&player),
            role: roles.get(i).cloned().unwrap_or_default(),
        })
        .collect();

    if entries.is_empty() {
        return Err(Error::malformed("roster entry", format!("no players listed for {team}")));
    }
    Ok(entries)
}

// Positional: blank slots are kept so both lists stay aligned.
fn slots(s: &str) -> Vec<String> {
    s.split(ROSTER_DELIM).map(normalize_ws).collect()
}
