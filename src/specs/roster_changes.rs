// src/specs/roster_changes.rs

use crate::core::row::Row;
use crate::data::{Direction, RosterChange};
use crate::error::{Error, Result};

use super::required;

pub const FIELDS: &[&str] = &[
    "RosterChanges.Date_Sort",
    "RosterChanges.Player",
    "RosterChanges.Direction",
    "RosterChanges.Team",
    "RosterChanges.Roles",
    "RosterChanges.Role",
    "RosterChanges.Status",
    "RosterChanges.Tournaments",
    "RosterChanges.NewsId",
    "RosterChanges.RosterChangeId",
    "RosterChanges.IsRetirement",
    "RosterChanges.IsSub",
];

pub fn transmute(row: &Row) -> Result<RosterChange> {
    let player = required(row, "roster change", &["Player"])?;
    let raw = row.text_or_empty(&["Direction", "Action"]);
    let direction = Direction::parse(&raw).ok_or_else(|| {
        Error::malformed("roster change", format!("unknown direction {raw:?} for {player}"))
    })?;

    let roles = row.list(&["Roles"], &[';', ',']);
    let role = row.text(&["Role"]).or_else(|| roles.first().cloned()).unwrap_or_default();

    Ok(RosterChange {
        team: row.text_or_empty(&["Team"]),
        date: row.date(&["Date_Sort", "Date"]),
        status: row.text_or_empty(&["Status"]),
        tournaments: row.list(&["Tournaments", "Tournament"], &[';', ',']),
        news_id: row.text_or_empty(&["NewsId"]),
        roster_change_id: row.text_or_empty(&["RosterChangeId"]),
        retirement_flag: row.flag(&["IsRetirement"]),
        is_substitute: row.flag(&["IsSub", "IsSubstitute"]),
        player,
        direction,
        role,
        roles,
    })
}
