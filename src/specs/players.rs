// src/specs/players.rs
//! `Players` table. Queried under the `P` alias.

use std::collections::BTreeMap;

use crate::core::row::Row;
use crate::data::PlayerInfo;
use crate::error::{Error, Result};

pub const FIELDS: &[&str] = &[
    "P.ID", "P.OverviewPage", "P.Player", "P.Image", "P.Name", "P.NativeName",
    "P.NameFull", "P.Country", "P.Nationality", "P.NationalityPrimary",
    "P.Residency", "P.ResidencyFormer", "P.Age", "P.Birthdate", "P.Deathdate",
    "P.Team", "P.Team2", "P.CurrentTeams", "P.TeamLast", "P.Role", "P.RoleLast",
    "P.Contract", "P.FavChamps", "P.SoloqueueIds",
    "P.Askfm", "P.Bluesky", "P.Discord", "P.Facebook", "P.Instagram", "P.Lolpros",
    "P.Reddit", "P.Snapchat", "P.Stream", "P.Twitter", "P.Threads", "P.LinkedIn",
    "P.Vk", "P.Website", "P.Weibo", "P.Youtube",
    "P.IsRetired", "P.ToWildrift", "P.ToValorant", "P.IsPersonality",
    "P.IsSubstitute", "P.IsTrainee",
];

/// Social columns, kept under their column name when set.
pub const SOCIALS: [&str; 16] = [
    "Askfm", "Bluesky", "Discord", "Facebook", "Instagram", "Lolpros", "Reddit",
    "Snapchat", "Stream", "Twitter", "Threads", "LinkedIn", "Vk", "Website",
    "Weibo", "Youtube",
];

fn socials(row: &Row) -> BTreeMap<String, String> {
    SOCIALS
        .iter()
        .filter_map(|k| row.text(&[k]).map(|v| (s!(*k), v)))
        .collect()
}

pub fn transmute(row: &Row) -> Result<PlayerInfo> {
    let id = row.text(&["ID"]);
    let player = row.text(&["Player"]);
    if id.is_none() && player.is_none() {
        return Err(Error::malformed("player", "neither ID nor Player present"));
    }

    Ok(PlayerInfo {
        id: id.clone().or_else(|| player.clone()).unwrap_or_default(),
        player: player.or(id).unwrap_or_default(),
        overview_page: row.text_or_empty(&["OverviewPage"]),
        image: row.text_or_empty(&["Image"]),
        name: row.text_or_empty(&["Name"]),
        native_name: row.text_or_empty(&["NativeName"]),
        name_full: row.text_or_empty(&["NameFull"]),
        country: row.text_or_empty(&["Country"]),
        nationality: row.list(&["Nationality"], &[',']),
        nationality_primary: row.text_or_empty(&["NationalityPrimary"]),
        residency: row.text_or_empty(&["Residency"]),
        residency_former: row.text_or_empty(&["ResidencyFormer"]),
        reported_age: row.uint(&["Age"]),
        birth_date: row.date(&["Birthdate"]),
        death_date: row.date(&["Deathdate"]),
        team: row.text_or_empty(&["Team"]),
        team2: row.text_or_empty(&["Team2"]),
        current_teams: row.list(&["CurrentTeams"], &[',']),
        team_last: row.text_or_empty(&["TeamLast"]),
        role: row.text_or_empty(&["Role"]),
        role_last: row.list(&["RoleLast"], &[';']),
        contract: row.date(&["Contract"]),
        fav_champs: row.list(&["FavChamps"], &[',']),
        soloqueue_ids: row.text_or_empty(&["SoloqueueIds"]),
        socials: socials(row),
        is_retired: row.flag(&["IsRetired"]),
        to_wildrift: row.flag(&["ToWildrift"]),
        to_valorant: row.flag(&["ToValorant"]),
        is_personality: row.flag(&["IsPersonality"]),
        is_substitute: row.flag(&["IsSubstitute"]),
        is_trainee: row.flag(&["IsTrainee"]),
    })
}
