// src/specs/scoreboard.rs

use crate::core::row::Row;
use crate::data::{ScoreboardPlayer, Side};
use crate::error::{Error, Result};

pub const FIELDS: &[&str] = &[
    "ScoreboardPlayers.OverviewPage",
    "ScoreboardPlayers.Name",
    "ScoreboardPlayers.Link",
    "ScoreboardPlayers.Champion",
    "ScoreboardPlayers.Kills",
    "ScoreboardPlayers.Deaths",
    "ScoreboardPlayers.Assists",
    "ScoreboardPlayers.SummonerSpells",
    "ScoreboardPlayers.Gold",
    "ScoreboardPlayers.CS",
    "ScoreboardPlayers.DamageToChampions",
    "ScoreboardPlayers.VisionScore",
    "ScoreboardPlayers.Items",
    "ScoreboardPlayers.KeystoneRune",
    "ScoreboardPlayers.Runes",
    "ScoreboardPlayers.TeamKills",
    "ScoreboardPlayers.TeamGold",
    "ScoreboardPlayers.Team",
    "ScoreboardPlayers.TeamVs",
    "ScoreboardPlayers.PlayerWin",
    "ScoreboardPlayers.DateTime_UTC",
    "ScoreboardPlayers.Tournament",
    "ScoreboardPlayers.Role",
    "ScoreboardPlayers.Side",
    "ScoreboardPlayers.GameId",
    "ScoreboardPlayers.MatchId",
];

// `1`/`2` in the table, colour names in some exports.
fn side(row: &Row) -> Option<Side> {
    match row.text(&["Side"])?.to_ascii_lowercase().as_str() {
        "1" | "blue" => Some(Side::Blue),
        "2" | "red" => Some(Side::Red),
        _ => None,
    }
}

pub fn transmute(row: &Row) -> Result<ScoreboardPlayer> {
    let link = row.text_or_empty(&["Link"]);
    let name = row.text_or_empty(&["Name"]);
    if link.is_empty() && name.is_empty() {
        return Err(Error::malformed("scoreboard line", "neither Link nor Name present"));
    }

    Ok(ScoreboardPlayer {
        overview_page: row.text_or_empty(&["OverviewPage"]),
        tournament: row.text_or_empty(&["Tournament"]),
        team: row.text_or_empty(&["Team"]),
        team_vs: row.text_or_empty(&["TeamVs"]),
        champion: row.text_or_empty(&["Champion"]),
        role: row.text_or_empty(&["Role"]),
        side: side(row),
        kills: row.uint(&["Kills"]),
        deaths: row.uint(&["Deaths"]),
        assists: row.uint(&["Assists"]),
        gold: row.uint(&["Gold"]),
        cs: row.uint(&["CS"]),
        damage_to_champions: row.uint(&["DamageToChampions"]),
        vision_score: row.uint(&["VisionScore"]),
        team_kills: row.uint(&["TeamKills"]),
        team_gold: row.uint(&["TeamGold"]),
        items: row.list(&["Items"], &[';']),
        summoner_spells: row.list(&["SummonerSpells"], &[',']),
        keystone: row.text_or_empty(&["KeystoneRune"]),
        runes: row.text_or_empty(&["Runes"]),
        player_win: row.flag(&["PlayerWin"]),
        datetime_utc: row.datetime(&["DateTime_UTC"]),
        game_id: row.text_or_empty(&["GameId"]),
        match_id: row.text_or_empty(&["MatchId"]),
        link,
        name,
    })
}
