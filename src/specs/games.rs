// src/specs/games.rs
//! `ScoreboardGames`, `Tournaments` (+ `Leagues`) and `PicksAndBansS7`.

use crate::core::row::Row;
use crate::data::{Game, PickBan, Side, Tournament, Winner};
use crate::error::{Error, Result};

pub const GAME_FIELDS: &[&str] = &[
    "ScoreboardGames.GameId",
    "ScoreboardGames.MatchId",
    "ScoreboardGames.Tournament",
    "ScoreboardGames.OverviewPage",
    "ScoreboardGames.Team1",
    "ScoreboardGames.Team2",
    "ScoreboardGames.Winner",
    "ScoreboardGames.Team1Score",
    "ScoreboardGames.Team2Score",
    "ScoreboardGames.DateTime_UTC",
    "ScoreboardGames.Patch",
    "ScoreboardGames.Gamelength",
    "ScoreboardGames.Gamelength_Number",
    "ScoreboardGames.Team1Kills",
    "ScoreboardGames.Team2Kills",
    "ScoreboardGames.Team1Dragons",
    "ScoreboardGames.Team2Dragons",
    "ScoreboardGames.Team1Barons",
    "ScoreboardGames.Team2Barons",
    "ScoreboardGames.Team1Towers",
    "ScoreboardGames.Team2Towers",
    "ScoreboardGames.Team1Picks",
    "ScoreboardGames.Team2Picks",
    "ScoreboardGames.Team1Bans",
    "ScoreboardGames.Team2Bans",
    "ScoreboardGames.Team1Players",
    "ScoreboardGames.Team2Players",
    "ScoreboardGames.N_GameInMatch",
    "ScoreboardGames.VOD",
];

pub const TOURNAMENT_FIELDS: &[&str] = &[
    "Leagues.League_Short",
    "Tournaments.Name",
    "Tournaments.OverviewPage",
    "Tournaments.League",
    "Tournaments.Region",
    "Tournaments.TournamentLevel",
    "Tournaments.DateStart",
    "Tournaments.Date",
    "Tournaments.Rulebook",
    "Tournaments.IsQualifier",
    "Tournaments.IsPlayoffs",
    "Tournaments.IsOfficial",
];

/// Column names in draft order for pro play (bans 1-3, picks 1-3, bans 4-5, picks 4-5).
pub const PICKS_BANS_FIELDS: [&str; 20] = [
    "Team1Ban1", "Team2Ban1", "Team1Ban2", "Team2Ban2", "Team1Ban3", "Team2Ban3",
    "Team1Pick1", "Team2Pick1", "Team2Pick2", "Team1Pick2", "Team1Pick3", "Team2Pick3",
    "Team2Ban4", "Team1Ban4", "Team2Ban5", "Team1Ban5",
    "Team2Pick4", "Team1Pick4", "Team1Pick5", "Team2Pick5",
];

pub const PICKS_BANS_QUALIFIED: [&str; 20] = [
    "PicksAndBansS7.Team1Ban1", "PicksAndBansS7.Team2Ban1", "PicksAndBansS7.Team1Ban2",
    "PicksAndBansS7.Team2Ban2", "PicksAndBansS7.Team1Ban3", "PicksAndBansS7.Team2Ban3",
    "PicksAndBansS7.Team1Pick1", "PicksAndBansS7.Team2Pick1", "PicksAndBansS7.Team2Pick2",
    "PicksAndBansS7.Team1Pick2", "PicksAndBansS7.Team1Pick3", "PicksAndBansS7.Team2Pick3",
    "PicksAndBansS7.Team2Ban4", "PicksAndBansS7.Team1Ban4", "PicksAndBansS7.Team2Ban5",
    "PicksAndBansS7.Team1Ban5", "PicksAndBansS7.Team2Pick4", "PicksAndBansS7.Team1Pick4",
    "PicksAndBansS7.Team1Pick5", "PicksAndBansS7.Team2Pick5",
];

const LIST: &[char] = &[','];

/// `Winner` is `1`/`2`; older rows sometimes carry the team name instead.
fn winner(row: &Row, team1: &str, team2: &str) -> Option<Winner> {
    let w = row.text(&["Winner", "WinTeam"])?;
    match w.as_str() {
        "1" => Some(Winner::Team1),
        "2" => Some(Winner::Team2),
        t if !team1.is_empty() && t.eq_ignore_ascii_case(team1) => Some(Winner::Team1),
        t if !team2.is_empty() && t.eq_ignore_ascii_case(team2) => Some(Winner::Team2),
        _ => None,
    }
}

pub fn transmute_game(row: &Row) -> Result<Game> {
    let team1 = row.text_or_empty(&["Team1"]);
    let team2 = row.text_or_empty(&["Team2"]);
    if team1.is_empty() && team2.is_empty() {
        return Err(Error::malformed("game", "neither Team1 nor Team2 present"));
    }

    Ok(Game {
        winner: winner(row, &team1, &team2),
        game_id: row.text_or_empty(&["GameId"]),
        match_id: row.text_or_empty(&["MatchId"]),
        tournament: row.text_or_empty(&["Tournament"]),
        overview_page: row.text_or_empty(&["OverviewPage"]),
        team1_score: row.int(&["Team1Score"]),
        team2_score: row.int(&["Team2Score"]),
        date: row.datetime(&["DateTime_UTC", "DateTime UTC", "Date"]),
        patch: row.text_or_empty(&["Patch"]),
        gamelength: row.text_or_empty(&["Gamelength"]),
        gamelength_minutes: row.float(&["Gamelength_Number", "Gamelength Number"]),
        team1_kills: row.int(&["Team1Kills"]),
        team2_kills: row.int(&["Team2Kills"]),
        team1_dragons: row.int(&["Team1Dragons"]),
        team2_dragons: row.int(&["Team2Dragons"]),
        team1_barons: row.int(&["Team1Barons"]),
        team2_barons: row.int(&["Team2Barons"]),
        team1_towers: row.int(&["Team1Towers"]),
        team2_towers: row.int(&["Team2Towers"]),
        team1_picks: row.list(&["Team1Picks"], LIST),
        team2_picks: row.list(&["Team2Picks"], LIST),
        team1_bans: row.list(&["Team1Bans"], LIST),
        team2_bans: row.list(&["Team2Bans"], LIST),
        team1_players: row.list(&["Team1Players"], LIST),
        team2_players: row.list(&["Team2Players"], LIST),
        n_game_in_match: row.int(&["N_GameInMatch"]),
        vod: row.text_or_empty(&["VOD"]),
        team1,
        team2,
    })
}

pub fn transmute_tournament(row: &Row) -> Result<Tournament> {
    let name = row.text(&["Name"]);
    let overview_page = row.text(&["OverviewPage"]);
    if name.is_none() && overview_page.is_none() {
        return Err(Error::malformed("tournament", "neither Name nor OverviewPage present"));
    }

    Ok(Tournament {
        name: name.clone().or_else(|| overview_page.clone()).unwrap_or_default(),
        overview_page: overview_page.or(name).unwrap_or_default(),
        league: row.text_or_empty(&["League"]),
        league_short: row.text_or_empty(&["League_Short", "League Short"]),
        region: row.text_or_empty(&["Region"]),
        level: row.text_or_empty(&["TournamentLevel"]),
        date_start: row.date(&["DateStart"]),
        date_end: row.date(&["Date"]),
        rulebook: row.text_or_empty(&["Rulebook"]),
        is_qualifier: row.flag(&["IsQualifier"]).unwrap_or(false),
        is_playoffs: row.flag(&["IsPlayoffs"]).unwrap_or(false),
        is_official: row.flag(&["IsOfficial"]).unwrap_or(false),
    })
}

/// Draft actions in draft order; blank slots (missed bans) are left out.
pub fn transmute_picks_bans(row: &Row) -> Vec<PickBan> {
    PICKS_BANS_FIELDS
        .iter()
        .enumerate()
        .filter_map(|(i, field)| {
            let champion = row.text(&[field])?;
            Some(PickBan {
                order: (i + 1) as u8,
                champion,
                is_ban: field.contains("Ban"),
                side: if field.starts_with("Team1") { Side::Blue } else { Side::Red },
            })
        })
        .collect()
}
