// src/parsers/scoreboard.rs

use std::cmp::Ordering;

use crate::config::consts::{DEFAULT_MATCH_HISTORY, DEFAULT_MVP_MIN_GAMES, VALID_ROLES};
use crate::data::{MvpCandidate, ScoreboardPlayer};
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::scoreboard::{FIELDS, transmute};

use super::{fetch_records, non_blank, truncate};

/// What [`get_scoreboard_players`] asks for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ScoreboardFilter<'a> {
    /// Tournament overview page.
    pub tournament: Option<&'a str>,
    /// Substring of the player link, so disambiguated pages still match.
    pub player: Option<&'a str>,
    pub team: Option<&'a str>,
    pub champion: Option<&'a str>,
    pub game_id: Option<&'a str>,
    pub role: Option<&'a str>,
    pub limit: Option<u32>,
}

/// Newest games first.
pub fn get_scoreboard_players(site: &impl Site, filter: &ScoreboardFilter) -> Result<Vec<ScoreboardPlayer>> {
    let mut w = Where::new()
        .eq_opt("ScoreboardPlayers.OverviewPage", filter.tournament)?
        .eq_opt("ScoreboardPlayers.Team", filter.team)?
        .eq_opt("ScoreboardPlayers.Champion", filter.champion)?
        .eq_opt("ScoreboardPlayers.GameId", filter.game_id)?
        .eq_opt("ScoreboardPlayers.Role", filter.role)?;
    if let Some(p) = filter.player {
        w = w.like("ScoreboardPlayers.Link", p)?;
    }
    let q = CargoQuery::new("ScoreboardPlayers")
        .fields(FIELDS)
        .filter(w)
        .order_by("ScoreboardPlayers.DateTime_UTC DESC")
        .limit(filter.limit)?;
    fetch_records(site, &q, transmute)
}

/// Latest games of one player; 20 when no limit is given.
pub fn get_player_match_history(
    site: &impl Site,
    player: &str,
    limit: Option<u32>,
) -> Result<Vec<ScoreboardPlayer>> {
    let player = non_blank("player", player)?;
    let limit = Some(limit.unwrap_or(DEFAULT_MATCH_HISTORY));
    get_scoreboard_players(site, &ScoreboardFilter { player: Some(player), limit, ..Default::default() })
}

pub fn get_team_match_performance(
    site: &impl Site,
    team: &str,
    tournament: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<ScoreboardPlayer>> {
    let team = non_blank("team", team)?;
    get_scoreboard_players(site, &ScoreboardFilter { team: Some(team), tournament, limit, ..Default::default() })
}

pub fn get_champion_performance_stats(
    site: &impl Site,
    champion: &str,
    tournament: Option<&str>,
    role: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<ScoreboardPlayer>> {
    let champion = non_blank("champion", champion)?;
    let role = role.map(canonical_role).transpose()?;
    get_scoreboard_players(
        site,
        &ScoreboardFilter { champion: Some(champion), tournament, role, limit, ..Default::default() },
    )
}

/// Every line of one game, usually ten.
pub fn get_game_scoreboard(site: &impl Site, game_id: &str) -> Result<Vec<ScoreboardPlayer>> {
    let id = non_blank("game id", game_id)?;
    get_scoreboard_players(site, &ScoreboardFilter { game_id: Some(id), ..Default::default() })
}

/// Players with at least `min_games` (default 5) in the tournament, best
/// aggregate KDA first. `limit` caps the candidates, not the lines read.
pub fn get_tournament_mvp_candidates(
    site: &impl Site,
    tournament: &str,
    min_games: Option<usize>,
    limit: Option<u32>,
) -> Result<Vec<MvpCandidate>> {
    let tournament = non_blank("tournament", tournament)?;
    if limit == Some(0) {
        return Err(Error::invalid("limit must be at least 1"));
    }
    let lines = get_scoreboard_players(site, &ScoreboardFilter { tournament: Some(tournament), ..Default::default() })?;
    let ranked = MvpCandidate::rank(&lines, min_games.unwrap_or(DEFAULT_MVP_MIN_GAMES));
    Ok(truncate(ranked, limit))
}

/// Lines of one role in a tournament, best KDA first.
pub fn get_role_performance_comparison(
    site: &impl Site,
    tournament: &str,
    role: &str,
    limit: Option<u32>,
) -> Result<Vec<ScoreboardPlayer>> {
    let tournament = non_blank("tournament", tournament)?;
    let role = canonical_role(role)?;
    if limit == Some(0) {
        return Err(Error::invalid("limit must be at least 1"));
    }
    // Rank every line first; the cap applies to the ranking, not the fetch.
    let mut lines = get_scoreboard_players(
        site,
        &ScoreboardFilter { tournament: Some(tournament), role: Some(role), ..Default::default() },
    )?;
    lines.sort_by(|a, b| {
        let (x, y) = (a.kda_ratio().unwrap_or(0.0), b.kda_ratio().unwrap_or(0.0));
        y.partial_cmp(&x).unwrap_or(Ordering::Equal)
    });
    Ok(truncate(lines, limit))
}

fn canonical_role(role: &str) -> Result<&'static str> {
    let r = role.trim();
    VALID_ROLES
        .iter()
        .copied()
        .find(|v| v.eq_ignore_ascii_case(r))
        .ok_or_else(|| Error::invalid(format!(
            "unknown role {r:?} (expected one of {})",
            VALID_ROLES.join(", ")
        )))
}
