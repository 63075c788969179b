// src/parsers/games.rs

use crate::data::{Game, GameDetails, PickBan, Tournament};
use crate::error::Result;
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::games::{
    GAME_FIELDS, PICKS_BANS_QUALIFIED, TOURNAMENT_FIELDS, transmute_game, transmute_picks_bans,
    transmute_tournament,
};

use super::{fetch, fetch_records, non_blank, scoreboard};

/// Every region that has at least one tournament, sorted.
pub fn get_regions(site: &impl Site) -> Result<Vec<String>> {
    let q = CargoQuery::new("Tournaments")
        .fields(&["Tournaments.Region"])
        .group_by("Tournaments.Region");
    let mut regions: Vec<String> = fetch(site, &q)?
        .iter()
        .filter_map(|row| row.text(&["Region"]))
        .collect();
    regions.sort();
    regions.dedup();
    Ok(regions)
}

/// Tournaments matching every given filter. `level` is usually `Primary`.
pub fn get_tournaments(
    site: &impl Site,
    region: Option<&str>,
    year: Option<i32>,
    level: Option<&str>,
    is_playoffs: Option<bool>,
    limit: Option<u32>,
) -> Result<Vec<Tournament>> {
    let mut w = Where::new()
        .eq_opt("Tournaments.Region", region)?
        .eq_opt("Tournaments.TournamentLevel", level)?;
    if let Some(y) = year {
        w = w.eq_num("Tournaments.Year", i64::from(y));
    }
    if let Some(p) = is_playoffs {
        w = w.eq_num("Tournaments.IsPlayoffs", i64::from(p));
    }

    let q = CargoQuery::new("Tournaments, Leagues")
        .join_on("Tournaments.League = Leagues.League")
        .fields(TOURNAMENT_FIELDS)
        .filter(w)
        .order_by("Tournaments.DateStart")
        .limit(limit)?;
    fetch_records(site, &q, transmute_tournament)
}

/// Games of one tournament, oldest first.
pub fn get_games(site: &impl Site, overview_page: &str, limit: Option<u32>) -> Result<Vec<Game>> {
    let page = non_blank("overview page", overview_page)?;
    let q = CargoQuery::new("ScoreboardGames")
        .fields(GAME_FIELDS)
        .filter(Where::new().eq("ScoreboardGames.OverviewPage", page)?)
        .order_by("ScoreboardGames.DateTime_UTC")
        .limit(limit)?;
    fetch_records(site, &q, transmute_game)
}

pub fn get_game_by_id(site: &impl Site, game_id: &str) -> Result<Option<Game>> {
    let id = non_blank("game id", game_id)?;
    let q = CargoQuery::new("ScoreboardGames")
        .fields(GAME_FIELDS)
        .filter(Where::new().eq("ScoreboardGames.GameId", id)?)
        .limit(Some(1))?;
    Ok(fetch_records(site, &q, transmute_game)?.into_iter().next())
}

/// Draft of one game, in draft order. Empty when the wiki has no draft.
pub fn get_picks_bans(site: &impl Site, game_id: &str) -> Result<Vec<PickBan>> {
    let id = non_blank("game id", game_id)?;
    let q = CargoQuery::new("PicksAndBansS7, ScoreboardGames")
        .join_on("PicksAndBansS7.GameId = ScoreboardGames.GameId")
        .fields(&PICKS_BANS_QUALIFIED)
        .filter(Where::new().eq("ScoreboardGames.GameId", id)?)
        .limit(Some(1))?;
    Ok(fetch(site, &q)?
        .first()
        .map(transmute_picks_bans)
        .unwrap_or_default())
}

/// Game, draft and scoreboard lines. The round trips run one after the
/// other and any failure fails the whole call.
pub fn get_game_details(site: &impl Site, game_id: &str) -> Result<Option<GameDetails>> {
    let Some(game) = get_game_by_id(site, game_id)? else {
        return Ok(None);
    };
    let picks_bans = get_picks_bans(site, game_id)?;
    let players = scoreboard::get_game_scoreboard(site, game_id)?;
    Ok(Some(GameDetails { game, picks_bans, players }))
}
