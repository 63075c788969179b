// src/data/game.rs

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use super::ScoreboardPlayer;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Winner {
    Team1,
    Team2,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Side {
    Blue,
    Red,
}

/// One game of a series, from `ScoreboardGames`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Game {
    pub game_id: String,
    pub match_id: String,
    pub tournament: String,
    pub overview_page: String,
    pub team1: String,
    pub team2: String,
    pub winner: Option<Winner>,
    pub team1_score: Option<i64>,
    pub team2_score: Option<i64>,
    pub date: Option<DateTime<Utc>>,
    pub patch: String,
    /// `mm:ss` as written on the wiki, may be empty.
    pub gamelength: String,
    /// Decimal minutes.
    pub gamelength_minutes: Option<f64>,
    pub team1_kills: Option<i64>,
    pub team2_kills: Option<i64>,
    pub team1_dragons: Option<i64>,
    pub team2_dragons: Option<i64>,
    pub team1_barons: Option<i64>,
    pub team2_barons: Option<i64>,
    pub team1_towers: Option<i64>,
    pub team2_towers: Option<i64>,
    pub team1_picks: Vec<String>,
    pub team2_picks: Vec<String>,
    pub team1_bans: Vec<String>,
    pub team2_bans: Vec<String>,
    pub team1_players: Vec<String>,
    pub team2_players: Vec<String>,
    pub n_game_in_match: Option<i64>,
    pub vod: String,
}

impl Game {
    pub fn is_played(&self) -> bool {
        self.winner.is_some()
    }

    pub fn winning_team(&self) -> Option<&str> {
        match self.winner? {
            Winner::Team1 => Some(&self.team1),
            Winner::Team2 => Some(&self.team2),
        }
    }

    pub fn losing_team(&self) -> Option<&str> {
        match self.winner? {
            Winner::Team1 => Some(&self.team2),
            Winner::Team2 => Some(&self.team1),
        }
    }

    /// Whole seconds, from `mm:ss` text first, decimal minutes second.
    pub fn duration_secs(&self) -> Option<u64> {
        parse_clock(&self.gamelength).or_else(|| {
            self.gamelength_minutes
                .filter(|m| m.is_finite() && *m >= 0.0)
                .map(|m| (m * 60.0).round() as u64)
        })
    }

    /// `"32m 15s"`.
    pub fn duration_label(&self) -> Option<String> {
        self.duration_secs().map(|t| format!("{}m {:02}s", t / 60, t % 60))
    }
}

// "32:15" or "1:02:03"
fn parse_clock(s: &str) -> Option<u64> {
    let parts: Vec<&str> = s.trim().split(':').collect();
    if parts.len() < 2 || parts.len() > 3 {
        return None;
    }
    let mut total = 0u64;
    for p in parts {
        total = total.checked_mul(60)?.checked_add(p.trim().parse::<u64>().ok()?)?;
    }
    Some(total)
}

/// One draft action, in draft order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PickBan {
    pub order: u8,
    pub champion: String,
    pub is_ban: bool,
    pub side: Side,
}

/// Row from `Tournaments` (joined with `Leagues` for the short name).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Tournament {
    pub name: String,
    pub overview_page: String,
    pub league: String,
    pub league_short: String,
    pub region: String,
    pub level: String,
    pub date_start: Option<NaiveDate>,
    pub date_end: Option<NaiveDate>,
    pub rulebook: String,
    pub is_qualifier: bool,
    pub is_playoffs: bool,
    pub is_official: bool,
}

impl Tournament {
    pub fn is_primary(&self) -> bool {
        self.level.eq_ignore_ascii_case("primary")
    }
}

/// A game with its draft and scoreboard lines.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GameDetails {
    pub game: Game,
    pub picks_bans: Vec<PickBan>,
    pub players: Vec<ScoreboardPlayer>,
}
