// src/data/standing.rs

use serde::Serialize;

/// A team's line in a tournament's `Standings` table.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Standing {
    pub team: String,
    pub overview_page: String,
    /// 1-based. A missing or zero place upstream is `None`.
    pub place: Option<u32>,
    pub win_series: Option<u32>,
    pub loss_series: Option<u32>,
    pub tie_series: Option<u32>,
    pub win_games: Option<u32>,
    pub loss_games: Option<u32>,
    pub points: Option<i64>,
    pub points_tiebreaker: Option<f64>,
    pub streak: Option<u32>,
    pub streak_direction: String,
}

fn rate(wins: u32, losses: u32) -> Option<f64> {
    let total = u64::from(wins) + u64::from(losses);
    (total > 0).then(|| f64::from(wins) / total as f64 * 100.0)
}

impl Standing {
    /// Series wins over decided series, in percent. Ties don't count.
    pub fn series_win_rate(&self) -> Option<f64> {
        rate(self.win_series?, self.loss_series?)
    }

    pub fn game_win_rate(&self) -> Option<f64> {
        rate(self.win_games?, self.loss_games?)
    }

    /// Wins, losses and ties.
    pub fn total_series_played(&self) -> Option<u64> {
        Some(u64::from(self.win_series?) + u64::from(self.loss_series?) + u64::from(self.tie_series.unwrap_or(0)))
    }

    /// Explicit game totals when the table has them, decided series otherwise.
    pub fn total_games_played(&self) -> Option<u64> {
        match (self.win_games, self.loss_games) {
            (Some(w), Some(l)) => Some(u64::from(w) + u64::from(l)),
            _ => Some(u64::from(self.win_series?) + u64::from(self.loss_series?)),
        }
    }
}
