// src/specs/standings.rs

use crate::core::row::Row;
use crate::data::Standing;
use crate::error::Result;

use super::required;

pub const FIELDS: &[&str] = &[
    "Standings.OverviewPage",
    "Standings.Team",
    "Standings.Place",
    "Standings.WinSeries",
    "Standings.LossSeries",
    "Standings.TieSeries",
    "Standings.WinGames",
    "Standings.LossGames",
    "Standings.Points",
    "Standings.PointsTiebreaker",
    "Standings.Streak",
    "Standings.StreakDirection",
];

pub fn transmute(row: &Row) -> Result<Standing> {
    Ok(Standing {
        team: required(row, "standing", &["Team"])?,
        overview_page: row.text_or_empty(&["OverviewPage"]),
        // Unranked rows carry 0.
        place: row.uint(&["Place"]).filter(|p| *p > 0),
        win_series: row.uint(&["WinSeries"]),
        loss_series: row.uint(&["LossSeries"]),
        tie_series: row.uint(&["TieSeries"]),
        win_games: row.uint(&["WinGames"]),
        loss_games: row.uint(&["LossGames"]),
        points: row.int(&["Points"]),
        points_tiebreaker: row.float(&["PointsTiebreaker"]),
        streak: row.uint(&["Streak"]),
        streak_direction: row.text_or_empty(&["StreakDirection"]),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn full_row() {
        let row = Row::from_pairs(&[
            ("OverviewPage", "LCK/2024 Season/Summer Season"),
            ("Team", "Hanwha Life Esports"),
            ("Place", "1"),
            ("WinSeries", "16"),
            ("LossSeries", "2"),
            ("WinGames", "34"),
            ("LossGames", "8"),
            ("Streak", "5"),
            ("StreakDirection", "W"),
        ]);
        let s = transmute(&row).unwrap();
        assert_eq!(s.place, Some(1));
        assert_eq!(s.total_games_played(), Some(42));
        assert_eq!(s.tie_series, None);
        assert_eq!(s.streak_direction, "W");
    }

    #[test]
    fn zero_place_is_none() {
        let row = Row::from_pairs(&[("Team", "T1"), ("Place", "0")]);
        assert_eq!(transmute(&row).unwrap().place, None);
    }

    #[test]
    fn missing_team_is_malformed() {
        let row = Row::from_pairs(&[("Place", "3"), ("WinSeries", "5")]);
        assert!(matches!(transmute(&row), Err(Error::MalformedRecord { kind: "standing", .. })));
    }
}
