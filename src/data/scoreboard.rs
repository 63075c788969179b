// src/data/scoreboard.rs
//! Per-player game lines and the stats derived from them.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::Side;
use crate::core::sanitize::clean_player_name;

#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Grade {
    S,
    A,
    B,
    C,
}

/// KDA cutpoints, best grade first. Anything below the last row is `C`.
pub const GRADE_TABLE: [(f64, Grade); 3] = [
    (6.0, Grade::S),
    (4.0, Grade::A),
    (2.0, Grade::B),
];

pub fn grade_for_kda(kda: f64) -> Grade {
    GRADE_TABLE
        .iter()
        .find(|(min, _)| kda >= *min)
        .map(|(_, g)| *g)
        .unwrap_or(Grade::C)
}

/// `(kills + assists) / max(deaths, 1)`, summed in floating point.
pub fn kda(kills: u64, deaths: u64, assists: u64) -> f64 {
    (kills as f64 + assists as f64) / deaths.max(1) as f64
}

/// One player's line in one game, from `ScoreboardPlayers`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScoreboardPlayer {
    pub overview_page: String,
    pub tournament: String,
    pub name: String,
    /// Player page, possibly with a ` (Real Name)` disambiguation.
    pub link: String,
    pub team: String,
    pub team_vs: String,
    pub champion: String,
    pub role: String,
    pub side: Option<Side>,
    pub kills: Option<u32>,
    pub deaths: Option<u32>,
    pub assists: Option<u32>,
    pub gold: Option<u32>,
    pub cs: Option<u32>,
    pub damage_to_champions: Option<u32>,
    pub vision_score: Option<u32>,
    pub team_kills: Option<u32>,
    pub team_gold: Option<u32>,
    pub items: Vec<String>,
    pub summoner_spells: Vec<String>,
    pub keystone: String,
    pub runes: String,
    pub player_win: Option<bool>,
    pub datetime_utc: Option<DateTime<Utc>>,
    pub game_id: String,
    pub match_id: String,
}

impl ScoreboardPlayer {
    /// Link (or Name) without the disambiguation suffix.
    pub fn player_name(&self) -> String {
        let base = if self.link.is_empty() { &self.name } else { &self.link };
        clean_player_name(base)
    }

    /// Missing kills or assists → `None`; missing deaths count as zero.
    pub fn kda_ratio(&self) -> Option<f64> {
        Some(kda(u64::from(self.kills?), u64::from(self.deaths.unwrap_or(0)), u64::from(self.assists?)))
    }

    pub fn performance_grade(&self) -> Option<Grade> {
        self.kda_ratio().map(grade_for_kda)
    }

    /// Percent of team kills the player took part in.
    pub fn kill_participation(&self) -> Option<f64> {
        let team = self.team_kills.filter(|t| *t > 0)?;
        Some((f64::from(self.kills?) + f64::from(self.assists?)) / f64::from(team) * 100.0)
    }

    pub fn gold_share(&self) -> Option<f64> {
        let team = self.team_gold.filter(|t| *t > 0)?;
        Some(f64::from(self.gold?) / f64::from(team) * 100.0)
    }

    /// Largest multikill the kill count allows, `"Double"` to `"Penta"`;
    /// `"None"` under two kills.
    pub fn multikill_potential(&self) -> Option<&'static str> {
        Some(match self.kills? {
            5.. => "Penta",
            4 => "Quadra",
            3 => "Triple",
            2 => "Double",
            _ => "None",
        })
    }

    pub fn did_win(&self) -> bool {
        self.player_win == Some(true)
    }
}

/// Tournament-wide aggregate for one player.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct MvpCandidate {
    pub player: String,
    pub team: String,
    pub games: usize,
    pub wins: usize,
    pub kills: u64,
    pub deaths: u64,
    pub assists: u64,
    pub kda: f64,
    pub grade: Grade,
}

impl MvpCandidate {
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 { 0.0 } else { self.wins as f64 / self.games as f64 * 100.0 }
    }

    /// Sum lines per player, keep players with at least `min_games`, order by
    /// aggregate KDA, then wins, then name.
    pub fn rank(lines: &[ScoreboardPlayer], min_games: usize) -> Vec<MvpCandidate> {
        let mut by_player: BTreeMap<String, MvpCandidate> = BTreeMap::new();

        for line in lines {
            let name = line.player_name();
            if name.is_empty() {
                continue;
            }
            let entry = by_player.entry(name.clone()).or_insert_with(|| MvpCandidate {
                player: name,
                team: s!(),
                games: 0,
                wins: 0,
                kills: 0,
                deaths: 0,
                assists: 0,
                kda: 0.0,
                grade: Grade::C,
            });
            entry.games += 1;
            entry.wins += usize::from(line.did_win());
            entry.kills = entry.kills.saturating_add(u64::from(line.kills.unwrap_or(0)));
            entry.deaths = entry.deaths.saturating_add(u64::from(line.deaths.unwrap_or(0)));
            entry.assists = entry.assists.saturating_add(u64::from(line.assists.unwrap_or(0)));
            if !line.team.is_empty() {
                entry.team = line.team.clone();
            }
        }

        let mut out: Vec<MvpCandidate> = by_player
            .into_values()
            .filter(|c| c.games >= min_games)
            .map(|mut c| {
                c.kda = kda(c.kills, c.deaths, c.assists);
                c.grade = grade_for_kda(c.kda);
                c
            })
            .collect();

        out.sort_by(|a, b| {
            b.kda
                .partial_cmp(&a.kda)
                .unwrap_or(Ordering::Equal)
                .then(b.wins.cmp(&a.wins))
                .then_with(|| a.player.cmp(&b.player))
        });
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(link: &str, k: u32, d: u32, a: u32, win: bool) -> ScoreboardPlayer {
        ScoreboardPlayer {
            overview_page: s!("LCK/2024 Season/Summer Season"),
            tournament: s!(),
            name: s!(),
            link: s!(link),
            team: s!("T1"),
            team_vs: s!("Gen.G"),
            champion: s!("Azir"),
            role: s!("Mid"),
            side: Some(Side::Blue),
            kills: Some(k),
            deaths: Some(d),
            assists: Some(a),
            gold: Some(12_000),
            cs: Some(300),
            damage_to_champions: None,
            vision_score: None,
            team_kills: Some(20),
            team_gold: Some(60_000),
            items: vec![],
            summoner_spells: vec![],
            keystone: s!(),
            runes: s!(),
            player_win: Some(win),
            datetime_utc: None,
            game_id: s!(),
            match_id: s!(),
        }
    }

    #[test]
    fn kda_uses_one_for_deathless_games() {
        assert_eq!(line("Faker", 5, 0, 7, true).kda_ratio(), Some(12.0));
        assert_eq!(line("Faker", 2, 4, 2, false).kda_ratio(), Some(1.0));
    }

    #[test]
    fn grade_table_boundaries() {
        assert_eq!(grade_for_kda(6.0), Grade::S);
        assert_eq!(grade_for_kda(5.99), Grade::A);
        assert_eq!(grade_for_kda(4.0), Grade::A);
        assert_eq!(grade_for_kda(2.0), Grade::B);
        assert_eq!(grade_for_kda(1.99), Grade::C);
        assert_eq!(line("Faker", 3, 1, 3, true).performance_grade(), Some(Grade::S));
    }

    #[test]
    fn shares_are_percentages_of_team_totals() {
        let l = line("Faker", 4, 1, 6, true);
        assert_eq!(l.kill_participation(), Some(50.0));
        assert_eq!(l.gold_share(), Some(20.0));
        let no_team = ScoreboardPlayer { team_kills: Some(0), team_gold: None, ..l };
        assert_eq!(no_team.kill_participation(), None);
        assert_eq!(no_team.gold_share(), None);
    }

    #[test]
    fn extreme_counts_do_not_overflow() {
        let l = line("Faker", u32::MAX, u32::MAX, 1, true);
        let r = l.kda_ratio().unwrap();
        assert!((r - 1.0).abs() < 1e-6, "{r}");
        assert!(l.kill_participation().unwrap() > 100.0);

        let big = vec![line("Faker", u32::MAX, 0, u32::MAX, true), line("Faker", u32::MAX, 0, 1, true)];
        let ranked = MvpCandidate::rank(&big, 1);
        assert_eq!(ranked[0].kills, 2 * u64::from(u32::MAX));
    }

    #[test]
    fn multikill_labels_follow_kills() {
        assert_eq!(line("Faker", 7, 0, 0, true).multikill_potential(), Some("Penta"));
        assert_eq!(line("Faker", 4, 0, 0, true).multikill_potential(), Some("Quadra"));
        assert_eq!(line("Faker", 3, 0, 0, true).multikill_potential(), Some("Triple"));
        assert_eq!(line("Faker", 2, 0, 0, true).multikill_potential(), Some("Double"));
        assert_eq!(line("Faker", 1, 0, 0, true).multikill_potential(), Some("None"));
        let unknown = ScoreboardPlayer { kills: None, ..line("Faker", 0, 0, 0, true) };
        assert_eq!(unknown.multikill_potential(), None);
    }

    #[test]
    fn player_name_drops_disambiguation() {
        assert_eq!(line("Ruler (Park Jae-hyuk)", 0, 0, 0, false).player_name(), "Ruler");
    }

    #[test]
    fn mvp_ranking_filters_by_games_and_orders_by_kda() {
        let lines = vec![
            line("Faker", 5, 1, 5, true),
            line("Faker", 3, 2, 5, true),
            line("Chovy", 8, 1, 4, true),
            line("Chovy", 6, 1, 6, false),
            line("Zeus", 10, 0, 10, true),
        ];
        let ranked = MvpCandidate::rank(&lines, 2);
        let names: Vec<&str> = ranked.iter().map(|c| c.player.as_str()).collect();
        assert_eq!(names, vec!["Chovy", "Faker"]);
        assert_eq!(ranked[0].kda, 12.0);
        assert_eq!(ranked[0].grade, Grade::S);
        assert_eq!(ranked[1].games, 2);
        assert_eq!(ranked[1].win_rate(), 100.0);
    }
}
