// src/data/roster.rs

use chrono::NaiveDate;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Direction {
    Join,
    Leave,
}

impl Direction {
    /// `Join`/`Leave`, or the older `Add`/`Remove` action names.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "join" | "add" => Some(Direction::Join),
            "leave" | "remove" => Some(Direction::Leave),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Join => "Join",
            Direction::Leave => "Leave",
        }
    }
}

/// A player joining or leaving a team, from `RosterChanges`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RosterChange {
    pub player: String,
    pub team: String,
    pub direction: Direction,
    pub role: String,
    pub roles: Vec<String>,
    pub date: Option<NaiveDate>,
    pub status: String,
    pub tournaments: Vec<String>,
    pub news_id: String,
    pub roster_change_id: String,
    /// `IsRetirement` where the table has it.
    pub retirement_flag: Option<bool>,
    pub is_substitute: Option<bool>,
}

impl RosterChange {
    pub fn is_addition(&self) -> bool {
        self.direction == Direction::Join
    }

    pub fn is_removal(&self) -> bool {
        self.direction == Direction::Leave
    }

    pub fn is_retirement(&self) -> bool {
        self.retirement_flag == Some(true)
            || (self.is_removal() && self.status.eq_ignore_ascii_case("retired"))
    }

    /// Inclusive on both ends; undated changes never match.
    pub fn is_between(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.date.is_some_and(|d| d >= from && d <= to)
    }
}

/// One player slot of a team's roster for one tournament.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TournamentRosterEntry {
    pub team: String,
    pub tournament: String,
    pub overview_page: String,
    pub player: String,
    pub role: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faker_join() -> RosterChange {
        RosterChange {
            player: s!("Faker"),
            team: s!("T1"),
            direction: Direction::Join,
            role: s!("Mid"),
            roles: vec![s!("Mid")],
            date: NaiveDate::from_ymd_opt(2013, 1, 1),
            status: s!("Active"),
            tournaments: vec![],
            news_id: s!("RC001"),
            roster_change_id: s!("RC001"),
            retirement_flag: None,
            is_substitute: None,
        }
    }

    #[test]
    fn faker_joining_is_an_addition_not_a_retirement() {
        let rc = faker_join();
        assert!(rc.is_addition());
        assert!(!rc.is_removal());
        assert!(!rc.is_retirement());
    }

    #[test]
    fn retirement_from_flag_or_status() {
        let flagged = RosterChange { direction: Direction::Leave, retirement_flag: Some(true), ..faker_join() };
        assert!(flagged.is_retirement());
        let by_status = RosterChange { direction: Direction::Leave, status: s!("Retired"), ..faker_join() };
        assert!(by_status.is_retirement());
        let join_retired = RosterChange { status: s!("Retired"), ..faker_join() };
        assert!(!join_retired.is_retirement());
    }

    #[test]
    fn direction_accepts_legacy_action_names() {
        assert_eq!(Direction::parse("Add"), Some(Direction::Join));
        assert_eq!(Direction::parse("remove"), Some(Direction::Leave));
        assert_eq!(Direction::parse("Role Change"), None);
    }

    #[test]
    fn window_is_inclusive() {
        let rc = faker_join();
        let d = NaiveDate::from_ymd_opt(2013, 1, 1).unwrap();
        assert!(rc.is_between(d, d));
        assert!(!RosterChange { date: None, ..faker_join() }.is_between(d, d));
    }
}
