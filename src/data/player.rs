// src/data/player.rs

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PlayerStatus {
    Active,
    /// Not retired, but without a team.
    Inactive,
    Retired,
    ToWildRift,
    ToValorant,
}

/// A `Players` row.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlayerInfo {
    pub id: String,
    pub overview_page: String,
    pub player: String,
    pub image: String,
    pub name: String,
    pub native_name: String,
    pub name_full: String,
    pub country: String,
    pub nationality: Vec<String>,
    pub nationality_primary: String,
    pub residency: String,
    pub residency_former: String,
    /// Age as the wiki states it; prefer [`PlayerInfo::age_on`].
    pub reported_age: Option<u32>,
    pub birth_date: Option<NaiveDate>,
    pub death_date: Option<NaiveDate>,
    pub team: String,
    pub team2: String,
    pub current_teams: Vec<String>,
    pub team_last: String,
    pub role: String,
    pub role_last: Vec<String>,
    pub contract: Option<NaiveDate>,
    pub fav_champs: Vec<String>,
    pub soloqueue_ids: String,
    /// Column name → handle/URL, only for columns that are set.
    pub socials: BTreeMap<String, String>,
    pub is_retired: Option<bool>,
    pub to_wildrift: Option<bool>,
    pub to_valorant: Option<bool>,
    pub is_personality: Option<bool>,
    pub is_substitute: Option<bool>,
    pub is_trainee: Option<bool>,
}

impl PlayerInfo {
    /// Display handle: `Player`, falling back to `ID`.
    pub fn handle(&self) -> &str {
        if self.player.is_empty() { &self.id } else { &self.player }
    }

    pub fn status(&self) -> PlayerStatus {
        if self.to_wildrift == Some(true) {
            PlayerStatus::ToWildRift
        } else if self.to_valorant == Some(true) {
            PlayerStatus::ToValorant
        } else if self.is_retired == Some(true) {
            PlayerStatus::Retired
        } else if self.team.is_empty() && self.current_teams.is_empty() {
            PlayerStatus::Inactive
        } else {
            PlayerStatus::Active
        }
    }

    pub fn is_active(&self) -> bool {
        self.status() == PlayerStatus::Active
    }

    /// Whole years from the birth date, `None` without one (or before it).
    pub fn age_on(&self, today: NaiveDate) -> Option<u32> {
        let born = self.birth_date?;
        let mut years = today.year() - born.year();
        if (today.month(), today.day()) < (born.month(), born.day()) {
            years -= 1;
        }
        u32::try_from(years).ok()
    }

    pub fn age(&self) -> Option<u32> {
        self.age_on(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn faker() -> PlayerInfo {
        PlayerInfo {
            id: s!("Faker"),
            overview_page: s!("Faker"),
            player: s!("Faker"),
            image: s!(),
            name: s!("Lee Sang-hyeok"),
            native_name: s!(),
            name_full: s!(),
            country: s!("South Korea"),
            nationality: vec![s!("South Korea")],
            nationality_primary: s!("South Korea"),
            residency: s!("Korea"),
            residency_former: s!(),
            reported_age: None,
            birth_date: NaiveDate::from_ymd_opt(1996, 5, 7),
            death_date: None,
            team: s!("T1"),
            team2: s!(),
            current_teams: vec![s!("T1")],
            team_last: s!(),
            role: s!("Mid"),
            role_last: vec![],
            contract: None,
            fav_champs: vec![],
            soloqueue_ids: s!(),
            socials: BTreeMap::new(),
            is_retired: Some(false),
            to_wildrift: None,
            to_valorant: None,
            is_personality: None,
            is_substitute: None,
            is_trainee: None,
        }
    }

    #[test]
    fn age_turns_on_the_birthday() {
        let p = faker();
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 5, 6).unwrap()), Some(27));
        assert_eq!(p.age_on(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()), Some(28));
        let unknown = PlayerInfo { birth_date: None, ..faker() };
        assert_eq!(unknown.age_on(NaiveDate::from_ymd_opt(2024, 5, 7).unwrap()), None);
    }

    #[test]
    fn status_precedence() {
        assert_eq!(faker().status(), PlayerStatus::Active);
        let teamless = PlayerInfo { team: s!(), current_teams: vec![], ..faker() };
        assert_eq!(teamless.status(), PlayerStatus::Inactive);
        let retired = PlayerInfo { is_retired: Some(true), ..faker() };
        assert_eq!(retired.status(), PlayerStatus::Retired);
        let moved = PlayerInfo { is_retired: Some(true), to_valorant: Some(true), ..faker() };
        assert_eq!(moved.status(), PlayerStatus::ToValorant);
    }
}
