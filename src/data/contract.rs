// src/data/contract.rs

use chrono::{NaiveDate, Utc};
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Contract {
    pub player: String,
    pub team: String,
    pub contract_end: Option<NaiveDate>,
    pub contract_end_text: String,
    /// Entry records a contract being taken down rather than signed.
    pub is_removal: bool,
    pub news_id: String,
}

impl Contract {
    /// No end date, or ending today or later.
    pub fn is_active_on(&self, today: NaiveDate) -> bool {
        self.contract_end.is_none_or(|end| end >= today)
    }

    pub fn is_expired_on(&self, today: NaiveDate) -> bool {
        self.contract_end.is_some_and(|end| end < today)
    }

    /// Negative once expired.
    pub fn days_until_expiry_on(&self, today: NaiveDate) -> Option<i64> {
        self.contract_end.map(|end| (end - today).num_days())
    }

    /// Ends within `[today, today + days]`. Open-ended contracts never expire.
    pub fn expires_within(&self, today: NaiveDate, days: u32) -> bool {
        self.days_until_expiry_on(today)
            .is_some_and(|d| (0..=i64::from(days)).contains(&d))
    }

    pub fn is_active(&self) -> bool {
        self.is_active_on(Utc::now().date_naive())
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_on(Utc::now().date_naive())
    }

    pub fn days_until_expiry(&self) -> Option<i64> {
        self.days_until_expiry_on(Utc::now().date_naive())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn contract(end: Option<NaiveDate>) -> Contract {
        Contract {
            player: s!("Faker"),
            team: s!("T1"),
            contract_end: end,
            contract_end_text: s!(),
            is_removal: false,
            news_id: s!(),
        }
    }

    #[test]
    fn open_ended_contract_is_active_and_never_expiring() {
        let c = contract(None);
        let today = day(2024, 6, 1);
        assert!(c.is_active_on(today));
        assert!(!c.is_expired_on(today));
        assert_eq!(c.days_until_expiry_on(today), None);
        assert!(!c.expires_within(today, 90));
    }

    #[test]
    fn end_today_is_still_active() {
        let today = day(2024, 6, 1);
        let c = contract(Some(today));
        assert!(c.is_active_on(today));
        assert!(!c.is_expired_on(today));
        assert_eq!(c.days_until_expiry_on(today), Some(0));
        assert!(c.expires_within(today, 0));
    }

    #[test]
    fn expiry_window_bounds() {
        let today = day(2024, 6, 1);
        assert!(contract(Some(day(2024, 8, 30))).expires_within(today, 90));
        assert!(!contract(Some(day(2024, 8, 31))).expires_within(today, 90));
        assert!(!contract(Some(day(2024, 5, 31))).expires_within(today, 90));
    }

    #[test]
    fn past_contract_is_expired() {
        let c = contract(Some(day(2023, 11, 19)));
        let today = day(2024, 1, 1);
        assert!(c.is_expired_on(today));
        assert!(!c.is_active_on(today));
        assert_eq!(c.days_until_expiry_on(today), Some(-43));
    }
}
