// src/parsers/contracts.rs

use chrono::{Days, NaiveDate};

use crate::data::Contract;
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::contracts::{FIELDS, transmute};

use super::{fetch_records, non_blank, today};

/// What [`get_contracts`] asks for. Removal entries are left out unless
/// `include_removals` is set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ContractFilter<'a> {
    pub player: Option<&'a str>,
    pub team: Option<&'a str>,
    pub include_removals: bool,
    /// Open-ended or ending today or later.
    pub active_only: bool,
    pub limit: Option<u32>,
}

pub fn get_contracts(site: &impl Site, filter: &ContractFilter) -> Result<Vec<Contract>> {
    get_contracts_at(site, filter, today())
}

/// [`get_contracts`] with `today` supplied by the caller.
pub fn get_contracts_at(
    site: &impl Site,
    filter: &ContractFilter,
    today: NaiveDate,
) -> Result<Vec<Contract>> {
    let mut w = Where::new()
        .eq_opt("Contracts.Player", filter.player)?
        .eq_opt("Contracts.Team", filter.team)?;
    if !filter.include_removals {
        w = w.null_or("Contracts.IsRemoval", "0")?;
    }
    if filter.active_only {
        w = w.null_or_ge_date("Contracts.ContractEnd", today);
    }

    let q = CargoQuery::new("Contracts")
        .fields(FIELDS)
        .filter(w)
        .order_by("Contracts.ContractEnd DESC")
        .limit(filter.limit)?;
    let mut contracts = fetch_records(site, &q, transmute)?;
    if filter.active_only {
        contracts.retain(|c| c.is_active_on(today));
    }
    Ok(contracts)
}

pub fn get_player_contracts(site: &impl Site, player: &str, limit: Option<u32>) -> Result<Vec<Contract>> {
    let player = non_blank("player", player)?;
    get_contracts(site, &ContractFilter { player: Some(player), limit, ..Default::default() })
}

pub fn get_team_contracts(
    site: &impl Site,
    team: &str,
    active_only: bool,
    limit: Option<u32>,
) -> Result<Vec<Contract>> {
    let team = non_blank("team", team)?;
    get_contracts(site, &ContractFilter { team: Some(team), active_only, limit, ..Default::default() })
}

pub fn get_active_contracts(site: &impl Site, team: Option<&str>, limit: Option<u32>) -> Result<Vec<Contract>> {
    get_contracts(site, &ContractFilter { team, active_only: true, limit, ..Default::default() })
}

/// Contracts ending within `days` from today, soonest first. Contracts
/// without an end date never expire and are not returned.
pub fn get_expiring_contracts(
    site: &impl Site,
    days: u32,
    team: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<Contract>> {
    get_expiring_contracts_at(site, days, team, limit, today())
}

pub fn get_expiring_contracts_at(
    site: &impl Site,
    days: u32,
    team: Option<&str>,
    limit: Option<u32>,
    today: NaiveDate,
) -> Result<Vec<Contract>> {
    let until = today
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(|| Error::invalid(format!("expiry window of {days} days is out of range")))?;

    let w = Where::new()
        .eq_opt("Contracts.Team", team)?
        .ge_date("Contracts.ContractEnd", today)
        .le_date("Contracts.ContractEnd", until)
        .null_or("Contracts.IsRemoval", "0")?;
    let q = CargoQuery::new("Contracts")
        .fields(FIELDS)
        .filter(w)
        .order_by("Contracts.ContractEnd ASC")
        .limit(limit)?;

    let mut contracts = fetch_records(site, &q, transmute)?;
    contracts.retain(|c| c.expires_within(today, days));
    Ok(contracts)
}

/// Entries recording a contract being taken down.
pub fn get_contract_removals(
    site: &impl Site,
    player: Option<&str>,
    team: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<Contract>> {
    let w = Where::new()
        .eq("Contracts.IsRemoval", "1")?
        .eq_opt("Contracts.Player", player)?
        .eq_opt("Contracts.Team", team)?;
    let q = CargoQuery::new("Contracts")
        .fields(FIELDS)
        .filter(w)
        .order_by("Contracts.ContractEnd DESC")
        .limit(limit)?;
    fetch_records(site, &q, transmute)
}
