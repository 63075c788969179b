// src/parsers/players.rs

use crate::data::PlayerInfo;
use crate::error::Result;
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::players::{FIELDS, transmute};

use super::{fetch_records, non_blank};

/// Exact match on the `Player` column. `Ok(None)` when nobody has that name.
pub fn get_player_by_name(site: &impl Site, name: &str) -> Result<Option<PlayerInfo>> {
    let name = non_blank("player name", name)?;
    let q = CargoQuery::new("Players=P")
        .fields(FIELDS)
        .filter(Where::new().eq("P.Player", name)?)
        .limit(Some(1))?;
    Ok(fetch_records(site, &q, transmute)?.into_iter().next())
}
