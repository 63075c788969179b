// src/parsers/items.rs

use crate::data::{Item, ItemTier, StatFilter};
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::items::{FIELDS, transmute};

use super::{fetch_records, non_blank, truncate};

/// Items, optionally of one tier, by name. Tier spelling is checked
/// against [`ItemTier`] first.
pub fn get_items(site: &impl Site, tier: Option<&str>, limit: Option<u32>) -> Result<Vec<Item>> {
    let tier = tier.map(ItemTier::parse).transpose()?;
    let w = Where::new().eq_opt("Items.Tier", tier.as_ref().map(ItemTier::as_str))?;
    let q = CargoQuery::new("Items")
        .fields(FIELDS)
        .filter(w)
        .order_by("Items.Name")
        .limit(limit)?;
    fetch_records(site, &q, transmute)
}

pub fn get_item_by_name(site: &impl Site, name: &str) -> Result<Option<Item>> {
    let name = non_blank("item name", name)?;
    let q = CargoQuery::new("Items")
        .fields(FIELDS)
        .filter(Where::new().eq("Items.Name", name)?)
        .limit(Some(1))?;
    Ok(fetch_records(site, &q, transmute)?.into_iter().next())
}

pub fn get_items_by_tier(site: &impl Site, tier: &str, limit: Option<u32>) -> Result<Vec<Item>> {
    get_items(site, Some(tier), limit)
}

// Stat flags are derived: filter the whole table, then cap.
fn items_where(site: &impl Site, limit: Option<u32>, keep: impl Fn(&Item) -> bool) -> Result<Vec<Item>> {
    if limit == Some(0) {
        return Err(Error::invalid("limit must be at least 1"));
    }
    let mut all = get_items(site, None, None)?;
    all.retain(|i| keep(i));
    Ok(truncate(all, limit))
}

pub fn get_ad_items(site: &impl Site, limit: Option<u32>) -> Result<Vec<Item>> {
    items_where(site, limit, Item::provides_ad)
}

pub fn get_ap_items(site: &impl Site, limit: Option<u32>) -> Result<Vec<Item>> {
    items_where(site, limit, Item::provides_ap)
}

/// Armor or magic resist.
pub fn get_tank_items(site: &impl Site, limit: Option<u32>) -> Result<Vec<Item>> {
    items_where(site, limit, |i| i.provides_armor() || i.provides_mr())
}

pub fn get_health_items(site: &impl Site, limit: Option<u32>) -> Result<Vec<Item>> {
    items_where(site, limit, Item::provides_health)
}

pub fn get_mana_items(site: &impl Site, limit: Option<u32>) -> Result<Vec<Item>> {
    items_where(site, limit, Item::provides_mana)
}

pub fn search_items_by_stat(
    site: &impl Site,
    filter: StatFilter,
    limit: Option<u32>,
) -> Result<Vec<Item>> {
    items_where(site, limit, |i| filter.matches(i))
}
