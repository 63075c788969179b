// src/parsers/champions.rs

use crate::data::{Champion, canonical_attribute};
use crate::error::{Error, Result};
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::champions::{FIELDS, transmute};

use super::{fetch_records, non_blank, truncate};

/// Champions by resource and/or attribute, by name. An attribute outside
/// the known taxonomy is `InvalidArgument` before anything is sent.
pub fn get_champions(
    site: &impl Site,
    resource: Option<&str>,
    attribute: Option<&str>,
    limit: Option<u32>,
) -> Result<Vec<Champion>> {
    let attribute = attribute.map(canonical_attribute).transpose()?;

    let mut w = Where::new().eq_opt("Champions.Resource", resource)?;
    if let Some(a) = attribute {
        w = w.like("Champions.Attributes", a)?;
    }
    let q = CargoQuery::new("Champions")
        .fields(FIELDS)
        .filter(w)
        .order_by("Champions.Name")
        .limit(limit)?;

    let mut champions = fetch_records(site, &q, transmute)?;
    // LIKE is a substring match; keep whole-label hits only.
    if let Some(a) = attribute {
        champions.retain(|c| c.has_attribute(a));
    }
    Ok(champions)
}

pub fn get_champion_by_name(site: &impl Site, name: &str) -> Result<Option<Champion>> {
    let name = non_blank("champion name", name)?;
    let q = CargoQuery::new("Champions")
        .fields(FIELDS)
        .filter(Where::new().eq("Champions.Name", name)?)
        .limit(Some(1))?;
    Ok(fetch_records(site, &q, transmute)?.into_iter().next())
}

pub fn get_champions_by_attribute(
    site: &impl Site,
    attribute: &str,
    limit: Option<u32>,
) -> Result<Vec<Champion>> {
    get_champions(site, None, Some(attribute), limit)
}

pub fn get_champions_by_resource(
    site: &impl Site,
    resource: &str,
    limit: Option<u32>,
) -> Result<Vec<Champion>> {
    get_champions(site, Some(non_blank("resource", resource)?), None, limit)
}

// Range is a derived flag: read the whole table, filter, then cap.
fn champions_where(site: &impl Site, limit: Option<u32>, keep: fn(&Champion) -> bool) -> Result<Vec<Champion>> {
    if limit == Some(0) {
        return Err(Error::invalid("limit must be at least 1"));
    }
    let mut all = get_champions(site, None, None, None)?;
    all.retain(keep);
    Ok(truncate(all, limit))
}

pub fn get_melee_champions(site: &impl Site, limit: Option<u32>) -> Result<Vec<Champion>> {
    champions_where(site, limit, Champion::is_melee)
}

pub fn get_ranged_champions(site: &impl Site, limit: Option<u32>) -> Result<Vec<Champion>> {
    champions_where(site, limit, Champion::is_ranged)
}
