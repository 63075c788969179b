// src/data/champion.rs

use chrono::NaiveDate;
use serde::Serialize;

use crate::config::consts::MELEE_RANGE_MAX;
use crate::error::{Error, Result};

/// Every class label the `Champions.Attributes` column uses.
pub const ATTRIBUTES: [&str; 9] = [
    "Assassin", "Controller", "Fighter", "Mage", "Marksman",
    "Slayer", "Specialist", "Support", "Tank",
];

/// Canonical spelling of an attribute, case-insensitively.
pub fn canonical_attribute(name: &str) -> Result<&'static str> {
    let needle = name.trim();
    ATTRIBUTES
        .iter()
        .copied()
        .find(|a| a.eq_ignore_ascii_case(needle))
        .ok_or_else(|| Error::invalid(format!(
            "unknown champion attribute {needle:?} (expected one of {})",
            ATTRIBUTES.join(", ")
        )))
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct BaseStats {
    pub health: Option<f64>,
    pub hp_level: Option<f64>,
    pub hp_regen: Option<f64>,
    pub mana: Option<f64>,
    pub mana_level: Option<f64>,
    pub mana_regen: Option<f64>,
    pub energy: Option<f64>,
    pub movespeed: Option<f64>,
    pub attack_damage: Option<f64>,
    pub ad_level: Option<f64>,
    pub attack_speed: Option<f64>,
    pub as_level: Option<f64>,
    pub attack_range: Option<f64>,
    pub armor: Option<f64>,
    pub armor_level: Option<f64>,
    pub magic_resist: Option<f64>,
    pub magic_resist_level: Option<f64>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Champion {
    pub name: String,
    pub title: String,
    pub real_name: String,
    pub release_date: Option<NaiveDate>,
    pub be: Option<i64>,
    pub rp: Option<i64>,
    /// Raw comma-separated attributes.
    pub attributes: String,
    pub resource: String,
    pub key_integer: Option<i64>,
    pub stats: BaseStats,
}

impl Champion {
    pub fn attack_range(&self) -> Option<f64> {
        self.stats.attack_range
    }

    /// Attack range above the melee cap. Unknown range counts as melee.
    pub fn is_ranged(&self) -> bool {
        self.attack_range().is_some_and(|r| r > MELEE_RANGE_MAX)
    }

    pub fn is_melee(&self) -> bool {
        !self.is_ranged()
    }

    pub fn attributes_list(&self) -> Vec<String> {
        crate::core::sanitize::split_list(&self.attributes, &[','])
    }

    pub fn has_attribute(&self, attribute: &str) -> bool {
        self.attributes_list().iter().any(|a| a.eq_ignore_ascii_case(attribute.trim()))
    }
}
