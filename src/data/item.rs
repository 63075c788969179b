// src/data/item.rs

use serde::Serialize;

use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum ItemTier {
    Starter,
    Basic,
    Epic,
    Legendary,
    Mythic,
    Boots,
    Consumable,
    Trinket,
    Masterwork,
}

impl ItemTier {
    pub const ALL: [ItemTier; 9] = [
        ItemTier::Starter, ItemTier::Basic, ItemTier::Epic,
        ItemTier::Legendary, ItemTier::Mythic, ItemTier::Boots,
        ItemTier::Consumable, ItemTier::Trinket, ItemTier::Masterwork,
    ];

    /// Spelling used by `Items.Tier`.
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemTier::Starter => "Starter",
            ItemTier::Basic => "Basic",
            ItemTier::Epic => "Epic",
            ItemTier::Legendary => "Legendary",
            ItemTier::Mythic => "Mythic",
            ItemTier::Boots => "Boots",
            ItemTier::Consumable => "Consumable",
            ItemTier::Trinket => "Trinket",
            ItemTier::Masterwork => "Masterwork",
        }
    }

    pub fn parse(s: &str) -> Result<Self> {
        let t = s.trim();
        Self::ALL
            .into_iter()
            .find(|tier| tier.as_str().eq_ignore_ascii_case(t))
            .ok_or_else(|| Error::invalid(format!("unknown item tier {t:?}")))
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ItemStats {
    pub ad: Option<f64>,
    pub attack_damage: Option<f64>,
    pub ap: Option<f64>,
    pub crit: Option<f64>,
    pub attack_speed: Option<f64>,
    pub life_steal: Option<f64>,
    pub lethality: Option<f64>,
    pub armor_pen: Option<f64>,
    pub magic_pen: Option<f64>,
    pub health: Option<f64>,
    pub bonus_hp: Option<f64>,
    pub hp_regen: Option<f64>,
    pub armor: Option<f64>,
    pub mr: Option<f64>,
    pub mana: Option<f64>,
    pub mana_regen: Option<f64>,
    pub ability_haste: Option<f64>,
    pub omnivamp: Option<f64>,
    pub movespeed_flat: Option<f64>,
    pub movespeed_percent: Option<f64>,
    pub tenacity: Option<f64>,
    pub on_hit: Option<f64>,
    pub gold_gen: Option<f64>,
}

fn positive(v: Option<f64>) -> bool {
    v.is_some_and(|x| x > 0.0)
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Item {
    pub name: String,
    /// As written upstream; see [`Item::tier_kind`].
    pub tier: String,
    pub riot_id: Option<i64>,
    pub recipe: Vec<String>,
    /// Combine cost.
    pub cost: Option<i64>,
    pub total_cost: Option<i64>,
    pub stats: ItemStats,
}

impl Item {
    pub fn tier_kind(&self) -> Option<ItemTier> {
        ItemTier::parse(&self.tier).ok()
    }

    /// Full price, or the combine cost for items without components.
    pub fn total_cost(&self) -> Option<i64> {
        self.total_cost.or(self.cost)
    }

    pub fn provides_ad(&self) -> bool {
        positive(self.stats.ad) || positive(self.stats.attack_damage)
    }

    pub fn provides_ap(&self) -> bool {
        positive(self.stats.ap)
    }

    pub fn provides_crit(&self) -> bool {
        positive(self.stats.crit)
    }

    pub fn provides_armor(&self) -> bool {
        positive(self.stats.armor)
    }

    pub fn provides_mr(&self) -> bool {
        positive(self.stats.mr)
    }

    pub fn provides_health(&self) -> bool {
        positive(self.stats.health) || positive(self.stats.bonus_hp)
    }

    pub fn provides_mana(&self) -> bool {
        positive(self.stats.mana)
    }
}

/// Per-stat constraint for [`crate::parsers::items::search_items_by_stat`].
/// `None` leaves the stat unconstrained.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StatFilter {
    pub ad: Option<bool>,
    pub ap: Option<bool>,
    pub crit: Option<bool>,
    pub armor: Option<bool>,
    pub mr: Option<bool>,
    pub health: Option<bool>,
    pub mana: Option<bool>,
}

impl StatFilter {
    pub fn matches(&self, item: &Item) -> bool {
        let checks = [
            (self.ad, item.provides_ad()),
            (self.ap, item.provides_ap()),
            (self.crit, item.provides_crit()),
            (self.armor, item.provides_armor()),
            (self.mr, item.provides_mr()),
            (self.health, item.provides_health()),
            (self.mana, item.provides_mana()),
        ];
        checks.iter().all(|(want, has)| want.is_none_or(|w| w == *has))
    }
}
