// src/specs/items.rs

use crate::core::row::Row;
use crate::data::{Item, ItemStats};
use crate::error::Result;

use super::required;

pub const FIELDS: &[&str] = &[
    "Items.Name",
    "Items.Tier",
    "Items.RiotId",
    "Items.Recipe",
    "Items.Cost",
    "Items.TotalCost",
    "Items.AD",
    "Items.LifeSteal",
    "Items.Health",
    "Items.HPRegen",
    "Items.Armor",
    "Items.MR",
    "Items.AttackDamage",
    "Items.Crit",
    "Items.AttackSpeed",
    "Items.ArmorPen",
    "Items.Lethality",
    "Items.Mana",
    "Items.ManaRegen",
    "Items.AP",
    "Items.AbilityHaste",
    "Items.Omnivamp",
    "Items.MPen",
    "Items.MovespeedFlat",
    "Items.MovespeedPercent",
    "Items.Tenacity",
    "Items.GoldGen",
    "Items.OnHit",
    "Items.BonusHP",
];

fn stats(row: &Row) -> ItemStats {
    ItemStats {
        ad: row.float(&["AD"]),
        attack_damage: row.float(&["AttackDamage"]),
        ap: row.float(&["AP"]),
        crit: row.float(&["Crit"]),
        attack_speed: row.float(&["AttackSpeed"]),
        life_steal: row.float(&["LifeSteal"]),
        lethality: row.float(&["Lethality"]),
        armor_pen: row.float(&["ArmorPen"]),
        magic_pen: row.float(&["MPen"]),
        health: row.float(&["Health"]),
        bonus_hp: row.float(&["BonusHP"]),
        hp_regen: row.float(&["HPRegen"]),
        armor: row.float(&["Armor"]),
        mr: row.float(&["MR"]),
        mana: row.float(&["Mana"]),
        mana_regen: row.float(&["ManaRegen"]),
        ability_haste: row.float(&["AbilityHaste"]),
        omnivamp: row.float(&["Omnivamp"]),
        movespeed_flat: row.float(&["MovespeedFlat"]),
        movespeed_percent: row.float(&["MovespeedPercent"]),
        tenacity: row.float(&["Tenacity"]),
        on_hit: row.float(&["OnHit"]),
        gold_gen: row.float(&["GoldGen"]),
    }
}

pub fn transmute(row: &Row) -> Result<Item> {
    Ok(Item {
        name: required(row, "item", &["Name"])?,
        tier: row.text_or_empty(&["Tier"]),
        riot_id: row.int(&["RiotId"]),
        recipe: row.list(&["Recipe"], &[',', ';']),
        cost: row.int(&["Cost"]),
        total_cost: row.int(&["TotalCost"]),
        stats: stats(row),
    })
}
