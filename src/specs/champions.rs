// src/specs/champions.rs

use crate::core::row::Row;
use crate::data::{BaseStats, Champion};
use crate::error::Result;

use super::required;

pub const FIELDS: &[&str] = &[
    "Champions.Name",
    "Champions.Title",
    "Champions.ReleaseDate",
    "Champions.BE",
    "Champions.RP",
    "Champions.Attributes",
    "Champions.Resource",
    "Champions.RealName",
    "Champions.Health",
    "Champions.HPLevel",
    "Champions.HPRegen",
    "Champions.Mana",
    "Champions.ManaLevel",
    "Champions.ManaRegen",
    "Champions.Energy",
    "Champions.Movespeed",
    "Champions.AttackDamage",
    "Champions.ADLevel",
    "Champions.AttackSpeed",
    "Champions.ASLevel",
    "Champions.AttackRange",
    "Champions.Armor",
    "Champions.ArmorLevel",
    "Champions.MagicResist",
    "Champions.MagicResistLevel",
    "Champions.KeyInteger",
];

fn stats(row: &Row) -> BaseStats {
    BaseStats {
        health: row.float(&["Health"]),
        hp_level: row.float(&["HPLevel"]),
        hp_regen: row.float(&["HPRegen"]),
        mana: row.float(&["Mana"]),
        mana_level: row.float(&["ManaLevel"]),
        mana_regen: row.float(&["ManaRegen"]),
        energy: row.float(&["Energy"]),
        movespeed: row.float(&["Movespeed"]),
        attack_damage: row.float(&["AttackDamage"]),
        ad_level: row.float(&["ADLevel"]),
        attack_speed: row.float(&["AttackSpeed"]),
        as_level: row.float(&["ASLevel"]),
        attack_range: row.float(&["AttackRange"]),
        armor: row.float(&["Armor"]),
        armor_level: row.float(&["ArmorLevel"]),
        magic_resist: row.float(&["MagicResist"]),
        magic_resist_level: row.float(&["MagicResistLevel"]),
    }
}

pub fn transmute(row: &Row) -> Result<Champion> {
    Ok(Champion {
        name: required(row, "champion", &["Name"])?,
        title: row.text_or_empty(&["Title"]),
        real_name: row.text_or_empty(&["RealName"]),
        release_date: row.date(&["ReleaseDate"]),
        be: row.int(&["BE"]),
        rp: row.int(&["RP"]),
        attributes: row.text_or_empty(&["Attributes"]),
        resource: row.text_or_empty(&["Resource"]),
        key_integer: row.int(&["KeyInteger"]),
        stats: stats(row),
    })
}
