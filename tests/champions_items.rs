// tests/champions_items.rs
mod common;

use common::{FakeSite, row};
use leaguepedia_parser::{
    Error, get_ad_items, get_champion_by_name, get_champions_by_attribute, get_item_by_name,
    get_items, get_melee_champions, get_ranged_champions,
};

fn jinx() -> leaguepedia_parser::core::row::Row {
    row(&[
        ("Name", "Jinx"),
        ("Title", "the Loose Cannon"),
        ("Attributes", "Marksman"),
        ("Resource", "Mana"),
        ("AttackRange", "525"),
    ])
}

#[test]
fn jinx_is_ranged() {
    let site = FakeSite::rows(vec![jinx()]);
    let c = get_champion_by_name(&site, "Jinx").unwrap().unwrap();
    assert!(c.is_ranged());
    assert!(!c.is_melee());
    assert_eq!(c.attack_range(), Some(525.0));
    assert!(c.has_attribute("marksman"));
}

#[test]
fn ranged_filter_drops_melee_rows() {
    let site = FakeSite::rows(vec![
        jinx(),
        row(&[("Name", "Darius"), ("AttackRange", "175")]),
        row(&[("Name", "Unknown")]),
    ]);
    let names: Vec<_> = get_ranged_champions(&site, None).unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Jinx"]);
}

#[test]
fn unknown_attribute_never_reaches_the_wiki() {
    let site = FakeSite::rows(vec![jinx()]);
    let err = get_champions_by_attribute(&site, "Sniper", None).unwrap_err();
    assert!(matches!(err, Error::InvalidArgument(_)));
    assert!(site.queries().is_empty());
}

#[test]
fn infinity_edge_provides_ad_not_ap() {
    let site = FakeSite::rows(vec![row(&[
        ("Name", "Infinity Edge"),
        ("Tier", "Legendary"),
        ("Recipe", "B. F. Sword, Pickaxe, Cloak of Agility"),
        ("TotalCost", "3400"),
        ("AD", "70"),
        ("Crit", "25"),
    ])]);
    let item = get_item_by_name(&site, "Infinity Edge").unwrap().unwrap();
    assert!(item.provides_ad());
    assert!(item.provides_crit());
    assert!(!item.provides_ap());
    assert!(!item.provides_armor());
    assert_eq!(item.total_cost(), Some(3400));
    assert_eq!(item.recipe.len(), 3);
}

#[test]
fn item_tier_is_checked_before_querying() {
    let site = FakeSite::empty();
    assert!(matches!(get_items(&site, Some("Mythic Plus"), None), Err(Error::InvalidArgument(_))));
    assert!(site.queries().is_empty());

    get_items(&site, Some("legendary"), Some(5)).unwrap();
    assert_eq!(site.last_where().as_deref(), Some("Items.Tier='Legendary'"));
}

fn roster_of_five() -> Vec<leaguepedia_parser::core::row::Row> {
    vec![
        row(&[("Name", "Ahri"), ("AttackRange", "550")]),
        row(&[("Name", "Darius"), ("AttackRange", "175")]),
        row(&[("Name", "Garen"), ("AttackRange", "175")]),
        row(&[("Name", "Jinx"), ("AttackRange", "525")]),
        row(&[("Name", "Xayah"), ("AttackRange", "525")]),
    ]
}

#[test]
fn range_limit_counts_matches_not_rows() {
    let site = FakeSite::rows(roster_of_five());
    let names: Vec<_> = get_ranged_champions(&site, Some(2)).unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Ahri", "Jinx"]);
    assert_eq!(site.queries()[0].limit, None);

    let names: Vec<_> = get_melee_champions(&site, Some(1)).unwrap().into_iter().map(|c| c.name).collect();
    assert_eq!(names, ["Darius"]);

    assert!(matches!(get_ranged_champions(&site, Some(0)), Err(Error::InvalidArgument(_))));
}

#[test]
fn stat_limit_counts_matches_not_rows() {
    let site = FakeSite::rows(vec![
        row(&[("Name", "Amplifying Tome"), ("AP", "20")]),
        row(&[("Name", "B. F. Sword"), ("AD", "40")]),
        row(&[("Name", "Cloth Armor"), ("Armor", "15")]),
        row(&[("Name", "Long Sword"), ("AD", "10")]),
    ]);
    let names: Vec<_> = get_ad_items(&site, Some(2)).unwrap().into_iter().map(|i| i.name).collect();
    assert_eq!(names, ["B. F. Sword", "Long Sword"]);
    assert_eq!(site.queries()[0].limit, None);
    assert!(matches!(get_ad_items(&site, Some(0)), Err(Error::InvalidArgument(_))));
}
