// tests/standings.rs
mod common;

use common::{FakeSite, row};
use leaguepedia_parser::{Error, get_standings, get_tournament_standings, get_top_standings};

#[test]
fn win_rate_and_totals_without_game_counts() {
    let site = FakeSite::rows(vec![row(&[
        ("Team", "Gen.G"),
        ("OverviewPage", "LCK/2024 Season/Spring Season"),
        ("Place", "1"),
        ("WinSeries", "16"),
        ("LossSeries", "2"),
    ])]);
    let s = get_tournament_standings(&site, "LCK/2024 Season/Spring Season", None).unwrap();
    assert_eq!(s.len(), 1);

    let rate = s[0].series_win_rate().unwrap();
    assert!((rate - 88.888).abs() < 0.01, "{rate}");
    assert_eq!(format!("{rate:.1}"), "88.9");
    assert_eq!(s[0].total_series_played(), Some(18));
    assert_eq!(s[0].game_win_rate(), None);
    assert_eq!(s[0].total_games_played(), Some(18));
}

#[test]
fn query_targets_the_page_and_orders_by_place() {
    let site = FakeSite::empty();
    get_standings(&site, Some("LEC/2024 Season/Summer Season"), Some("G2 Esports"), Some(10)).unwrap();

    let q = &site.queries()[0];
    assert_eq!(q.tables, "Standings");
    assert_eq!(q.order_by, Some("Standings.Place"));
    assert_eq!(q.limit, Some(10));
    assert_eq!(
        q.where_clause.as_deref(),
        Some("Standings.OverviewPage='LEC/2024 Season/Summer Season' AND Standings.Team='G2 Esports'")
    );
}

#[test]
fn rows_without_a_team_are_skipped() {
    let site = FakeSite::rows(vec![
        row(&[("Team", "T1"), ("Place", "2")]),
        row(&[("Place", "3"), ("WinSeries", "9")]),
        row(&[("Team", "KT Rolster"), ("Place", "0")]),
    ]);
    let s = get_tournament_standings(&site, "LCK 2024", None).unwrap();
    assert_eq!(s.iter().map(|x| x.team.as_str()).collect::<Vec<_>>(), ["T1", "KT Rolster"]);
    assert_eq!(s[1].place, None);
}

#[test]
fn top_standings_rank_by_series_rate() {
    let site = FakeSite::rows(vec![
        row(&[("Team", "C"), ("Place", "1")]),
        row(&[("Team", "A"), ("Place", "2"), ("WinSeries", "9"), ("LossSeries", "1")]),
        row(&[("Team", "B"), ("Place", "3"), ("WinSeries", "5"), ("LossSeries", "5")]),
    ]);
    let top = get_top_standings(&site, "Worlds 2024", 2).unwrap();
    assert_eq!(top.iter().map(|x| x.team.as_str()).collect::<Vec<_>>(), ["A", "B"]);

    assert!(matches!(get_top_standings(&site, "Worlds 2024", 0), Err(Error::InvalidArgument(_))));
}

#[test]
fn huge_counts_from_the_wiki_still_derive() {
    let site = FakeSite::rows(vec![row(&[("Team", "T1"), ("WinSeries", "4294967295"), ("LossSeries", "1")])]);
    let s = get_tournament_standings(&site, "LCK 2024", None).unwrap();
    assert!(s[0].series_win_rate().unwrap() > 99.99);
    assert_eq!(s[0].total_series_played(), Some(4_294_967_296));
}
