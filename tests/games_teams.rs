// tests/games_teams.rs
mod common;

use common::{FakeSite, row};
use leaguepedia_parser::{
    Error, data::Side, get_active_players, get_game_details, get_long_team_name, get_regions,
    get_team_assets, get_tournament_mvp_candidates, get_tournaments, get_role_performance_comparison,
};

#[test]
fn regions_are_sorted_and_unique() {
    let site = FakeSite::rows(vec![
        row(&[("Region", "Korea")]),
        row(&[("Region", "Europe")]),
        row(&[("Region", "")]),
        row(&[("Region", "Korea")]),
    ]);
    assert_eq!(get_regions(&site).unwrap(), ["Europe", "Korea"]);
}

#[test]
fn tournament_filters_reach_the_query() {
    let site = FakeSite::empty();
    get_tournaments(&site, Some("Korea"), Some(2024), Some("Primary"), Some(true), None).unwrap();
    let q = &site.queries()[0];
    assert_eq!(q.join_on, Some("Tournaments.League = Leagues.League"));
    assert_eq!(
        q.where_clause.as_deref(),
        Some("Tournaments.Region='Korea' AND Tournaments.TournamentLevel='Primary' AND Tournaments.Year=2024 AND Tournaments.IsPlayoffs=1")
    );
}

#[test]
fn game_details_join_three_tables() {
    let site = FakeSite::new(|q| {
        Ok(match q.table_name() {
            "ScoreboardGames" => vec![row(&[
                ("GameId", "G1"),
                ("Team1", "T1"),
                ("Team2", "Gen.G"),
                ("Winner", "1"),
                ("Gamelength", "32:15"),
            ])],
            "PicksAndBansS7" => vec![row(&[
                ("Team1Ban1", "Azir"),
                ("Team2Ban1", "Ahri"),
                ("Team1Pick1", "Jinx"),
            ])],
            "ScoreboardPlayers" => vec![
                row(&[("Link", "Faker"), ("Kills", "3"), ("Deaths", "0"), ("Assists", "7"), ("Side", "1")]),
                row(&[("Link", "Chovy"), ("Kills", "1"), ("Deaths", "4"), ("Assists", "2"), ("Side", "2")]),
            ],
            _ => vec![],
        })
    });
    let d = get_game_details(&site, "G1").unwrap().unwrap();
    assert_eq!(d.game.winning_team(), Some("T1"));
    assert_eq!(d.players.len(), 2);
    assert_eq!(d.players[0].side, Some(Side::Blue));
    assert_eq!(d.players[0].kda_ratio(), Some(10.0));
    assert_eq!(d.picks_bans.len(), 3);
    assert!(d.picks_bans[0].is_ban);

    let none = FakeSite::empty();
    assert_eq!(get_game_details(&none, "missing").unwrap(), None);
    assert_eq!(none.queries().len(), 1);
}

#[test]
fn active_players_leave_out_staff() {
    let site = FakeSite::rows(vec![
        row(&[("Player", "Faker"), ("Roles", "Mid")]),
        row(&[("Player", "kkOma"), ("Roles", "Coach")]),
    ]);
    let players = get_active_players(&site, "T1", None, None).unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Faker");
    assert_eq!(site.last_where().as_deref(), Some("T.Team='T1' AND T.DateLeave IS NULL"));
}

#[test]
fn short_names_and_assets() {
    let site = FakeSite::new(|q| {
        let w = q.where_clause.clone().unwrap_or_default();
        Ok(if w == "Teams.Short='HLE'" {
            vec![row(&[("Name", "Hanwha Life Esports"), ("Short", "HLE")])]
        } else {
            vec![]
        })
    });
    assert_eq!(get_long_team_name(&site, "HLE").unwrap().as_deref(), Some("Hanwha Life Esports"));
    assert_eq!(get_long_team_name(&site, "XYZ").unwrap(), None);

    let a = get_team_assets(&site, "HLE").unwrap().unwrap();
    assert_eq!(a.long_name, "Hanwha Life Esports");
    assert!(a.logo_url.ends_with("Hanwha_Life_Esportslogo_square.png"), "{}", a.logo_url);
    assert!(a.thumbnail_url.ends_with("Hanwha_Life_Esportslogo_std.png"), "{}", a.thumbnail_url);
}

#[test]
fn mvp_candidates_need_enough_games() {
    let mut lines = Vec::new();
    for _ in 0..5 {
        lines.push(row(&[("Link", "Faker"), ("Team", "T1"), ("Kills", "4"), ("Deaths", "1"), ("Assists", "6"), ("PlayerWin", "Yes")]));
    }
    for _ in 0..2 {
        lines.push(row(&[("Link", "Sub"), ("Kills", "20"), ("Deaths", "0"), ("Assists", "20")]));
    }
    let site = FakeSite::rows(lines);
    let mvps = get_tournament_mvp_candidates(&site, "Worlds 2024", None, None).unwrap();
    assert_eq!(mvps.len(), 1);
    assert_eq!(mvps[0].player, "Faker");
    assert_eq!(mvps[0].games, 5);
    assert_eq!(mvps[0].kda, 10.0);
    assert_eq!(mvps[0].win_rate(), 100.0);

    assert!(matches!(
        get_tournament_mvp_candidates(&site, "Worlds 2024", None, Some(0)),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn role_comparison_checks_the_role() {
    let site = FakeSite::empty();
    assert!(matches!(
        get_role_performance_comparison(&site, "Worlds 2024", "Carry", None),
        Err(Error::InvalidArgument(_))
    ));
    get_role_performance_comparison(&site, "Worlds 2024", "mid", None).unwrap();
    assert!(site.last_where().unwrap().ends_with("ScoreboardPlayers.Role='Mid'"));
}

#[test]
fn role_comparison_limit_keeps_the_best_kda() {
    let site = FakeSite::rows(vec![
        row(&[("Link", "Newest"), ("Role", "Mid"), ("Kills", "1"), ("Deaths", "5"), ("Assists", "1")]),
        row(&[("Link", "Older"), ("Role", "Mid"), ("Kills", "10"), ("Deaths", "1"), ("Assists", "10")]),
    ]);
    let best = get_role_performance_comparison(&site, "Worlds 2024", "Mid", Some(1)).unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].link, "Older");
    assert_eq!(best[0].kda_ratio(), Some(20.0));
    assert_eq!(site.queries()[0].limit, None);
}
