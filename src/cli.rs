// src/cli.rs
//! `lpq` argument handling and dispatch.
//!
//! Arguments are parsed by hand: one `--page` picks the table, the other
//! flags narrow it. Whatever comes back is serialized with serde and written
//! as CSV, TSV or JSON.

use std::error::Error;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::options::{ExportFormat, ExportOptions};
use crate::csv::{records_to_table, to_export_string};
use crate::file::write_export;
use crate::parsers::{
    champions, contracts, games, items, players, roster_changes, scoreboard, standings,
};
use crate::site::Site;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageKind {
    Standings,
    Champions,
    Items,
    RosterChanges,
    Contracts,
    Scoreboard,
    Tournaments,
    Player,
}

impl PageKind {
    fn parse(s: &str) -> Option<Self> {
        Some(match s.to_ascii_lowercase().as_str() {
            "standings" => PageKind::Standings,
            "champions" => PageKind::Champions,
            "items" => PageKind::Items,
            "roster-changes" | "rosterchanges" => PageKind::RosterChanges,
            "contracts" => PageKind::Contracts,
            "scoreboard" => PageKind::Scoreboard,
            "tournaments" => PageKind::Tournaments,
            "player" => PageKind::Player,
            _ => return None,
        })
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Params {
    pub page: PageKind,
    pub team: Option<String>,
    pub tournament: Option<String>,
    pub player: Option<String>,
    pub region: Option<String>,
    pub year: Option<i32>,
    pub tier: Option<String>,
    pub attribute: Option<String>,
    pub days: Option<u32>,
    pub limit: Option<u32>,
    pub export: ExportOptions,
}

impl Params {
    pub fn new(page: PageKind) -> Self {
        Self {
            page,
            team: None,
            tournament: None,
            player: None,
            region: None,
            year: None,
            tier: None,
            attribute: None,
            days: None,
            limit: None,
            export: ExportOptions::default(),
        }
    }
}

/// Parse everything after the program name. `-h` prints help and exits.
pub fn parse_args<I>(args: I) -> Result<Params, Box<dyn Error>>
where
    I: IntoIterator<Item = String>,
{
    let mut params = Params::new(PageKind::Standings);
    let mut page_seen = false;
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--page" => {
                let v = value("--page")?;
                params.page = PageKind::parse(&v).ok_or_else(|| format!("Unknown page: {v}"))?;
                page_seen = true;
            }
            "-t" | "--team" => params.team = Some(value("--team")?),
            "--tournament" => params.tournament = Some(value("--tournament")?),
            "-p" | "--player" => params.player = Some(value("--player")?),
            "--region" => params.region = Some(value("--region")?),
            "--year" => params.year = Some(value("--year")?.parse()?),
            "--tier" => params.tier = Some(value("--tier")?),
            "--attribute" => params.attribute = Some(value("--attribute")?),
            "--days" => params.days = Some(value("--days")?.parse()?),
            "-n" | "--limit" => params.limit = Some(value("--limit")?.parse()?),
            "-o" | "--out" => params.export.out = Some(PathBuf::from(value("--out")?)),
            "--format" => {
                let v = value("--format")?;
                params.export.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => ExportFormat::Csv,
                    "tsv" => ExportFormat::Tsv,
                    "json" => ExportFormat::Json,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--include-headers" => params.export.include_headers = true,
            "--no-headers" => params.export.include_headers = false,
            "-h" | "--help" => {
                eprintln!("{}", include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if !page_seen {
        return Err("Missing --page (see --help)".into());
    }
    Ok(params)
}

fn required<'a>(v: &'a Option<String>, flag: &str, page: &str) -> Result<&'a str, Box<dyn Error>> {
    v.as_deref().ok_or_else(|| format!("--page {page} needs {flag}").into())
}

/// Serialize `records` per `export`.
pub fn render<T: Serialize>(records: &[T], export: &ExportOptions) -> Result<String, Box<dyn Error>> {
    match export.format.delim() {
        None => Ok(serde_json::to_string_pretty(records)? + "\n"),
        Some(sep) => {
            let (headers, rows) = records_to_table(records)?;
            Ok(to_export_string(&headers, &rows, export.include_headers, sep))
        }
    }
}

fn emit<T: Serialize>(records: &[T], export: &ExportOptions) -> Result<Option<PathBuf>, Box<dyn Error>> {
    logf!("{} record(s)", records.len());
    let text = render(records, export)?;
    Ok(write_export(export, &text)?)
}

/// Run one page against `site`. Returns the written file, if any.
pub fn run(params: &Params, site: &impl Site) -> Result<Option<PathBuf>, Box<dyn Error>> {
    let p = params;
    let team = p.team.as_deref();
    let tournament = p.tournament.as_deref();
    let player = p.player.as_deref();

    match p.page {
        PageKind::Standings => {
            let rows = standings::get_standings(site, tournament, team, p.limit)?;
            emit(&rows, &p.export)
        }
        PageKind::Champions => {
            let rows = champions::get_champions(site, None, p.attribute.as_deref(), p.limit)?;
            emit(&rows, &p.export)
        }
        PageKind::Items => {
            let rows = items::get_items(site, p.tier.as_deref(), p.limit)?;
            emit(&rows, &p.export)
        }
        PageKind::RosterChanges => {
            let rows = match p.days {
                Some(days) if player.is_none() && tournament.is_none() => {
                    roster_changes::get_recent_roster_changes(site, days, team, p.limit)?
                }
                _ => {
                    let filter = roster_changes::RosterChangeFilter {
                        team,
                        player,
                        tournament,
                        limit: p.limit,
                        ..Default::default()
                    };
                    roster_changes::get_roster_changes(site, &filter)?
                }
            };
            emit(&rows, &p.export)
        }
        PageKind::Contracts => {
            let rows = match p.days {
                Some(days) => contracts::get_expiring_contracts(site, days, team, p.limit)?,
                None => {
                    let filter = contracts::ContractFilter { player, team, limit: p.limit, ..Default::default() };
                    contracts::get_contracts(site, &filter)?
                }
            };
            emit(&rows, &p.export)
        }
        PageKind::Scoreboard => {
            let filter = scoreboard::ScoreboardFilter { tournament, player, team, limit: p.limit, ..Default::default() };
            let rows = scoreboard::get_scoreboard_players(site, &filter)?;
            emit(&rows, &p.export)
        }
        PageKind::Tournaments => {
            let rows = games::get_tournaments(site, p.region.as_deref(), p.year, None, None, p.limit)?;
            emit(&rows, &p.export)
        }
        PageKind::Player => {
            let name = required(&p.player, "--player", "player")?;
            let found: Vec<_> = players::get_player_by_name(site, name)?.into_iter().collect();
            if found.is_empty() {
                logw!("no player named {name}");
            }
            emit(&found, &p.export)
        }
    }
}
