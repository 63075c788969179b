// src/parsers/teams.rs
//! Team rosters, names, art and rename history.

use std::collections::HashSet;

use chrono::NaiveDate;

use crate::config::consts::{FILE_PATH_URL, MAX_LINEAGE_DEPTH};
use crate::core::sanitize::wiki_file_name;
use crate::data::{Team, TeamAssets, TeamLineage, TeamPlayer};
use crate::error::Result;
use crate::query::{CargoQuery, Where};
use crate::site::Site;
use crate::specs::teams::{TEAM_FIELDS, TENURE_FIELDS, transmute_team, transmute_tenure};

use super::{collect, fetch, fetch_records, non_blank};

/// Players in a playing role on `team`, today or on `date`. Staff and
/// players with no in-game role are left out.
pub fn get_active_players(
    site: &impl Site,
    team: &str,
    date: Option<NaiveDate>,
    limit: Option<u32>,
) -> Result<Vec<TeamPlayer>> {
    let team = non_blank("team", team)?;
    let mut w = Where::new().eq("T.Team", team)?;
    w = match date {
        Some(d) => w.le_date("T.DateJoin", d).null_or_gt_date("T.DateLeave", d),
        None => w.is_null("T.DateLeave"),
    };

    let q = CargoQuery::new("Tenures=T, RosterChanges=RC")
        .join_on("T.RosterChangeIdJoin=RC.RosterChangeId")
        .fields(TENURE_FIELDS)
        .filter(w)
        .group_by("T.Player")
        .limit(limit)?;
    let rows = fetch(site, &q)?;
    Ok(collect(&rows, transmute_tenure).into_iter().flatten().collect())
}

fn team_by(site: &impl Site, field: &'static str, value: &str) -> Result<Option<Team>> {
    let q = CargoQuery::new("Teams")
        .fields(TEAM_FIELDS)
        .filter(Where::new().eq(field, value)?)
        .limit(Some(1))?;
    Ok(fetch_records(site, &q, transmute_team)?.into_iter().next())
}

/// `"T1"` → `"T1"`, `"HLE"` → `"Hanwha Life Esports"`.
pub fn get_long_team_name(site: &impl Site, short: &str) -> Result<Option<String>> {
    let short = non_blank("team short name", short)?;
    Ok(team_by(site, "Teams.Short", short)?.map(|t| t.name))
}

/// Display names and logo URLs. `team` may be the full name or the short
/// one. URLs point at `Special:FilePath`, which redirects to the file.
pub fn get_team_assets(site: &impl Site, team: &str) -> Result<Option<TeamAssets>> {
    let team = non_blank("team", team)?;
    let found = match team_by(site, "Teams.Name", team)? {
        Some(t) => Some(t),
        None => team_by(site, "Teams.Short", team)?,
    };
    Ok(found.map(|t| {
        let logo = if t.image.is_empty() {
            wiki_file_name(&t.name, "logo square.png")
        } else {
            t.image.replace(' ', "_")
        };
        TeamAssets {
            logo_url: join!(FILE_PATH_URL, &logo),
            thumbnail_url: join!(FILE_PATH_URL, &wiki_file_name(&t.name, "logo std.png")),
            long_name: t.name,
            short_name: t.short,
        }
    }))
}

fn predecessors(site: &impl Site, name: &str) -> Result<Vec<Team>> {
    let q = CargoQuery::new("Teams")
        .fields(TEAM_FIELDS)
        .filter(Where::new().eq("Teams.RenamedTo", name)?)
        .order_by("Teams.Name");
    fetch_records(site, &q, transmute_team)
}

/// Every name the team went by, oldest first, following `RenamedTo` both
/// ways from `team`. Each direction walks at most `MAX_LINEAGE_DEPTH`
/// steps; a name seen twice ends the walk with `cycle` set.
pub fn get_team_lineage(site: &impl Site, team: &str) -> Result<Option<TeamLineage>> {
    let team = non_blank("team", team)?;
    let Some(start) = team_by(site, "Teams.Name", team)? else {
        return Ok(None);
    };

    let mut seen: HashSet<String> = HashSet::new();
    seen.insert(start.name.to_lowercase());
    let (mut cycle, mut truncated) = (false, false);

    // Newer names.
    let mut newer: Vec<String> = Vec::new();
    let mut next = start.renamed_to.clone();
    while !next.is_empty() {
        if newer.len() >= MAX_LINEAGE_DEPTH {
            truncated = true;
            break;
        }
        if !seen.insert(next.to_lowercase()) {
            logw!("lineage of {team}: rename loop at {next}");
            cycle = true;
            break;
        }
        newer.push(next.clone());
        next = team_by(site, "Teams.Name", &next)?
            .map(|t| t.renamed_to)
            .unwrap_or_default();
    }

    // Older names. Merges can leave several predecessors; the first
    // unseen one by name is followed.
    let mut older: Vec<String> = Vec::new();
    let mut current = start.name.clone();
    loop {
        let preds = predecessors(site, &current)?;
        if preds.is_empty() {
            break;
        }
        if older.len() >= MAX_LINEAGE_DEPTH {
            truncated = true;
            break;
        }
        let Some(prev) = preds.into_iter().find(|p| !seen.contains(&p.name.to_lowercase())) else {
            logw!("lineage of {team}: rename loop before {current}");
            cycle = true;
            break;
        };
        seen.insert(prev.name.to_lowercase());
        older.push(prev.name.clone());
        current = prev.name;
    }

    let mut names: Vec<String> = older.into_iter().rev().collect();
    names.push(start.name);
    names.extend(newer);
    logd!("lineage of {team}: {}", names.join(" → "));
    Ok(Some(TeamLineage { names, cycle, truncated }))
}
