// src/core/sanitize.rs

use crate::config::consts::VALID_ROLES;

pub fn normalize_ws(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut prev_space = false;
    for ch in s.chars() {
        if ch.is_whitespace() {
            if !prev_space { out.push(' '); prev_space = true; }
        } else { out.push(ch); prev_space = false; }
    }
    out.trim().to_string()
}

/// Split on any of `delims`; items trimmed, blanks dropped, order kept.
pub fn split_list(s: &str, delims: &[char]) -> Vec<String> {
    s.split(|c: char| delims.contains(&c))
        .map(normalize_ws)
        .filter(|p| !p.is_empty())
        .collect()
}

/// Drop a trailing ` (Real Name)` disambiguation.
/// `"Doran (Choi Hyeon-joon)"` → `"Doran"`, `"Naak Nako"` stays as is.
pub fn clean_player_name(name: &str) -> String {
    match name.find(" (") {
        Some(i) => name[..i].trim().to_string(),
        None => name.trim().to_string(),
    }
}

/// First in-game role out of a `;`-separated list. `"Mid;Part-Owner"` → `Mid`.
pub fn primary_role(roles: &str) -> Option<&'static str> {
    roles
        .split(';')
        .map(str::trim)
        .find_map(|r| VALID_ROLES.iter().copied().find(|v| *v == r))
}

/// Wiki file names for team art: `File:T1logo square.png` style, spaces
/// turned into underscores for the `Special:FilePath` URL.
pub fn wiki_file_name(team: &str, suffix: &str) -> String {
    join!(&normalize_ws(team), suffix).replace(' ', "_")
}
