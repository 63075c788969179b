// src/data/team.rs

use serde::Serialize;

/// A `Teams` row.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Team {
    pub name: String,
    pub short: String,
    pub region: String,
    pub image: String,
    /// Successor name after a rebrand, empty if none.
    pub renamed_to: String,
    pub is_disbanded: bool,
}

/// Current roster member in a playing role.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamPlayer {
    pub name: String,
    pub role: String,
}

/// Display name and logo URLs. URLs are empty when the wiki has no image.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamAssets {
    pub long_name: String,
    pub short_name: String,
    pub logo_url: String,
    pub thumbnail_url: String,
}

/// Names a team has gone by, oldest first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TeamLineage {
    pub names: Vec<String>,
    /// The rename chain looped back on itself and the walk stopped there.
    pub cycle: bool,
    /// The walk hit the depth bound before reaching an end.
    pub truncated: bool,
}

impl TeamLineage {
    /// Newest known name.
    pub fn current(&self) -> Option<&str> {
        self.names.last().map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n.eq_ignore_ascii_case(name))
    }
}
