// src/data/mod.rs
//! Typed records built from Cargo rows.
//!
//! Records are snapshots: public fields, no setters, equality by value.
//! Derived numbers (rates, ratios, flags) are methods so they can never
//! disagree with the fields they come from. Methods that depend on the
//! current date come in pairs, `x_on(today)` and a `x()` that asks the clock.

mod champion;
mod contract;
mod game;
mod item;
mod player;
mod roster;
mod scoreboard;
mod standing;
mod team;

pub use champion::{ATTRIBUTES, BaseStats, Champion, canonical_attribute};
pub use contract::Contract;
pub use game::{Game, GameDetails, PickBan, Side, Tournament, Winner};
pub use item::{Item, ItemStats, ItemTier, StatFilter};
pub use player::{PlayerInfo, PlayerStatus};
pub use roster::{Direction, RosterChange, TournamentRosterEntry};
pub use scoreboard::{GRADE_TABLE, Grade, MvpCandidate, ScoreboardPlayer, grade_for_kda, kda};
pub use standing::Standing;
pub use team::{Team, TeamAssets, TeamLineage, TeamPlayer};
