// src/core/mod.rs

pub mod net;
pub mod row;
pub mod sanitize;

pub use row::Row;
