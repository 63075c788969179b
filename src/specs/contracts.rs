// src/specs/contracts.rs

use crate::core::row::Row;
use crate::data::Contract;
use crate::error::Result;

use super::required;

pub const FIELDS: &[&str] = &[
    "Contracts.Player",
    "Contracts.Team",
    "Contracts.ContractEnd",
    "Contracts.ContractEndText",
    "Contracts.IsRemoval",
    "Contracts.NewsId",
];

pub fn transmute(row: &Row) -> Result<Contract> {
    Ok(Contract {
        player: required(row, "contract", &["Player"])?,
        team: row.text_or_empty(&["Team"]),
        contract_end: row.date(&["ContractEnd"]),
        contract_end_text: row.text_or_empty(&["ContractEndText"]),
        is_removal: row.flag(&["IsRemoval"]).unwrap_or(false),
        news_id: row.text_or_empty(&["NewsId"]),
    })
}
