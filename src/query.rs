// src/query.rs
//! Cargo query construction.
//!
//! Everything a caller hands us ends up inside a `where` string that the
//! wiki evaluates as SQL, so values only ever reach it through
//! [`escape_value`] / [`escape_like`]. Field and table names are
//! `&'static str` on purpose: they come from `specs::*`, never from callers.
//!
//! Nothing here talks to the network. A [`CargoQuery`] is a plain value
//! handed to [`crate::site::Site::query`].

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// Escape a value for use inside a single-quoted literal.
///
/// `'` is doubled, `\` and `"` are backslash-escaped. Control characters
/// cannot be represented safely and are rejected.
pub fn escape_value(value: &str) -> Result<String> {
    reject_control(value)?;
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    Ok(out)
}

/// Like [`escape_value`], plus the `LIKE` wildcards `%` and `_`.
pub fn escape_like(value: &str) -> Result<String> {
    reject_control(value)?;
    let mut out = String::with_capacity(value.len() + 4);
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("''"),
            '"' => out.push_str("\\\""),
            '%' => out.push_str("\\%"),
            '_' => out.push_str("\\_"),
            c => out.push(c),
        }
    }
    Ok(out)
}

fn reject_control(value: &str) -> Result<()> {
    match value.chars().find(|c| c.is_control()) {
        Some(c) => Err(Error::invalid(format!(
            "value contains control character U+{:04X}",
            c as u32
        ))),
        None => Ok(()),
    }
}

/// `'value'`, escaped.
pub fn quote(value: &str) -> Result<String> {
    Ok(join!("'", &escape_value(value)?, "'"))
}

/// Conjunction of conditions. Empty → no `where` at all.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Where {
    parts: Vec<String>,
}

impl Where {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn eq(mut self, field: &'static str, value: &str) -> Result<Self> {
        self.parts.push(format!("{field}={}", quote(value)?));
        Ok(self)
    }

    /// `eq` only when a value is given.
    pub fn eq_opt(self, field: &'static str, value: Option<&str>) -> Result<Self> {
        match value {
            Some(v) => self.eq(field, v),
            None => Ok(self),
        }
    }

    pub fn eq_num(mut self, field: &'static str, value: i64) -> Self {
        self.parts.push(format!("{field}={value}"));
        self
    }

    /// Substring match: `field LIKE '%value%'`.
    pub fn like(mut self, field: &'static str, value: &str) -> Result<Self> {
        self.parts.push(format!("{field} LIKE '%{}%'", escape_like(value)?));
        Ok(self)
    }

    pub fn ge(mut self, field: &'static str, value: &str) -> Result<Self> {
        self.parts.push(format!("{field} >= {}", quote(value)?));
        Ok(self)
    }

    pub fn le(mut self, field: &'static str, value: &str) -> Result<Self> {
        self.parts.push(format!("{field} <= {}", quote(value)?));
        Ok(self)
    }

    pub fn ge_date(mut self, field: &'static str, date: NaiveDate) -> Self {
        self.parts.push(format!("{field} >= '{}'", date.format("%Y-%m-%d")));
        self
    }

    pub fn le_date(mut self, field: &'static str, date: NaiveDate) -> Self {
        self.parts.push(format!("{field} <= '{}'", date.format("%Y-%m-%d")));
        self
    }

    /// Open-ended or reaching at least `date`.
    pub fn null_or_ge_date(mut self, field: &'static str, date: NaiveDate) -> Self {
        self.parts.push(format!("({field} IS NULL OR {field} >= '{}')", date.format("%Y-%m-%d")));
        self
    }

    /// Open-ended or reaching past `date`.
    pub fn null_or_gt_date(mut self, field: &'static str, date: NaiveDate) -> Self {
        self.parts.push(format!("({field} IS NULL OR {field} > '{}')", date.format("%Y-%m-%d")));
        self
    }

    pub fn is_null(mut self, field: &'static str) -> Self {
        self.parts.push(format!("{field} IS NULL"));
        self
    }

    /// `(field IS NULL OR field='value')`.
    pub fn null_or(mut self, field: &'static str, value: &str) -> Result<Self> {
        self.parts.push(format!("({field} IS NULL OR {field}={})", quote(value)?));
        Ok(self)
    }

    /// Trusted, constant clause. Disjunctions get parenthesised so they
    /// cannot swallow the neighbouring `AND`s.
    pub fn raw(mut self, clause: &'static str) -> Self {
        if clause.contains(" OR ") {
            self.parts.push(join!("(", clause, ")"));
        } else {
            self.parts.push(s!(clause));
        }
        self
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    pub fn build(&self) -> Option<String> {
        if self.parts.is_empty() {
            None
        } else {
            Some(self.parts.join(" AND "))
        }
    }
}

/// One `action=cargoquery` request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CargoQuery {
    pub tables: &'static str,
    pub fields: Vec<&'static str>,
    pub where_clause: Option<String>,
    pub join_on: Option<&'static str>,
    pub order_by: Option<&'static str>,
    pub group_by: Option<&'static str>,
    pub limit: Option<u32>,
}

impl CargoQuery {
    pub fn new(tables: &'static str) -> Self {
        Self {
            tables,
            fields: Vec::new(),
            where_clause: None,
            join_on: None,
            order_by: None,
            group_by: None,
            limit: None,
        }
    }

    pub fn fields(mut self, fields: &[&'static str]) -> Self {
        self.fields.extend_from_slice(fields);
        self
    }

    pub fn filter(mut self, w: Where) -> Self {
        self.where_clause = w.build();
        self
    }

    pub fn join_on(mut self, join: &'static str) -> Self {
        self.join_on = Some(join);
        self
    }

    pub fn order_by(mut self, order: &'static str) -> Self {
        self.order_by = Some(order);
        self
    }

    pub fn group_by(mut self, group: &'static str) -> Self {
        self.group_by = Some(group);
        self
    }

    /// `None` means "everything". Zero is never a sensible bound.
    pub fn limit(mut self, limit: Option<u32>) -> Result<Self> {
        if limit == Some(0) {
            return Err(Error::invalid("limit must be positive"));
        }
        self.limit = limit;
        Ok(self)
    }

    /// Comma-joined field list as sent on the wire.
    pub fn field_list(&self) -> String {
        self.fields.join(",")
    }

    /// First table of the `tables` list, without alias. Used in errors and logs.
    pub fn table_name(&self) -> &'static str {
        let first = self.tables.split(',').next().unwrap_or(self.tables).trim();
        first.split('=').next().unwrap_or(first).trim()
    }
}
