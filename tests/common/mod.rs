// tests/common/mod.rs
//
// Deterministic stand-in for the wiki: answers from a closure and keeps
// every query it was asked, so tests can check the issued where clauses.
#![allow(dead_code)]

use std::cell::RefCell;

use chrono::NaiveDate;
use leaguepedia_parser::{
    SiteError,
    core::row::Row,
    query::CargoQuery,
    site::Site,
};

type Responder = Box<dyn Fn(&CargoQuery) -> Result<Vec<Row>, SiteError>>;

pub struct FakeSite {
    respond: Responder,
    issued: RefCell<Vec<CargoQuery>>,
}

impl FakeSite {
    pub fn new(respond: impl Fn(&CargoQuery) -> Result<Vec<Row>, SiteError> + 'static) -> Self {
        Self { respond: Box::new(respond), issued: RefCell::new(Vec::new()) }
    }

    /// Same rows for every query.
    pub fn rows(rows: Vec<Row>) -> Self {
        Self::new(move |_| Ok(rows.clone()))
    }

    pub fn empty() -> Self {
        Self::rows(Vec::new())
    }

    pub fn failing(make: fn() -> SiteError) -> Self {
        Self::new(move |_| Err(make()))
    }

    pub fn queries(&self) -> Vec<CargoQuery> {
        self.issued.borrow().clone()
    }

    pub fn last_where(&self) -> Option<String> {
        self.issued.borrow().last().and_then(|q| q.where_clause.clone())
    }
}

impl Site for FakeSite {
    fn query(&self, q: &CargoQuery) -> Result<Vec<Row>, SiteError> {
        self.issued.borrow_mut().push(q.clone());
        let mut rows = (self.respond)(q)?;
        if let Some(limit) = q.limit {
            rows.truncate(limit as usize);
        }
        Ok(rows)
    }
}

pub fn row(pairs: &[(&str, &str)]) -> Row {
    Row::from_pairs(pairs)
}

pub fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}
