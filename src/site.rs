// src/site.rs
//! The one capability the parsers need from the outside world: run a
//! read-only Cargo query and hand back rows.
//!
//! [`crate::core::net::Leaguepedia`] is the real thing; tests plug in a fake.

use crate::core::row::Row;
use crate::error::SiteError;
use crate::query::CargoQuery;

pub trait Site {
    /// Rows in server order. An empty result is `Ok(vec![])`.
    /// Implementations honour `q.limit` and page as needed.
    fn query(&self, q: &CargoQuery) -> Result<Vec<Row>, SiteError>;
}

impl<S: Site + ?Sized> Site for &S {
    fn query(&self, q: &CargoQuery) -> Result<Vec<Row>, SiteError> {
        (**self).query(q)
    }
}

impl<S: Site + ?Sized> Site for Box<S> {
    fn query(&self, q: &CargoQuery) -> Result<Vec<Row>, SiteError> {
        (**self).query(q)
    }
}
