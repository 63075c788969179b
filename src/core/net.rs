// src/core/net.rs
// Blocking HTTP client for the wiki's `action=cargoquery` endpoint.
// Pages by offset; never retries (that is the caller's call).

use std::time::Instant;

use reqwest::blocking::Client;
use serde_json::Value;

use crate::config::options::SiteOptions;
use crate::core::row::Row;
use crate::error::SiteError;
use crate::query::CargoQuery;
use crate::site::Site;

pub struct Leaguepedia {
    client: Client,
    opts: SiteOptions,
}

impl Leaguepedia {
    pub fn new(opts: SiteOptions) -> Result<Self, SiteError> {
        let client = Client::builder()
            .timeout(opts.timeout)
            .user_agent(opts.user_agent.clone())
            .build()?;
        Ok(Self { client, opts })
    }

    /// Defaults plus `.env` / environment overrides.
    pub fn from_env() -> Result<Self, SiteError> {
        Self::new(SiteOptions::from_env())
    }

    pub fn options(&self) -> &SiteOptions {
        &self.opts
    }

    fn fetch_page(&self, q: &CargoQuery, offset: usize, limit: u32) -> Result<Vec<Row>, SiteError> {
        let params = request_params(q, offset, limit);

        let resp = self
            .client
            .get(&self.opts.api_url)
            .query(&params)
            .send()
            .map_err(transport)?;

        let status = resp.status();
        if status.is_server_error() {
            return Err(SiteError::Unavailable(format!("HTTP {status}")));
        }
        if !status.is_success() {
            return Err(SiteError::Rejected {
                code: status.as_str().to_string(),
                info: s!(status.canonical_reason().unwrap_or("unexpected status")),
            });
        }

        let body = resp.text().map_err(transport)?;
        parse_response(&body)
    }
}

impl Site for Leaguepedia {
    fn query(&self, q: &CargoQuery) -> Result<Vec<Row>, SiteError> {
        let started = Instant::now();
        let rows = collect_pages(q.limit, self.opts.page_limit, |offset, want| self.fetch_page(q, offset, want))?;

        logd!(
            "cargoquery {} -> {} rows in {} ms",
            q.tables,
            rows.len(),
            started.elapsed().as_millis()
        );
        Ok(rows)
    }
}

/// Offset paging up to `limit` rows (all rows when `None`). Stops on a
/// short or empty page, and on a page identical to the one before it,
/// which is what a backend ignoring `offset` sends.
pub fn collect_pages<F>(limit: Option<u32>, page: u32, mut fetch: F) -> Result<Vec<Row>, SiteError>
where
    F: FnMut(usize, u32) -> Result<Vec<Row>, SiteError>,
{
    let page = page.max(1);
    let mut rows: Vec<Row> = Vec::new();
    let mut previous: Option<Vec<Row>> = None;

    loop {
        let want = match limit {
            Some(l) => l.saturating_sub(rows.len() as u32).min(page),
            None => page,
        };
        if want == 0 {
            break;
        }
        let batch = fetch(rows.len(), want)?;
        let got = batch.len();
        if got == 0 || previous.as_ref() == Some(&batch) {
            break;
        }
        rows.extend(batch.iter().cloned());
        previous = Some(batch);

        if (got as u32) < want {
            break;
        }
    }

    if let Some(l) = limit {
        rows.truncate(l as usize);
    }
    Ok(rows)
}

fn transport(e: reqwest::Error) -> SiteError {
    if e.is_timeout() { SiteError::Timeout } else { SiteError::Transport(e) }
}

/// Query-string parameters for one page.
pub fn request_params(q: &CargoQuery, offset: usize, limit: u32) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("action", s!("cargoquery")),
        ("format", s!("json")),
        ("tables", s!(q.tables)),
        ("fields", q.field_list()),
    ];
    if let Some(w) = &q.where_clause { params.push(("where", w.clone())); }
    if let Some(j) = q.join_on { params.push(("join_on", s!(j))); }
    if let Some(o) = q.order_by { params.push(("order_by", s!(o))); }
    if let Some(g) = q.group_by { params.push(("group_by", s!(g))); }
    params.push(("limit", limit.to_string()));
    params.push(("offset", offset.to_string()));
    params
}

/// `{"cargoquery":[{"title":{...}}, ...]}` → rows, `{"error":{...}}` → `Rejected`.
pub fn parse_response(body: &str) -> Result<Vec<Row>, SiteError> {
    let v: Value = serde_json::from_str(body)?;

    if let Some(err) = v.get("error") {
        let field = |k: &str| err.get(k).and_then(Value::as_str).unwrap_or("").to_string();
        return Err(SiteError::Rejected { code: field("code"), info: field("info") });
    }

    let items = v
        .get("cargoquery")
        .and_then(Value::as_array)
        .ok_or_else(|| SiteError::Decode(s!("missing `cargoquery` array")))?;

    items
        .iter()
        .map(|item| match item.get("title") {
            Some(Value::Object(m)) => Ok(Row::from(m.clone())),
            _ => Err(SiteError::Decode(s!("row without `title` object"))),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::Where;

    #[test]
    fn parses_rows_from_title_objects() {
        let body = r#"{"cargoquery":[
            {"title":{"Team":"T1","Place":"1"}},
            {"title":{"Team":"GenG","Place":"2"}}
        ]}"#;
        let rows = parse_response(body).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].text(&["Team"]).as_deref(), Some("GenG"));
    }

    #[test]
    fn empty_result_is_not_an_error() {
        assert!(parse_response(r#"{"cargoquery":[]}"#).unwrap().is_empty());
    }

    #[test]
    fn api_errors_become_rejections() {
        let body = r#"{"error":{"code":"MWException","info":"Error in where clause"}}"#;
        match parse_response(body) {
            Err(SiteError::Rejected { code, info }) => {
                assert_eq!(code, "MWException");
                assert_eq!(info, "Error in where clause");
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn garbage_is_a_decode_error() {
        assert!(matches!(parse_response("<html>"), Err(SiteError::Decode(_))));
        assert!(matches!(parse_response("{}"), Err(SiteError::Decode(_))));
    }

    fn numbered(from: usize, n: usize) -> Vec<Row> {
        (from..from + n).map(|i| Row::from_pairs(&[("N", i.to_string().as_str())])).collect()
    }

    #[test]
    fn paging_walks_offsets_until_a_short_page() {
        let mut offsets = Vec::new();
        let rows = collect_pages(None, 2, |offset, want| {
            offsets.push(offset);
            Ok(numbered(offset, if offset < 4 { want as usize } else { 1 }))
        })
        .unwrap();
        assert_eq!(rows.len(), 5);
        assert_eq!(offsets, [0, 2, 4]);
    }

    #[test]
    fn oversized_pages_are_cut_to_the_limit() {
        let rows = collect_pages(Some(3), 10, |offset, _| Ok(numbered(offset, 8))).unwrap();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].text(&["N"]).as_deref(), Some("2"));
    }

    #[test]
    fn a_backend_ignoring_offset_does_not_loop() {
        let mut calls = 0;
        let rows = collect_pages(None, 2, |_, _| {
            calls += 1;
            Ok(numbered(0, 2))
        })
        .unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(calls, 2);

        let rows = collect_pages(None, 2, |_, _| Ok(Vec::new())).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn params_carry_every_clause() {
        let q = CargoQuery::new("Tenures=T, RosterChanges=RC")
            .fields(&["T.Player", "RC.Roles"])
            .filter(Where::new().is_null("T.DateLeave"))
            .join_on("T.RosterChangeIdJoin=RC.RosterChangeId")
            .group_by("T.Player");
        let p = request_params(&q, 500, 500);
        let get = |k: &str| p.iter().find(|(n, _)| *n == k).map(|(_, v)| v.as_str());
        assert_eq!(get("fields"), Some("T.Player,RC.Roles"));
        assert_eq!(get("where"), Some("T.DateLeave IS NULL"));
        assert_eq!(get("group_by"), Some("T.Player"));
        assert_eq!(get("order_by"), None);
        assert_eq!(get("offset"), Some("500"));
    }
}
