// src/core/row.rs
//! One raw Cargo row and tolerant typed getters over it.
//!
//! Every getter takes a prioritized list of candidate keys. The wiki has
//! renamed columns over the years (`Date` → `Date_Sort`, `Action` →
//! `Direction`) and the API itself sometimes answers `DateTime UTC` for a
//! requested `DateTime_UTC`, so each candidate is also tried with
//! underscores turned into spaces.
//!
//! Missing, `null` and blank values all read as absent.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde_json::{Map, Value};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Row {
    fields: Map<String, Value>,
}

impl From<Map<String, Value>> for Row {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl Row {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a row of string values; handy for fakes and fixtures.
    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        let fields = pairs
            .iter()
            .map(|(k, v)| (s!(*k), Value::String(s!(*v))))
            .collect();
        Self { fields }
    }

    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(s!(key), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// First present, non-blank value among `keys`.
    pub fn get(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter().find_map(|k| {
            self.lookup(k).or_else(|| {
                if k.contains('_') {
                    self.lookup(&k.replace('_', " "))
                } else {
                    None
                }
            })
        })
    }

    fn lookup(&self, key: &str) -> Option<&Value> {
        match self.fields.get(key)? {
            Value::Null => None,
            Value::String(s) if s.trim().is_empty() => None,
            v => Some(v),
        }
    }

    pub fn has(&self, keys: &[&str]) -> bool {
        self.get(keys).is_some()
    }

    pub fn text(&self, keys: &[&str]) -> Option<String> {
        match self.get(keys)? {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            Value::Bool(b) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Text or `""`.
    pub fn text_or_empty(&self, keys: &[&str]) -> String {
        self.text(keys).unwrap_or_default()
    }

    pub fn int(&self, keys: &[&str]) -> Option<i64> {
        match self.get(keys)? {
            Value::Number(n) => n.as_i64().or_else(|| n.as_f64().map(|f| f as i64)),
            Value::String(s) => parse_int(s),
            _ => None,
        }
    }

    /// Non-negative counts; negatives read as absent.
    pub fn uint(&self, keys: &[&str]) -> Option<u32> {
        self.int(keys).and_then(|v| u32::try_from(v).ok())
    }

    pub fn float(&self, keys: &[&str]) -> Option<f64> {
        match self.get(keys)? {
            Value::Number(n) => n.as_f64(),
            Value::String(s) => s.trim().replace(',', "").parse::<f64>().ok().filter(|f| f.is_finite()),
            _ => None,
        }
    }

    /// `Yes`/`No`, `1`/`0`, `true`/`false` (any case), or a JSON bool.
    pub fn flag(&self, keys: &[&str]) -> Option<bool> {
        match self.get(keys)? {
            Value::Bool(b) => Some(*b),
            Value::Number(n) => n.as_i64().map(|v| v != 0),
            Value::String(s) => parse_flag(s),
            _ => None,
        }
    }

    pub fn date(&self, keys: &[&str]) -> Option<NaiveDate> {
        parse_date(&self.text(keys)?)
    }

    pub fn datetime(&self, keys: &[&str]) -> Option<DateTime<Utc>> {
        parse_datetime(&self.text(keys)?)
    }

    /// Split on any of `delims`, trimming and dropping blanks.
    pub fn list(&self, keys: &[&str], delims: &[char]) -> Vec<String> {
        self.text(keys)
            .map(|t| crate::core::sanitize::split_list(&t, delims))
            .unwrap_or_default()
    }
}

pub fn parse_int(s: &str) -> Option<i64> {
    let t = s.trim().replace(',', "");
    t.parse::<i64>().ok().or_else(|| {
        t.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite() && f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

pub fn parse_flag(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "yes" | "y" | "1" | "true" => Some(true),
        "no" | "n" | "0" | "false" => Some(false),
        _ => None,
    }
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    let t = s.trim();
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .or_else(|| parse_datetime(t).map(|dt| dt.date_naive()))
}

/// ISO / RFC 3339 with or without zone, `YYYY-MM-DD HH:MM:SS`, or a bare
/// date (midnight). Zone-less values are taken as UTC.
pub fn parse_datetime(s: &str) -> Option<DateTime<Utc>> {
    let t = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(t) {
        return Some(dt.with_timezone(&Utc));
    }
    const NAIVE: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
    ];
    for fmt in NAIVE {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(t, fmt) {
            return Some(ndt.and_utc());
        }
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|ndt| ndt.and_utc())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn row(v: Value) -> Row {
        match v {
            Value::Object(m) => Row::from(m),
            _ => unreachable!(),
        }
    }

    #[test]
    fn candidate_keys_in_priority_order() {
        let r = Row::from_pairs(&[("Date", "2020-01-01"), ("Date_Sort", "2021-06-30")]);
        assert_eq!(r.date(&["Date_Sort", "Date"]), NaiveDate::from_ymd_opt(2021, 6, 30));
        assert_eq!(r.date(&["Date", "Date_Sort"]), NaiveDate::from_ymd_opt(2020, 1, 1));
    }

    #[test]
    fn underscore_keys_fall_back_to_spaced_keys() {
        let r = Row::from_pairs(&[("DateTime UTC", "2024-08-10 09:15:00")]);
        let dt = r.datetime(&["DateTime_UTC"]).unwrap();
        assert_eq!(dt.to_rfc3339(), "2024-08-10T09:15:00+00:00");
    }

    #[test]
    fn blank_and_null_read_as_absent() {
        let r = row(json!({"A": "", "B": null, "C": "  "}));
        assert_eq!(r.text(&["A", "B", "C"]), None);
        assert_eq!(r.int(&["A"]), None);
        assert!(!r.has(&["B"]));
    }

    #[test]
    fn numbers_from_strings_and_json() {
        let r = row(json!({"S": "3,400", "N": 70, "F": "0.5", "X": "abc", "W": "34.0"}));
        assert_eq!(r.int(&["S"]), Some(3400));
        assert_eq!(r.int(&["N"]), Some(70));
        assert_eq!(r.int(&["W"]), Some(34));
        assert_eq!(r.float(&["F"]), Some(0.5));
        assert_eq!(r.int(&["X"]), None);
    }

    #[test]
    fn flags_accept_the_usual_spellings() {
        let r = row(json!({"a": "Yes", "b": "no", "c": "1", "d": "0", "e": true, "f": "maybe"}));
        assert_eq!(r.flag(&["a"]), Some(true));
        assert_eq!(r.flag(&["b"]), Some(false));
        assert_eq!(r.flag(&["c"]), Some(true));
        assert_eq!(r.flag(&["d"]), Some(false));
        assert_eq!(r.flag(&["e"]), Some(true));
        assert_eq!(r.flag(&["f"]), None);
    }

    #[test]
    fn dates_from_every_known_shape() {
        let want = NaiveDate::from_ymd_opt(2013, 1, 1);
        for s in ["2013-01-01", "2013-01-01T00:00:00Z", "2013-01-01 00:00:00", "2013-01-01T00:00:00"] {
            assert_eq!(parse_date(s), want, "{s}");
        }
        assert_eq!(parse_date("01/01/2013"), None);
    }

    #[test]
    fn lists_split_and_trim() {
        let r = Row::from_pairs(&[("Roles", "Mid; Part-Owner;;"), ("Attrs", "Fighter,Assassin")]);
        assert_eq!(r.list(&["Roles"], &[';']), vec!["Mid", "Part-Owner"]);
        assert_eq!(r.list(&["Attrs"], &[',']), vec!["Fighter", "Assassin"]);
        assert!(r.list(&["Missing"], &[',']).is_empty());
    }
}
