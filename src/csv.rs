// src/csv.rs
//! Records → delimited text.
//!
//! Records are serialized with serde first, so any `Serialize` type can be
//! exported without a per-type column list. Nested structs flatten into
//! dotted column names (`stats.attack_range`), lists join with `;`.

use std::io::{self, Write};

use serde::Serialize;
use serde_json::{Map, Value};

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str, sep: char) -> bool {
    field.contains(sep) || field.contains('"') || field.contains('\n') || field.contains('\r')
}

/// Write a single CSV/TSV row to any writer.
pub fn write_row<W: Write>(mut w: W, row: &[String], sep: char) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first { write!(w, "{}", sep)?; } else { first = false; }
        if needs_quotes(cell, sep) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Whole table as one string.
pub fn to_export_string(
    headers: &[String],
    rows: &[Vec<String>],
    include_headers: bool,
    sep: char,
) -> String {
    let mut buf: Vec<u8> = Vec::new();

    if include_headers && !headers.is_empty() {
        let _ = write_row(&mut buf, headers, sep);
    }
    for r in rows {
        let _ = write_row(&mut buf, r, sep);
    }

    match String::from_utf8(buf) {
        Ok(s) => s,
        Err(e) => String::from_utf8_lossy(&e.into_bytes()).into_owned(),
    }
}

/* ---------------- Records → table ---------------- */

fn cell(v: &Value) -> String {
    match v {
        Value::Null => s!(),
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(cell).collect::<Vec<_>>().join(";"),
        Value::Object(m) if m.is_empty() => s!(),
        Value::Object(_) => v.to_string(),
        other => other.to_string(),
    }
}

fn flatten(prefix: &str, obj: &Map<String, Value>, out: &mut Vec<(String, String)>) {
    for (k, v) in obj {
        let key = if prefix.is_empty() { k.clone() } else { format!("{prefix}.{k}") };
        match v {
            // Maps keyed by data (socials) stay one cell.
            Value::Object(inner) if !prefix.is_empty() || !looks_keyed_by_data(inner) => {
                flatten(&key, inner, out)
            }
            _ => out.push((key, cell(v))),
        }
    }
}

// BTreeMap<String, String> serializes like a struct; tell them apart by
// value shape (all strings).
fn looks_keyed_by_data(obj: &Map<String, Value>) -> bool {
    obj.values().all(Value::is_string)
}

/// Headers from the first record, one row per record. Fields are kept in
/// declaration order; a column missing from a later record is left blank.
pub fn records_to_table<T: Serialize>(records: &[T]) -> serde_json::Result<(Vec<String>, Vec<Vec<String>>)> {
    let mut headers: Vec<String> = Vec::new();
    let mut rows = Vec::with_capacity(records.len());

    for rec in records {
        let mut pairs = Vec::new();
        match serde_json::to_value(rec)? {
            Value::Object(obj) => flatten("", &obj, &mut pairs),
            scalar => pairs.push((s!("value"), cell(&scalar))),
        }
        if headers.is_empty() {
            headers = pairs.iter().map(|(k, _)| k.clone()).collect();
        }
        let row = headers
            .iter()
            .map(|h| {
                pairs
                    .iter()
                    .find(|(k, _)| k == h)
                    .map(|(_, v)| v.clone())
                    .unwrap_or_default()
            })
            .collect();
        rows.push(row);
    }
    Ok((headers, rows))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[derive(Serialize)]
    struct Inner {
        range: Option<f64>,
    }

    #[derive(Serialize)]
    struct Rec {
        name: String,
        tags: Vec<String>,
        stats: Inner,
        socials: BTreeMap<String, String>,
    }

    #[test]
    fn quoting_only_when_needed() {
        let mut buf = Vec::new();
        write_row(&mut buf, &[s!("a,b"), s!("say \"hi\""), s!("plain")], ',').unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "\"a,b\",\"say \"\"hi\"\"\",plain\n");
    }

    #[test]
    fn records_flatten_into_columns() {
        let recs = vec![Rec {
            name: s!("Jinx"),
            tags: vec![s!("Marksman"), s!("Ranged")],
            stats: Inner { range: Some(525.0) },
            socials: BTreeMap::from([(s!("Twitter"), s!("x"))]),
        }];
        let (headers, rows) = records_to_table(&recs).unwrap();
        assert_eq!(headers, vec!["name", "tags", "stats.range", "socials"]);
        assert_eq!(rows[0][1], "Marksman;Ranged");
        assert_eq!(rows[0][2], "525.0");
        assert_eq!(rows[0][3], r#"{"Twitter":"x"}"#);
    }

    #[test]
    fn headers_are_optional_in_output() {
        let headers = vec![s!("a"), s!("b")];
        let rows = vec![vec![s!("1"), s!("2")]];
        assert_eq!(to_export_string(&headers, &rows, true, '\t'), "a\tb\n1\t2\n");
        assert_eq!(to_export_string(&headers, &rows, false, '\t'), "1\t2\n");
    }
}
