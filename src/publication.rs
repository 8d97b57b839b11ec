use anyhow::{anyhow, bail};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;

/// One bibliographic entry from the publications data file, coerced into shape on ingest.
#[derive(Debug, Clone, PartialEq)]
pub struct Publication {
    pub title: String,
    pub journal: String,
    pub year: Year,
    pub volume: Option<String>,
    pub pages: Option<String>,
    pub doi: Option<String>,
    /// Citation count as displayed. Never holds a zero.
    pub citations: Option<String>,
    pub category: String,
}

/// Publication year: the numeric value drives sorting, the label is what gets displayed and
/// grouped on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Year {
    pub value: i64,
    pub label: String,
}

impl Year {
    /// Coerce a JSON year. Strings are read up to the first non-digit, so `"2021a"` is 2021.
    pub fn from_json(v: &Value) -> Option<Year> {
        match v {
            Value::Number(n) => {
                let value = n
                    .as_i64()
                    .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64))?;
                // Whole floats display like integers, so 2020.0 groups with 2020.
                let label = match n.as_f64() {
                    Some(f) if n.is_f64() && f.fract() != 0.0 => n.to_string(),
                    _ => value.to_string(),
                };
                Some(Year { value, label })
            }
            Value::String(s) => Some(Year {
                value: leading_int(s)?,
                label: s.clone(),
            }),
            _ => None,
        }
    }
}

/// Leading-integer parse: optional whitespace and sign, then digits; anything after is ignored.
fn leading_int(s: &str) -> Option<i64> {
    static LEADING_INT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*([+-]?\d+)").unwrap());
    let caps = LEADING_INT_RE.captures(s)?;
    caps.get(1)?.as_str().parse().ok()
}

impl Publication {
    /// Build a record from one element of the data file.
    pub fn from_json(v: &Value) -> anyhow::Result<Publication> {
        let obj = v
            .as_object()
            .ok_or_else(|| anyhow!("expected an object, found {}", kind(v)))?;
        let field = |name: &str| obj.get(name).unwrap_or(&Value::Null);

        let year = Year::from_json(field("year"))
            .ok_or_else(|| anyhow!("year {} is not an integer", field("year")))?;

        Ok(Publication {
            title: text(field("title")),
            journal: text(field("journal")),
            year,
            volume: optional_text(field("volume")),
            pages: optional_text(field("pages")),
            doi: optional_text(field("doi")),
            citations: citation_count(field("citations")),
            category: text(field("category")),
        })
    }
}

/// Decode a whole data file: the root must be an array of publication objects.
pub fn ingest(body: &str) -> anyhow::Result<Vec<Publication>> {
    let root: Value = serde_json::from_str(body).map_err(|e| anyhow!("invalid JSON: {e}"))?;
    let Value::Array(items) = &root else {
        bail!("expected a list of publications, found {}", kind(&root));
    };
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            Publication::from_json(item).map_err(|e| anyhow!("publication #{i}: {e}"))
        })
        .collect()
}

fn kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn text(v: &Value) -> String {
    match v {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    }
}

fn optional_text(v: &Value) -> Option<String> {
    match v {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn citation_count(v: &Value) -> Option<String> {
    match v {
        Value::Number(n) if n.as_f64() == Some(0.0) => None,
        Value::String(s) if s == "0" => None,
        _ => optional_text(v),
    }
}
