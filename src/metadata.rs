//! Interprets the small YAML-like dialect used in article metadata headers.
//!
//! Only a flat subset is understood: `key: value` lines whose values are
//! strings, booleans, or lists of strings. Lists are written either as
//! `- item` lines under an empty key, or inline as `[a, b]` for the `tags`
//! field only. Anything else is skipped without error.

use indexmap::IndexMap;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static FIELD_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\w+):\s*(.*)$").expect("field line pattern is valid")
});

static LIST_ITEM_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*-\s+(.*)$").expect("list item pattern is valid"));

/// A single interpreted metadata value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum MetadataValue {
    String(String),
    Boolean(bool),
    List(Vec<String>),
}

impl MetadataValue {
    /// Non-empty strings and non-empty lists are truthy, as is `true`.
    pub fn is_truthy(&self) -> bool {
        match self {
            MetadataValue::String(value) => !value.is_empty(),
            MetadataValue::Boolean(value) => *value,
            MetadataValue::List(items) => !items.is_empty(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MetadataValue::String(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            MetadataValue::List(items) => Some(items),
            _ => None,
        }
    }

    /// Reads the value as an on/off flag. Quoted `"false"` is off; any
    /// other value is on when it is truthy.
    pub fn as_flag(&self) -> bool {
        match self {
            MetadataValue::String(value) if value.trim().eq_ignore_ascii_case("false") => false,
            other => other.is_truthy(),
        }
    }
}

/// Field name to value, in the order the fields first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MetadataMap(IndexMap<String, MetadataValue>);

impl MetadataMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores `value` under `key`. An existing key keeps its position and
    /// the previous value is returned.
    pub fn insert(&mut self, key: impl Into<String>, value: MetadataValue) -> Option<MetadataValue> {
        self.0.insert(key.into(), value)
    }

    pub fn get(&self, key: &str) -> Option<&MetadataValue> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

impl<K: Into<String>> FromIterator<(K, MetadataValue)> for MetadataMap {
    fn from_iter<I: IntoIterator<Item = (K, MetadataValue)>>(iter: I) -> Self {
        let mut map = MetadataMap::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

/// Interprets a metadata block. Never fails: lines that are not
/// `key: value` pairs, or list items belonging to one, are ignored.
pub fn interpret(block: &str) -> MetadataMap {
    let lines: Vec<&str> = block.lines().collect();
    let mut meta = MetadataMap::new();
    let mut cursor = 0;

    while cursor < lines.len() {
        let line = lines[cursor];
        cursor += 1;

        let Some(captures) = FIELD_LINE.captures(line) else {
            if !line.trim().is_empty() {
                log::debug!("Skipping metadata line that is not a field: {line:?}");
            }
            continue;
        };

        let key = &captures[1];
        let raw_value = captures[2].trim_end();

        let value = if raw_value.is_empty() {
            let items = collect_list_items(&lines[cursor..]);
            cursor += items.len();

            if items.is_empty() {
                MetadataValue::String(String::new())
            } else {
                MetadataValue::List(items)
            }
        } else {
            interpret_scalar(key, raw_value)
        };

        if meta.insert(key, value).is_some() {
            log::debug!("Metadata field '{key}' appears more than once; keeping the last value");
        }
    }

    meta
}

/// Takes the run of `- item` lines at the start of `lines`.
fn collect_list_items(lines: &[&str]) -> Vec<String> {
    lines
        .iter()
        .map_while(|line| LIST_ITEM_LINE.captures(line))
        .map(|captures| {
            captures[1]
                .trim_end()
                .trim_matches(|c: char| c == '"' || c == '\'')
                .to_string()
        })
        .collect()
}

fn interpret_scalar(key: &str, raw: &str) -> MetadataValue {
    if raw.eq_ignore_ascii_case("true") {
        return MetadataValue::Boolean(true);
    }
    if raw.eq_ignore_ascii_case("false") {
        return MetadataValue::Boolean(false);
    }

    if key == "tags" {
        if let Some(inner) = raw.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
            return MetadataValue::List(split_inline_list(inner));
        }
    }

    MetadataValue::String(strip_quotes(raw).to_string())
}

fn split_inline_list(inner: &str) -> Vec<String> {
    inner
        .split(',')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn strip_quotes(raw: &str) -> &str {
    ['"', '\'']
        .into_iter()
        .find_map(|quote| raw.strip_prefix(quote)?.strip_suffix(quote))
        .unwrap_or(raw)
}
