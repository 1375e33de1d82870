//! Assembles the article payload sent to the DEV.to API.

use crate::error::PublishError;
use crate::metadata::MetadataMap;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// Canonical names of the optional headers a caller can suppress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderLabel {
    Cover,
    Tags,
    Description,
    CanonicalUrl,
    Series,
}

impl HeaderLabel {
    pub const ALL: [HeaderLabel; 5] = [
        HeaderLabel::Cover,
        HeaderLabel::Tags,
        HeaderLabel::Description,
        HeaderLabel::CanonicalUrl,
        HeaderLabel::Series,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            HeaderLabel::Cover => "Cover",
            HeaderLabel::Tags => "Tags",
            HeaderLabel::Description => "Description",
            HeaderLabel::CanonicalUrl => "CanonicalUrl",
            HeaderLabel::Series => "Series",
        }
    }
}

impl fmt::Display for HeaderLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HeaderLabel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        HeaderLabel::ALL
            .into_iter()
            .find(|label| label.as_str() == s)
            .ok_or_else(|| format!("Unknown header label '{s}'"))
    }
}

/// Headers to leave out of the payload even when the metadata sets them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalSet(HashSet<HeaderLabel>);

impl RemovalSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a comma-separated list such as `Cover,Tags`.
    ///
    /// Blank segments are dropped. Unknown labels are reported with a
    /// warning and ignored, since they could never match a header anyway.
    pub fn parse_csv(csv: &str) -> Self {
        let mut removals = RemovalSet::new();

        for segment in csv.split(',').map(str::trim).filter(|s| !s.is_empty()) {
            match segment.parse::<HeaderLabel>() {
                Ok(label) => {
                    removals.insert(label);
                }
                Err(message) => log::warn!(
                    "Warning: {message}. Expected one of: Cover, Tags, Description, CanonicalUrl, Series."
                ),
            }
        }

        removals
    }

    pub fn insert(&mut self, label: HeaderLabel) -> bool {
        self.0.insert(label)
    }

    pub fn contains(&self, label: HeaderLabel) -> bool {
        self.0.contains(&label)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<HeaderLabel> for RemovalSet {
    fn from_iter<I: IntoIterator<Item = HeaderLabel>>(iter: I) -> Self {
        RemovalSet(iter.into_iter().collect())
    }
}

/// Caller-controlled switches applied during assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PublishOptions {
    /// Publish immediately regardless of the `published` field.
    pub force_publish: bool,
    /// Send only title, published flag and body.
    pub minimal: bool,
    pub removals: RemovalSet,
}

/// The `article` object accepted by `POST /api/articles`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Article {
    pub title: String,
    pub published: bool,
    pub body_markdown: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub canonical_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
}

/// Request body wrapping a single [`Article`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PublishRequest {
    pub article: Article,
}

impl PublishRequest {
    /// Compact JSON, with non-ASCII characters written as-is.
    pub fn to_json(&self) -> Result<String, PublishError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Builds the publish request from interpreted metadata and the body.
///
/// Fails if `title` is missing, empty, or not text. Optional headers are
/// copied only when set to a non-empty value of the expected type, not
/// listed in `options.removals`, and `options.minimal` is off.
pub fn assemble(
    meta: &MetadataMap,
    body: &str,
    options: &PublishOptions,
) -> Result<PublishRequest, PublishError> {
    let title = meta
        .get("title")
        .and_then(|value| value.as_str())
        .filter(|title| !title.trim().is_empty())
        .ok_or_else(PublishError::missing_title)?;

    let published = options.force_publish
        || meta
            .get("published")
            .is_some_and(|value| value.as_flag());

    let mut article = Article {
        title: title.to_string(),
        published,
        body_markdown: body.to_string(),
        description: None,
        tags: None,
        cover_image: None,
        canonical_url: None,
        series: None,
    };

    if options.minimal {
        log::debug!("Minimal payload requested; skipping optional headers");
        return Ok(PublishRequest { article });
    }

    let removals = &options.removals;
    article.description = optional_text(meta, "description", HeaderLabel::Description, removals);
    article.tags = optional_list(meta, "tags", HeaderLabel::Tags, removals);
    article.cover_image = optional_text(meta, "cover_image", HeaderLabel::Cover, removals);
    article.canonical_url =
        optional_text(meta, "canonical_url", HeaderLabel::CanonicalUrl, removals);
    article.series = optional_text(meta, "series", HeaderLabel::Series, removals);

    Ok(PublishRequest { article })
}

fn optional_text(
    meta: &MetadataMap,
    key: &str,
    label: HeaderLabel,
    removals: &RemovalSet,
) -> Option<String> {
    let value = meta.get(key).filter(|value| value.is_truthy())?;

    if removals.contains(label) {
        log::debug!("Omitting '{key}': {label} header removed");
        return None;
    }

    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            log::debug!("Omitting '{key}': expected a text value, found {value:?}");
            None
        }
    }
}

fn optional_list(
    meta: &MetadataMap,
    key: &str,
    label: HeaderLabel,
    removals: &RemovalSet,
) -> Option<Vec<String>> {
    let value = meta.get(key).filter(|value| value.is_truthy())?;

    if removals.contains(label) {
        log::debug!("Omitting '{key}': {label} header removed");
        return None;
    }

    match value.as_list() {
        Some(items) => Some(items.to_vec()),
        None => {
            log::debug!("Omitting '{key}': expected a list, found {value:?}");
            None
        }
    }
}
