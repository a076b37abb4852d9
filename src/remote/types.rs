//! Domain and wire types for the booklet API
//!
//! The wire structs mirror the JSON payloads exactly; the domain types are
//! what the rest of the crate works with.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Opaque identifier of a book on the remote service.
///
/// The API and the YAML config both spell identifiers either as strings or
/// as (large) integers. Both forms normalise to the same string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct BookId(String);

impl BookId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for BookId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for BookId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawId::deserialize(deserializer).map(|raw| Self(raw.into_string()))
    }
}

/// String-or-number identifier as it appears on the wire
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum RawId {
    Text(String),
    Unsigned(u64),
    Signed(i64),
}

impl RawId {
    pub(crate) fn into_string(self) -> String {
        match self {
            RawId::Text(s) => s,
            RawId::Unsigned(n) => n.to_string(),
            RawId::Signed(n) => n.to_string(),
        }
    }
}

fn deserialize_id<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    RawId::deserialize(deserializer).map(RawId::into_string)
}

fn deserialize_opt_id<'de, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Option<String>, D::Error> {
    Option::<RawId>::deserialize(deserializer).map(|raw| raw.map(RawId::into_string))
}

/// One entry of a book's table of contents
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SectionRef {
    /// Identifier used to fetch the document body
    #[serde(deserialize_with = "deserialize_id")]
    pub section_id: String,
    /// Internal identifier, names the asset directory when present
    #[serde(default, rename = "id", deserialize_with = "deserialize_opt_id")]
    pub internal_id: Option<String>,
    pub title: String,
}

impl SectionRef {
    /// Key of this section's asset directory under `img/`
    #[must_use]
    pub fn asset_key(&self) -> &str {
        self.internal_id.as_deref().unwrap_or(&self.section_id)
    }
}

/// Metadata of a published book, sections in remote order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookInfo {
    pub title: String,
    pub sections: Vec<SectionRef>,
}

/// Outcome of a book metadata lookup that reached the service
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookInfoResult {
    Available(BookInfo),
    /// The book exists but has no published content yet
    NotYetAvailable { reason: Option<String> },
}

// ---------------------------------------------------------------------------
// Wire payloads
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct BookInfoRequest<'a> {
    pub booklet_id: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SectionRequest<'a> {
    pub section_id: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub err_msg: Option<String>,
    /// Absent or `null` when the book has nothing published
    pub data: Option<T>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookInfoData {
    pub booklet: BookletPayload,
    #[serde(default)]
    pub sections: Vec<SectionRef>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BookletPayload {
    pub base_info: BaseInfo,
}

#[derive(Debug, Deserialize)]
pub(crate) struct BaseInfo {
    pub title: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionData {
    pub section: SectionPayload,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SectionPayload {
    pub markdown_show: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ShelfEntry {
    pub booklet_id: BookId,
}

impl From<BookInfoData> for BookInfo {
    fn from(data: BookInfoData) -> Self {
        Self {
            title: data.booklet.base_info.title,
            sections: data.sections,
        }
    }
}
