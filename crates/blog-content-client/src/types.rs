//! Manifest records and assembled posts

use std::fmt;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::de::{self, IgnoredAny, MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One entry of the metadata manifest (`blogging/blogs.json`).
///
/// Keys are matched case-insensitively when reading (`id`, `Id` and `ID`
/// all work); unknown keys are ignored. Serialization uses camelCase.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BlogMetadata {
    pub id: Uuid,
    pub author: String,
    pub published_on: DateTime<Utc>,
    pub title: String,
    /// Path of the post body, relative to the content root
    pub location: String,
}

/// A post body together with the metadata it was resolved from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlogPost {
    pub metadata: BlogMetadata,
    pub body: String,
}

impl BlogPost {
    pub fn new(body: String, metadata: BlogMetadata) -> Self {
        Self { metadata, body }
    }
}

impl<'de> Deserialize<'de> for BlogMetadata {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(MetadataVisitor)
    }
}

struct MetadataVisitor;

impl<'de> Visitor<'de> for MetadataVisitor {
    type Value = BlogMetadata;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a blog metadata object")
    }

    fn visit_map<A>(self, mut map: A) -> Result<BlogMetadata, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut id = None;
        let mut author = None;
        let mut published_on = None;
        let mut title = None;
        let mut location = None;

        while let Some(key) = map.next_key::<String>()? {
            match key.to_ascii_lowercase().as_str() {
                "id" => fill::<_, A::Error>(&mut id, map.next_value()?, "id")?,
                "author" => fill::<_, A::Error>(&mut author, map.next_value()?, "author")?,
                "publishedon" => {
                    let raw: String = map.next_value()?;
                    let parsed = parse_published_on(&raw).ok_or_else(|| {
                        <A::Error as de::Error>::custom(format!("invalid publishedOn timestamp: {}", raw))
                    })?;
                    fill::<_, A::Error>(&mut published_on, parsed, "publishedOn")?
                }
                "title" => fill::<_, A::Error>(&mut title, map.next_value()?, "title")?,
                "location" => fill::<_, A::Error>(&mut location, map.next_value()?, "location")?,
                _ => {
                    map.next_value::<IgnoredAny>()?;
                }
            }
        }

        Ok(BlogMetadata {
            id: id.ok_or_else(|| <A::Error as de::Error>::missing_field("id"))?,
            author: author.ok_or_else(|| <A::Error as de::Error>::missing_field("author"))?,
            published_on: published_on.ok_or_else(|| <A::Error as de::Error>::missing_field("publishedOn"))?,
            title: title.ok_or_else(|| <A::Error as de::Error>::missing_field("title"))?,
            location: location.ok_or_else(|| <A::Error as de::Error>::missing_field("location"))?,
        })
    }
}

fn fill<T, E: de::Error>(slot: &mut Option<T>, value: T, field: &'static str) -> Result<(), E> {
    if slot.is_some() {
        return Err(E::duplicate_field(field));
    }
    *slot = Some(value);
    Ok(())
}

/// Accepts RFC 3339 timestamps as well as offset-less ones.
///
/// Offset-less values (`2024-03-01T09:30:00`) and bare dates are taken as UTC.
fn parse_published_on(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
