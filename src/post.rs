use crate::front_matter;
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Published,
    Draft,
}

impl Status {
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Published => "published",
            Status::Draft => "draft",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metadata {
    pub title: String,
    #[serde(
        serialize_with = "serialize_instant",
        deserialize_with = "deserialize_instant"
    )]
    pub publish_date: DateTime<Utc>,
    #[serde(default)]
    pub summary: String,
    pub status: Status,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub series: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl Metadata {
    pub fn is_published(&self) -> bool {
        self.status == Status::Published
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub metadata: Metadata,
    #[serde(default)]
    pub content: String,
    pub slug: String,
}

impl Post {
    pub const UNTITLED: &'static str = "Untitled";

    /// The blank draft handed to the editor before anything is saved.
    pub fn untitled() -> Self {
        Self {
            metadata: Metadata {
                title: Self::UNTITLED.to_string(),
                publish_date: Utc::now(),
                summary: String::new(),
                status: Status::Draft,
                series: None,
                image: None,
                featured: Some(false),
            },
            content: String::new(),
            slug: Self::UNTITLED.to_string(),
        }
    }
}

/// An ISO-8601 instant with milliseconds, e.g. `2021-05-31T16:00:00.000Z`.
pub fn iso_instant(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn serialize_instant<S: Serializer>(date: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&iso_instant(date))
}

fn deserialize_instant<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
    let value = String::deserialize(deserializer)?;

    match DateTime::parse_from_rfc3339(&value) {
        Ok(instant) => Ok(instant.with_timezone(&Utc)),
        Err(_) => front_matter::parse_publish_date(&value).map_err(serde::de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn metadata() -> Metadata {
        Metadata {
            title: "Hello".to_string(),
            publish_date: Utc.with_ymd_and_hms(2021, 5, 31, 16, 0, 0).unwrap(),
            summary: String::new(),
            status: Status::Published,
            series: None,
            image: None,
            featured: None,
        }
    }

    #[test]
    fn json_uses_camel_case_and_millisecond_instants() {
        let json = serde_json::to_string(&metadata()).unwrap();

        assert!(json.contains(r#""publishDate":"2021-05-31T16:00:00.000Z""#));
        assert!(json.contains(r#""status":"published""#));
        assert!(!json.contains("series"));
        assert!(!json.contains("featured"));
    }

    #[test]
    fn json_accepts_instants_with_offsets() {
        let json = r#"{"title":"Hello","publishDate":"2021-06-01T00:00:00+08:00","status":"draft"}"#;
        let parsed: Metadata = serde_json::from_str(json).unwrap();

        assert_eq!(parsed.publish_date, metadata().publish_date);
        assert_eq!(parsed.status, Status::Draft);
        assert_eq!(parsed.summary, "");
    }

    #[test]
    fn json_accepts_bare_dates() {
        let json = r#"{"title":"Hello","publishDate":"2021-06-01","status":"published"}"#;
        let parsed: Metadata = serde_json::from_str(json).unwrap();

        assert_eq!(parsed, metadata());
    }

    #[test]
    fn json_rejects_unknown_status() {
        let json = r#"{"title":"Hello","publishDate":"2021-06-01","status":"archived"}"#;
        assert!(serde_json::from_str::<Metadata>(json).is_err());
    }

    #[test]
    fn untitled_post_is_an_unfeatured_draft() {
        let post = Post::untitled();

        assert_eq!(post.slug, "Untitled");
        assert_eq!(post.metadata.title, "Untitled");
        assert!(!post.metadata.is_published());
        assert_eq!(post.metadata.featured, Some(false));
        assert!(post.content.is_empty());
    }
}
