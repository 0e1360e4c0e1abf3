use crate::error::{Error, Result};
use crate::post::{Metadata, Post, Status};
use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Shanghai;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref BLOCK: Regex =
        Regex::new(r"(?s)\A\s*---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap();
    static ref QUOTED: Regex = Regex::new(r#"^['"](.*)['"]$"#).unwrap();
}

/// Splits a post file into its metadata and its trimmed body. The block
/// opens on the first line and closes at the next line that is exactly `---`.
pub fn parse(raw: &str) -> Result<(Metadata, String)> {
    let captures = BLOCK.captures(raw).ok_or(Error::MissingFrontMatter)?;
    let block = captures.get(1).map_or("", |m| m.as_str());
    let content = BLOCK.replacen(raw, 1, "").trim().to_string();

    let mut title = None;
    let mut publish_date = None;
    let mut summary = None;
    let mut status = None;
    let mut series = None;
    let mut image = None;
    let mut featured = None;

    for line in block.trim().split('\n') {
        let (key, value) = line.split_once(": ").unwrap_or((line, ""));
        let value = unquote(value.trim());

        if key == "featured" {
            featured = Some(value == "true");
            continue;
        }

        match key.trim() {
            "title" => title = Some(value),
            "publishDate" => publish_date = Some(parse_publish_date(&value)?),
            "summary" => summary = Some(value),
            "status" => status = Some(parse_status(&value)?),
            "series" => series = Some(value),
            "image" => image = Some(value),
            other => log::debug!("ignoring front matter key {:?}", other),
        }
    }

    let metadata = Metadata {
        title: title.ok_or(Error::MissingField("title"))?,
        publish_date: publish_date.ok_or(Error::MissingField("publishDate"))?,
        summary: summary.unwrap_or_default(),
        status: status.ok_or(Error::MissingField("status"))?,
        series,
        image,
        featured,
    };

    Ok((metadata, content))
}

/// Renders a post back into the on-disk format read by [`parse`].
pub fn serialize(post: &Post) -> Result<String> {
    let metadata = &post.metadata;
    let mut lines = vec!["---".to_string()];

    lines.push(format!("title: {}", encode(&metadata.title)?));
    lines.push(format!("publishDate: {}", format_date(&metadata.publish_date)));
    lines.push(format!("summary: {}", encode(&metadata.summary)?));
    lines.push(format!("status: {}", encode(metadata.status.as_str())?));
    if let Some(series) = &metadata.series {
        lines.push(format!("series: {}", encode(series)?));
    }
    if let Some(image) = &metadata.image {
        lines.push(format!("image: {}", encode(image)?));
    }
    if let Some(featured) = metadata.featured {
        lines.push(format!("featured: {}", featured));
    }

    lines.push("---".to_string());
    lines.push(String::new());
    lines.push(post.content.clone());

    Ok(lines.join("\n"))
}

/// Reads a calendar date and pins it to midnight in the timezone posts were
/// written in at the time: UTC+8 through August 2022, UTC-6 afterwards.
pub fn parse_publish_date(value: &str) -> Result<DateTime<Utc>> {
    let invalid = || Error::InvalidDate(value.to_string());
    let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(value.trim()).map(|instant| instant.date_naive()))
        .map_err(|_| invalid())?;

    let hours = if date.year() < 2022 || (date.year() == 2022 && date.month() <= 8) {
        8
    } else {
        -6
    };
    let offset = FixedOffset::east_opt(hours * 3600).ok_or_else(invalid)?;
    let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(invalid)?;

    offset
        .from_local_datetime(&midnight)
        .single()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(invalid)
}

/// Short `yyyy-MM-dd` form of a publish date, as seen from Shanghai.
pub fn format_date(date: &DateTime<Utc>) -> String {
    date.with_timezone(&Shanghai).format("%Y-%m-%d").to_string()
}

fn parse_status(value: &str) -> Result<Status> {
    match value {
        "published" => Ok(Status::Published),
        "draft" => Ok(Status::Draft),
        other => Err(Error::InvalidStatus(other.to_string())),
    }
}

fn unquote(value: &str) -> String {
    if value.starts_with('"') {
        if let Ok(decoded) = serde_json::from_str::<String>(value) {
            return decoded;
        }
    }

    QUOTED.replace(value, "$1").into_owned()
}

fn encode(value: &str) -> Result<String> {
    serde_json::to_string(value).map_err(Error::Json)
}
