use std::{fmt::Display, io};

use glob::{GlobError, PatternError};

#[derive(Debug)]
pub enum Error {
    AlreadyExists(String),
    Deserialize(toml::de::Error),
    Glob(GlobError),
    InvalidDate(String),
    InvalidImage(String),
    InvalidSlug(String),
    InvalidStatus(String),
    Io(io::Error),
    Json(serde_json::Error),
    Markdown(String),
    MissingField(&'static str),
    MissingFrontMatter,
    NotFound(String),
    Pattern(PatternError),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::AlreadyExists(slug) => write!(f, "file {}.mdx already exists", slug),
            Error::InvalidDate(value) => write!(f, "invalid date: {}", value),
            Error::InvalidImage(reason) => write!(f, "invalid image: {}", reason),
            Error::InvalidSlug(slug) => write!(f, "invalid slug: {:?}", slug),
            Error::InvalidStatus(value) => write!(f, "invalid status: {}", value),
            Error::Markdown(message) => write!(f, "markdown error: {}", message),
            Error::MissingField(field) => write!(f, "front matter is missing '{}'", field),
            Error::MissingFrontMatter => write!(f, "front matter delimiters not found"),
            Error::NotFound(slug) => write!(f, "post not found: {}", slug),
            _ => write!(f, "{:?}", self),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = std::result::Result<T, Error>;
