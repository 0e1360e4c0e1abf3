use crate::post::Metadata;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Metadata of every post keyed by slug. Never expires on its own; the store
/// drops it after each write.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PostCache {
    posts: BTreeMap<String, Metadata>,
    last_updated: DateTime<Utc>,
}

impl PostCache {
    pub fn new() -> Self {
        let posts = BTreeMap::new();
        Self {
            posts,
            last_updated: Utc::now(),
        }
    }

    pub fn add(&mut self, slug: String, metadata: Metadata) {
        self.posts.insert(slug, metadata);
    }

    pub fn posts(&self) -> &BTreeMap<String, Metadata> {
        &self.posts
    }

    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
