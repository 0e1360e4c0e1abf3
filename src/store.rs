use crate::error::{Error, Result};
use crate::front_matter;
use crate::post::{Metadata, Post};
use crate::post_cache::PostCache;
use glob::{glob, Pattern};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

const EXTENSION: &str = "mdx";

/// A published post's place in its series.
#[derive(Debug, PartialEq, Serialize)]
pub struct SeriesEntry {
    pub title: String,
    pub slug: String,
}

/// Posts kept as `<slug>.mdx` files in one directory, with a metadata cache
/// that is rebuilt by [`PostStore::list_posts`] and dropped after every save.
pub struct PostStore {
    dir: PathBuf,
    cache: Option<PostCache>,
}

impl PostStore {
    pub fn new<P: AsRef<Path>>(dir: P) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            cache: None,
        }
    }

    pub fn list_posts(&mut self) -> Result<Vec<Post>> {
        fs::read_dir(&self.dir).map_err(Error::Io)?;
        let dir = Pattern::escape(self.dir.to_string_lossy().as_ref());
        let pattern = format!("{}/*.{}", dir, EXTENSION);
        let files = glob(pattern.as_str()).map_err(Error::Pattern)?;

        let mut posts = Vec::new();
        let mut cache = PostCache::new();

        for file in files {
            let file = file.map_err(Error::Glob)?;
            let slug = match file.file_stem().and_then(|stem| stem.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };

            log::debug!("reading {:?}", file);
            let raw = fs::read_to_string(&file).map_err(Error::Io)?;
            let (metadata, content) = front_matter::parse(&raw)?;

            cache.add(slug.clone(), metadata.clone());
            posts.push(Post {
                metadata,
                content,
                slug,
            });
        }

        log::debug!(
            "cached metadata for {} posts at {}",
            cache.posts().len(),
            cache.last_updated()
        );
        self.cache = Some(cache);

        Ok(posts)
    }

    pub fn get_post(&self, slug: &str) -> Result<Post> {
        let path = self.path_for(slug)?;
        let raw = fs::read_to_string(&path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::NotFound(slug.to_string()),
            _ => Error::Io(e),
        })?;
        let (metadata, content) = front_matter::parse(&raw)?;

        Ok(Post {
            metadata,
            content,
            slug: slug.to_string(),
        })
    }

    /// Writes `post` to `<slug>.mdx`. When `original_slug` names a different
    /// existing file, that file is replaced, unless the new slug is taken.
    pub fn save_post(&mut self, post: &Post, original_slug: Option<&str>) -> Result<()> {
        let path = self.path_for(&post.slug)?;
        let mut stale = None;

        if let Some(original) = original_slug.filter(|original| *original != post.slug) {
            let original_path = self.path_for(original)?;
            if original_path.exists() {
                if path.exists() {
                    return Err(Error::AlreadyExists(post.slug.clone()));
                }
                stale = Some(original_path);
            }
        }

        let text = front_matter::serialize(post)?;
        let tmp = path.with_extension(format!("{}.tmp", EXTENSION));
        fs::write(&tmp, text).map_err(Error::Io)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                log::warn!("could not remove {:?}: {}", tmp, cleanup);
            }
            return Err(Error::Io(e));
        }
        log::info!("saved {:?}", path);

        if let Some(stale) = stale {
            fs::remove_file(&stale).map_err(Error::Io)?;
            log::info!("removed {:?}", stale);
        }

        self.clear_cache();
        Ok(())
    }

    pub fn clear_cache(&mut self) {
        if self.cache.take().is_some() {
            log::debug!("post cache cleared");
        }
    }

    pub fn cache(&self) -> Option<&PostCache> {
        self.cache.as_ref()
    }

    /// The cached metadata, re-reading the directory if the cache was dropped.
    pub fn metadata_index(&mut self) -> Result<&PostCache> {
        if self.cache().is_none() {
            self.list_posts()?;
        }

        Ok(self.cache.get_or_insert_with(PostCache::new))
    }

    /// Published posts of `series`, oldest first.
    pub fn series(&mut self, series: &str) -> Result<Vec<SeriesEntry>> {
        let mut posts: Vec<(Metadata, String)> = self
            .list_posts()?
            .into_iter()
            .filter(|p| p.metadata.is_published() && p.metadata.series.as_deref() == Some(series))
            .map(|p| (p.metadata, p.slug))
            .collect();
        posts.sort_by_key(|(metadata, _)| metadata.publish_date);

        Ok(posts
            .into_iter()
            .map(|(metadata, slug)| SeriesEntry {
                title: metadata.title,
                slug,
            })
            .collect())
    }

    fn path_for(&self, slug: &str) -> Result<PathBuf> {
        if slug.is_empty() || slug.contains(['/', '\\']) || slug.contains("..") {
            return Err(Error::InvalidSlug(slug.to_string()));
        }

        Ok(self.dir.join(format!("{}.{}", slug, EXTENSION)))
    }
}
