use crate::error::{Error, Result};
use std::{fs, io, path::Path, path::PathBuf};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    posts_dir: String,
    images_dir: String,
    pub image_url_prefix: String,
    pub max_image_bytes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            posts_dir: "data/posts".to_string(),
            images_dir: "public/images".to_string(),
            image_url_prefix: "/images".to_string(),
            max_image_bytes: 6 * 1024 * 1024,
        }
    }
}

impl Config {
    /// Reads `path`, falling back to the defaults when it does not exist.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Config> {
        let path = path.as_ref();
        let text = match fs::read_to_string(path) {
            Ok(text) => text,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("{:?} not found, using defaults", path);
                return Ok(Config::default());
            }
            Err(e) => return Err(Error::Io(e)),
        };
        toml::from_str(text.as_str()).map_err(Error::Deserialize)
    }

    pub fn posts_path<P: AsRef<Path>>(&self, cwd: P) -> PathBuf {
        cwd.as_ref().join(self.posts_dir.as_str())
    }

    pub fn images_path<P: AsRef<Path>>(&self, cwd: P) -> PathBuf {
        cwd.as_ref().join(self.images_dir.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = Config::load(dir.path().join("config.toml")).unwrap();

        assert_eq!(config.posts_path("/site"), PathBuf::from("/site/data/posts"));
        assert_eq!(config.images_path("/site"), PathBuf::from("/site/public/images"));
        assert_eq!(config.max_image_bytes, 6 * 1024 * 1024);
    }

    #[test]
    fn partial_file_overrides_some_fields() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "posts_dir = \"content\"\nmax_image_bytes = 1024\n").unwrap();

        let config = Config::load(&path).unwrap();

        assert_eq!(config.posts_path("/site"), PathBuf::from("/site/content"));
        assert_eq!(config.image_url_prefix, "/images");
        assert_eq!(config.max_image_bytes, 1024);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "posts_dir = [").unwrap();

        assert!(matches!(Config::load(&path), Err(Error::Deserialize(_))));
    }
}
