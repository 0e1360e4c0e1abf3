use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

pub struct ImageStore {
    dir: PathBuf,
    url_prefix: String,
    max_bytes: usize,
}

impl ImageStore {
    pub fn new<P: AsRef<Path>>(dir: P, url_prefix: &str, max_bytes: usize) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
            url_prefix: url_prefix.trim_end_matches('/').to_string(),
            max_bytes,
        }
    }

    /// Stores an uploaded image and returns the URL it is served under.
    pub fn save_image(&self, bytes: &[u8], file_name: &str) -> Result<String> {
        if file_name.is_empty() || file_name.contains(['/', '\\']) || file_name == ".." {
            return Err(Error::InvalidImage(format!("bad file name {:?}", file_name)));
        }

        let mime = mime_guess::from_path(file_name).first_or_octet_stream();
        if mime.type_() != mime_guess::mime::IMAGE {
            return Err(Error::InvalidImage(format!("{} is not an image", mime)));
        }

        if bytes.len() > self.max_bytes {
            return Err(Error::InvalidImage(format!(
                "{} bytes exceeds the {} byte limit",
                bytes.len(),
                self.max_bytes
            )));
        }

        fs::create_dir_all(&self.dir).map_err(Error::Io)?;
        let path = self.dir.join(file_name);
        fs::write(&path, bytes).map_err(Error::Io)?;
        log::info!("saved image {:?}", path);

        Ok(self.url_for(file_name))
    }

    /// URLs of every stored image whose name contains `query`, ignoring case.
    pub fn search_images(&self, query: &str) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(Error::Io(e)),
        };

        let query = query.to_lowercase();
        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(Error::Io)?;
            let name = entry.file_name().to_string_lossy().into_owned();
            if name.to_lowercase().contains(&query) {
                names.push(name);
            }
        }
        names.sort();

        Ok(names.iter().map(|name| self.url_for(name)).collect())
    }

    fn url_for(&self, file_name: &str) -> String {
        format!("{}/{}", self.url_prefix, file_name)
    }
}
