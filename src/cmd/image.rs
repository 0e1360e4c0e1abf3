use super::print_json;
use crate::error::{Error, Result};
use crate::images::ImageStore;
use serde_json::json;
use std::fs;
use std::io::Write;
use std::path::Path;

pub fn upload_image<W: Write>(
    images: &ImageStore,
    path: &Path,
    name: Option<&str>,
    out: W,
) -> Result<()> {
    let name = match name {
        Some(name) => name.to_string(),
        None => path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidImage(format!("{:?} has no file name", path)))?,
    };
    let bytes = fs::read(path).map_err(Error::Io)?;
    let url = images.save_image(&bytes, &name)?;

    print_json(&json!({ "success": true, "path": url }), out)
}

pub fn search_images<W: Write>(images: &ImageStore, query: &str, out: W) -> Result<()> {
    let found = images.search_images(query)?;
    print_json(&json!({ "images": found }), out)
}
