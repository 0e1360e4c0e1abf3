mod image;
mod posts;
mod render;

pub use image::{search_images, upload_image};
pub use posts::{list, save, series, show};
pub use render::render;

use crate::error::{Error, Result};
use serde::Serialize;
use std::io::Write;

fn print_json<S: Serialize, W: Write>(value: &S, mut out: W) -> Result<()> {
    serde_json::to_writer_pretty(&mut out, value).map_err(Error::Json)?;
    writeln!(out).map_err(Error::Io)
}
