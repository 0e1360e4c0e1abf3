use crate::error::{Error, Result};
use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// Site root; defaults to the current directory
    #[arg(short, long, global = true)]
    cwd: Option<String>,

    /// Config file, relative to the site root
    #[arg(long, global = true, default_value = "config.toml")]
    pub config: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the metadata of every post, keyed by slug
    List,
    /// Print one post
    Show { slug: String },
    /// Save a post from a JSON file (`-` reads stdin)
    Save {
        input: String,
        /// Slug the post was loaded under, when it is being renamed
        #[arg(long)]
        original_slug: Option<String>,
    },
    /// Print the published posts of a series in publishing order
    Series { name: String },
    /// Render a post body to HTML
    Render { slug: String },
    #[command(subcommand)]
    Image(ImageCommand),
}

#[derive(Debug, Subcommand)]
pub enum ImageCommand {
    /// Copy an image into the image directory
    Upload {
        path: PathBuf,
        /// Stored file name; defaults to the source file name
        #[arg(long)]
        name: Option<String>,
    },
    /// Find stored images by name
    Search { query: String },
}

impl Args {
    pub fn cwd(&self) -> Result<PathBuf> {
        let path = self.cwd.as_ref();

        if let Some(path) = path {
            Ok(PathBuf::from(path.as_str()))
        } else {
            env::current_dir().map_err(Error::Io)
        }
    }
}
