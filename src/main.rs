mod args;
mod cmd;
mod compilers;
mod config;
mod error;
mod front_matter;
mod images;
mod post;
mod post_cache;
mod store;

use crate::args::{Args, Command, ImageCommand};
use crate::config::Config;
use crate::error::Result;
use crate::images::ImageStore;
use crate::store::PostStore;
use clap::Parser;
use std::io;

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();
    let cwd = args.cwd()?;
    let config = Config::load(cwd.join(args.config.as_str()))?;
    log::debug!("{:?}", args);
    log::debug!("{:?}", config);

    let mut store = PostStore::new(config.posts_path(&cwd));
    let images = ImageStore::new(
        config.images_path(&cwd),
        config.image_url_prefix.as_str(),
        config.max_image_bytes,
    );
    let out = io::stdout().lock();

    match args.command {
        Command::List => cmd::list(&mut store, out),
        Command::Show { slug } => cmd::show(&store, slug.as_str(), out),
        Command::Save {
            input,
            original_slug,
        } => cmd::save(&mut store, input.as_str(), original_slug.as_deref()),
        Command::Series { name } => cmd::series(&mut store, name.as_str(), out),
        Command::Render { slug } => cmd::render(&store, slug.as_str(), out),
        Command::Image(ImageCommand::Upload { path, name }) => {
            cmd::upload_image(&images, path.as_path(), name.as_deref(), out)
        }
        Command::Image(ImageCommand::Search { query }) => {
            cmd::search_images(&images, query.as_str(), out)
        }
    }
}
