use crate::compilers::MarkdownCompiler;
use crate::error::{Error, Result};
use crate::store::PostStore;
use std::io::Write;

pub fn render<W: Write>(store: &PostStore, slug: &str, mut out: W) -> Result<()> {
    let post = store.get_post(slug)?;
    let html = MarkdownCompiler::new().render(&post)?;

    out.write_all(html.as_bytes()).map_err(Error::Io)
}
