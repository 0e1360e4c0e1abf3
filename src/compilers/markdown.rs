use crate::error::{Error, Result};
use crate::post::Post;
use markdown::{Constructs, Options, ParseOptions};

pub struct MarkdownCompiler {
    options: Options,
}

impl MarkdownCompiler {
    pub fn new() -> Self {
        let constructs = Constructs {
            math_flow: true,
            math_text: true,
            ..Constructs::gfm()
        };

        let options = Options {
            parse: ParseOptions {
                constructs,
                ..ParseOptions::gfm()
            },
            ..Options::gfm()
        };

        Self { options }
    }

    pub fn render(&self, post: &Post) -> Result<String> {
        log::debug!("rendering {}", post.slug);
        markdown::to_html_with_options(post.content.as_str(), &self.options)
            .map_err(|e| Error::Markdown(e.to_string()))
    }
}
