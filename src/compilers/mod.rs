mod markdown;

pub use self::markdown::MarkdownCompiler;
