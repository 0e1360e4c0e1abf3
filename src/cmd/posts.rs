use super::print_json;
use crate::error::{Error, Result};
use crate::post::Post;
use crate::store::PostStore;
use std::fs;
use std::io::{self, Read, Write};

pub fn list<W: Write>(store: &mut PostStore, out: W) -> Result<()> {
    let index = store.metadata_index()?;
    print_json(index, out)
}

pub fn show<W: Write>(store: &PostStore, slug: &str, out: W) -> Result<()> {
    if slug == Post::UNTITLED {
        return print_json(&Post::untitled(), out);
    }

    print_json(&store.get_post(slug)?, out)
}

pub fn save(store: &mut PostStore, input: &str, original_slug: Option<&str>) -> Result<()> {
    let text = if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map_err(Error::Io)?;
        text
    } else {
        fs::read_to_string(input).map_err(Error::Io)?
    };

    let post: Post = serde_json::from_str(&text).map_err(Error::Json)?;
    store.save_post(&post, original_slug)
}

pub fn series<W: Write>(store: &mut PostStore, name: &str, out: W) -> Result<()> {
    print_json(&store.series(name)?, out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn store() -> (TempDir, PostStore) {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("hello.mdx"),
            "---\ntitle: Hello\npublishDate: 2021-06-01\nstatus: published\nseries: Intro\n---\n\nHi.",
        )
        .unwrap();
        let store = PostStore::new(dir.path());
        (dir, store)
    }

    #[test]
    fn list_prints_the_metadata_index() {
        let (_dir, mut store) = store();
        let mut out = Vec::new();

        list(&mut store, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["posts"]["hello"]["title"], "Hello");
        assert_eq!(json["posts"]["hello"]["publishDate"], "2021-05-31T16:00:00.000Z");
        assert!(json["lastUpdated"].is_string());
    }

    #[test]
    fn show_untitled_prints_the_blank_draft() {
        let (_dir, store) = store();
        let mut out = Vec::new();

        show(&store, "Untitled", &mut out).unwrap();

        let post: Post = serde_json::from_slice(&out).unwrap();
        assert_eq!(post.slug, "Untitled");
        assert!(!post.metadata.is_published());
    }

    #[test]
    fn save_reads_a_post_from_json() {
        let (dir, mut store) = store();
        let input = dir.path().join("post.json");
        fs::write(
            &input,
            r#"{"slug":"greetings","content":"Hi again.","metadata":{"title":"Hello","publishDate":"2021-05-31T16:00:00.000Z","summary":"","status":"published"}}"#,
        )
        .unwrap();

        save(&mut store, input.to_str().unwrap(), Some("hello")).unwrap();

        assert!(!dir.path().join("hello.mdx").exists());
        assert_eq!(store.get_post("greetings").unwrap().content, "Hi again.");
    }

    #[test]
    fn series_prints_titles_and_slugs() {
        let (_dir, mut store) = store();
        let mut out = Vec::new();

        series(&mut store, "Intro", &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json, serde_json::json!([{ "title": "Hello", "slug": "hello" }]));
    }
}
