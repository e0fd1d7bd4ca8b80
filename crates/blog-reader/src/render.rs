//! Plain-text rendering of manifest entries and posts

use blog_content_client::{BlogMetadata, BlogPost};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// One line per entry: date, title, author, id
pub fn render_listing(entries: &[BlogMetadata]) -> String {
    if entries.is_empty() {
        return "No posts published yet.\n".to_string();
    }

    let mut out = String::new();
    for meta in entries {
        out.push_str(&format!(
            "{}  {} by {}  ({})\n",
            meta.published_on.format(DATE_FORMAT),
            meta.title,
            meta.author,
            meta.id
        ));
    }
    out
}

pub fn render_metadata(meta: &BlogMetadata) -> String {
    format!(
        "id:        {}\ntitle:     {}\nauthor:    {}\npublished: {}\nlocation:  {}\n",
        meta.id,
        meta.title,
        meta.author,
        meta.published_on.to_rfc3339(),
        meta.location
    )
}

/// Header block followed by the body exactly as fetched
pub fn render_post(post: &BlogPost) -> String {
    let meta = &post.metadata;
    let rule = "=".repeat(meta.title.chars().count().max(3));
    format!(
        "{}\n{}\n{}, {}\n\n{}",
        meta.title,
        rule,
        meta.author,
        meta.published_on.format(DATE_FORMAT),
        post.body
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use uuid::Uuid;

    fn meta(title: &str) -> BlogMetadata {
        BlogMetadata {
            id: Uuid::nil(),
            author: "Ada".to_string(),
            published_on: Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap(),
            title: title.to_string(),
            location: "post1.md".to_string(),
        }
    }

    #[test]
    fn test_render_listing() {
        let out = render_listing(&[meta("Engines"), meta("Looms")]);
        let lines: Vec<_> = out.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(
            lines[0],
            "2024-06-01  Engines by Ada  (00000000-0000-0000-0000-000000000000)"
        );
        assert!(lines[1].contains("Looms"));
    }

    #[test]
    fn test_render_empty_listing() {
        assert_eq!(render_listing(&[]), "No posts published yet.\n");
    }

    #[test]
    fn test_render_metadata() {
        let out = render_metadata(&meta("Engines"));
        assert!(out.contains("title:     Engines"));
        assert!(out.contains("published: 2024-06-01T12:00:00+00:00"));
        assert!(out.contains("location:  post1.md"));
    }

    #[test]
    fn test_render_post_keeps_body() {
        let body = "First line\n\n  indented *markdown*\n";
        let post = BlogPost::new(body.to_string(), meta("Engines"));
        let out = render_post(&post);

        assert!(out.starts_with("Engines\n=======\nAda, 2024-06-01\n\n"));
        assert!(out.ends_with(body));
    }
}
