use super::*;
use crate::config::test_parse_config;
use crate::outline::HeadingEntry;
use crate::utils::reading::ReadingTime;

fn bundle() -> PostBundle {
    PostBundle {
        front_matter: FrontMatter {
            slug: "easing-curves".into(),
            date: "2023-01-02".into(),
            title: "Easing <curves>".into(),
            tags: vec!["Motion Graphics".into(), "CSS".into()],
            reading_time: Some(ReadingTime {
                words: 812,
                text: "5 min read".into(),
            }),
            file_name: None,
        },
        authors: vec![
            Author {
                name: "Ada".into(),
                avatar: Some("/static/ada.png".into()),
                twitter: Some("https://twitter.com/ada".into()),
            },
            Author {
                name: "Grace".into(),
                avatar: None,
                twitter: None,
            },
        ],
        prev: Some(PostLink {
            slug: "timing".into(),
            title: "Timing".into(),
        }),
        next: None,
        toc: vec![
            HeadingEntry::new("linear", 1, "Linear"),
            HeadingEntry::new("ease-in", 2, "Ease in"),
            HeadingEntry::new("orphan", 4, "Orphan"),
            HeadingEntry::new("bezier", 1, "Bezier"),
        ],
        body: "<h1 id=\"linear\">Linear</h1><p>Body text.</p>".into(),
    }
}

fn site() -> crate::config::SiteConfig {
    test_parse_config("[site]\nurl = \"https://example.com\"")
}

#[test]
fn test_header() {
    let html = PostLayout::new(&site()).render(&bundle(), None).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<time datetime="2023-01-02">Monday, January 2, 2023</time>"#));
    assert!(html.contains("<h1 class=\"post-title\">Easing &lt;curves&gt;</h1>"));
    assert!(html.contains("812 words"));
    assert!(html.contains("5 min read"));
}

#[test]
fn test_date_follows_locale() {
    let config = test_parse_config("[site]\nurl = \"https://example.com\"\nlocale = \"en-GB\"");
    let html = PostLayout::new(&config).render(&bundle(), None).unwrap();
    assert!(html.contains(">Monday 2 January 2023</time>"));
    assert!(html.contains(r#"<html lang="en-GB">"#));
}

#[test]
fn test_authors() {
    let html = PostLayout::new(&site()).render(&bundle(), None).unwrap();

    assert!(html.contains(r#"<img src="/static/ada.png""#));
    assert!(html.contains(r#"<a href="https://twitter.com/ada">@ada</a>"#));
    assert!(html.contains(r#"<dd class="author-name">Grace</dd>"#));
    assert_eq!(html.matches("<img ").count(), 1);
}

#[test]
fn test_body_is_verbatim() {
    let html = PostLayout::new(&site()).render(&bundle(), None).unwrap();
    assert!(html.contains("<h1 id=\"linear\">Linear</h1><p>Body text.</p>"));
}

#[test]
fn test_share_link() {
    let html = PostLayout::new(&site()).render(&bundle(), None).unwrap();
    assert!(html.contains(
        "https://twitter.com/intent/tweet?url=https%3A%2F%2Fexample.com%2Fblog%2Feasing-curves"
    ));

    let config =
        test_parse_config("[site]\nurl = \"https://example.com\"\n[share]\ntwitter = false");
    let html = PostLayout::new(&config).render(&bundle(), None).unwrap();
    assert!(!html.contains("Share on Twitter"));

    let config = test_parse_config("");
    let html = PostLayout::new(&config).render(&bundle(), None).unwrap();
    assert!(!html.contains("Share on Twitter"));
}

#[test]
fn test_footer_links() {
    let html = PostLayout::new(&site()).render(&bundle(), None).unwrap();

    assert!(html.contains(
        r#"<a class="tag" href="/tags/motion-graphics">Motion-Graphics</a>"#
    ));
    assert!(html.contains(r#"<a class="tag" href="/tags/css">CSS</a>"#));
    assert!(html.contains("Previous Article"));
    assert!(html.contains(r#"<a href="/blog/timing">Timing</a>"#));
    assert!(!html.contains("Next Article"));
    assert!(html.contains(
        r#"<a class="back-link" href="/posts">&larr; Back to the Graphic Design</a>"#
    ));
}

#[test]
fn test_no_tags_no_neighbours() {
    let mut bundle = bundle();
    bundle.front_matter.tags.clear();
    bundle.prev = None;

    let html = PostLayout::new(&site()).render(&bundle, None).unwrap();
    assert!(!html.contains("post-tags"));
    assert!(!html.contains("post-nav"));
}

#[test]
fn test_toc_and_script() {
    let html = PostLayout::new(&site()).render(&bundle(), Some("ease-in")).unwrap();

    assert!(html.contains(r#"<nav class="post-toc""#));
    assert!(html.contains(r#"<li data-toc-id="linear" class="toc-active">"#));
    assert!(html.contains(r#"<li data-toc-id="ease-in" class="toc-active">"#));
    assert!(!html.contains(r#"data-toc-id="orphan""#));
    assert!(html.contains("<script>"));
    assert!(html.contains(r#"const SELECTOR = "h1, h2, h3";"#));
}

#[test]
fn test_toc_disabled() {
    let config = test_parse_config("[site]\nurl = \"https://example.com\"\n[toc]\nenable = false");
    let html = PostLayout::new(&config).render(&bundle(), None).unwrap();
    assert!(!html.contains("post-toc"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_no_headings_no_toc() {
    let mut bundle = bundle();
    bundle.toc.clear();

    let html = PostLayout::new(&site()).render(&bundle, None).unwrap();
    assert!(!html.contains("post-toc"));
    assert!(!html.contains("<script>"));
}

#[test]
fn test_estimated_reading_time() {
    let mut bundle = bundle();
    bundle.front_matter.reading_time = None;
    bundle.body = "<p>word </p>".repeat(450);

    let html = PostLayout::new(&site()).render(&bundle, None).unwrap();
    assert!(html.contains("450 words"));
    assert!(html.contains("3 min read"));
}

#[test]
fn test_js_timestamp_date() {
    let mut bundle = bundle();
    bundle.front_matter.date = "2021-08-07T00:00:00.000Z".into();

    let html = PostLayout::new(&site()).render(&bundle, None).unwrap();
    assert!(html.contains(
        r#"<time datetime="2021-08-07T00:00:00.000Z">Saturday, August 7, 2021</time>"#
    ));
}

#[test]
fn test_invalid_date() {
    let mut bundle = bundle();
    bundle.front_matter.date = "yesterday".into();

    let err = PostLayout::new(&site()).render(&bundle, None).unwrap_err();
    assert!(matches!(err, LayoutError::InvalidDate { .. }));
    assert!(err.to_string().contains("easing-curves"));
}
