//! Post page markup.

use std::fmt::Write;

use thiserror::Error;

use super::links::{tag_label, tag_slug, twitter_handle, twitter_share_url};
use super::{Author, PostBundle, PostLink};
use crate::config::SiteConfig;
use crate::debug;
use crate::embed::{SCROLLSPY_JS, ScrollSpyVars};
use crate::outline::{OutlineNode, build_outline, count};
use crate::render::toc_html;
use crate::utils::date::PostDate;
use crate::utils::html::{escape, escape_attr};

#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("post `{slug}` has an invalid date `{date}`")]
    InvalidDate { slug: String, date: String },
}

/// Renders post bundles into full HTML pages.
pub struct PostLayout<'a> {
    config: &'a SiteConfig,
}

impl<'a> PostLayout<'a> {
    pub fn new(config: &'a SiteConfig) -> Self {
        Self { config }
    }

    /// Full HTML document for one post.
    ///
    /// `active` pre-selects a TOC entry; the scroll spy takes over in the
    /// browser.
    pub fn render(&self, bundle: &PostBundle, active: Option<&str>) -> Result<String, LayoutError> {
        let fm = &bundle.front_matter;
        let date = PostDate::parse(&fm.date).ok_or_else(|| LayoutError::InvalidDate {
            slug: fm.slug.clone(),
            date: fm.date.clone(),
        })?;

        let outline = build_outline(&bundle.toc);
        let kept = count(&outline);
        debug!("render"; "{}: {} heading(s), {} in outline", fm.slug, bundle.toc.len(), kept);

        let mut out = String::new();
        out.push_str("<!DOCTYPE html>\n");
        let _ = writeln!(
            out,
            r#"<html lang="{}"><head><meta charset="utf-8"><title>{}</title></head><body>"#,
            escape_attr(&self.config.site.locale),
            escape(&fm.title)
        );
        out.push_str("<article>\n");

        self.write_header(&mut out, bundle, date);
        self.write_authors(&mut out, &bundle.authors);

        out.push_str("<div class=\"post-body\">\n");
        out.push_str(&bundle.body);
        out.push_str("\n</div>\n");

        self.write_share(&mut out, &fm.slug);
        self.write_footer(&mut out, bundle, &outline, active);

        out.push_str("</article>\n");

        if self.config.toc.enable && !outline.is_empty() {
            let js = SCROLLSPY_JS.render(&ScrollSpyVars::from_config(self.config));
            let _ = writeln!(out, "<script>\n{js}</script>");
        }

        out.push_str("</body></html>\n");
        Ok(out)
    }

    fn write_header(&self, out: &mut String, bundle: &PostBundle, date: PostDate) {
        let fm = &bundle.front_matter;
        let reading = bundle.reading_time();

        out.push_str("<header class=\"post-header\">\n");
        out.push_str(r#"<dl><dt class="sr-only">Published on</dt><dd>"#);
        let _ = write!(
            out,
            r#"<time datetime="{}">{}</time>"#,
            escape_attr(&fm.date),
            escape(&date.format_long(&self.config.site.locale))
        );
        out.push_str("</dd></dl>\n");
        let _ = writeln!(out, "<h1 class=\"post-title\">{}</h1>", escape(&fm.title));
        out.push_str(r#"<p class="post-stats">"#);
        let _ = write!(out, r#"<span class="post-words">{} words</span> "#, reading.words);
        let _ = write!(
            out,
            r#"<span class="post-reading-time">{}</span>"#,
            escape(&reading.text)
        );
        out.push_str("</p>\n");
        out.push_str("</header>\n");
    }

    fn write_authors(&self, out: &mut String, authors: &[Author]) {
        if authors.is_empty() {
            return;
        }

        out.push_str("<dl class=\"post-authors\"><dt class=\"sr-only\">Authors</dt><dd><ul>\n");
        for author in authors {
            out.push_str("<li class=\"author\">");
            if let Some(avatar) = &author.avatar {
                let _ = write!(
                    out,
                    r#"<img src="{}" width="38" height="38" alt="avatar" class="avatar">"#,
                    escape_attr(avatar)
                );
            }
            let _ = write!(
                out,
                r#"<dl><dt class="sr-only">Name</dt><dd class="author-name">{}</dd>"#,
                escape(&author.name)
            );
            out.push_str("<dt class=\"sr-only\">Twitter</dt><dd>");
            if let Some(profile) = &author.twitter {
                let _ = write!(
                    out,
                    r#"<a href="{}">{}</a>"#,
                    escape_attr(profile),
                    escape(&twitter_handle(profile))
                );
            }
            out.push_str("</dd></dl></li>\n");
        }
        out.push_str("</ul></dd></dl>\n");
    }

    fn write_share(&self, out: &mut String, slug: &str) {
        if !self.config.share.twitter {
            return;
        }
        let Some(post_url) = self.config.post_url(slug) else {
            return;
        };

        let _ = write!(
            out,
            r#"<div class="post-share"><a title="Share on Twitter" href="{}">"#,
            escape_attr(&twitter_share_url(&post_url))
        );
        out.push_str("Share on Twitter</a></div>\n");
    }

    fn write_footer(
        &self,
        out: &mut String,
        bundle: &PostBundle,
        outline: &[OutlineNode],
        active: Option<&str>,
    ) {
        let fm = &bundle.front_matter;
        out.push_str("<footer>\n");

        if !fm.tags.is_empty() {
            out.push_str("<div class=\"post-tags\"><h2>Tags</h2><div>");
            for tag in &fm.tags {
                let _ = write!(
                    out,
                    r#"<a class="tag" href="/tags/{}">{}</a>"#,
                    escape_attr(&tag_slug(tag)),
                    escape(&tag_label(tag))
                );
            }
            out.push_str("</div></div>\n");
        }

        if bundle.prev.is_some() || bundle.next.is_some() {
            out.push_str("<div class=\"post-nav\">\n");
            if let Some(prev) = &bundle.prev {
                self.write_neighbour(out, "prev", "Previous Article", prev);
            }
            if let Some(next) = &bundle.next {
                self.write_neighbour(out, "next", "Next Article", next);
            }
            out.push_str("</div>\n");
        }

        let back = &self.config.site.back;
        let _ = writeln!(
            out,
            r#"<div class="post-aside"><a class="back-link" href="{}">&larr; {}</a>"#,
            escape_attr(&back.href),
            escape(&back.label)
        );
        if self.config.toc.enable && !outline.is_empty() {
            let _ = writeln!(
                out,
                r#"<nav class="post-toc" aria-label="Table of contents">{}</nav>"#,
                toc_html(outline, active)
            );
        }
        out.push_str("</div>\n");

        out.push_str("</footer>\n");
    }

    fn write_neighbour(&self, out: &mut String, class: &str, heading: &str, link: &PostLink) {
        let _ = writeln!(
            out,
            r#"<div class="post-{class}"><h2>{heading}</h2><a href="{}">{}</a></div>"#,
            escape_attr(&self.config.post_path(&link.slug)),
            escape(&link.title)
        );
    }
}
