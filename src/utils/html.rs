//! HTML utility functions.
//!
//! Provides the small amount of HTML handling the layout needs:
//! - `escape()`, `escape_attr()` - HTML entity escaping
//! - `text_content()` - visible text of an HTML fragment (for word counts)

use std::borrow::Cow;

// =============================================================================
// HTML Escaping
// =============================================================================

/// Characters that require HTML escaping.
const ESCAPE_CHARS: [char; 5] = ['<', '>', '&', '"', '\''];

/// Get the HTML entity for a special character.
#[inline]
fn escape_char(c: char) -> Option<&'static str> {
    match c {
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '&' => Some("&amp;"),
        '"' => Some("&quot;"),
        '\'' => Some("&#39;"),
        _ => None,
    }
}

/// Escape HTML special characters in text content.
///
/// Uses `Cow` to avoid allocation when no escaping is needed.
///
/// # Example
/// ```ignore
/// assert_eq!(escape("<script>"), "&lt;script&gt;");
/// assert_eq!(escape("hello"), "hello"); // No allocation
/// ```
#[inline]
pub fn escape(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

/// Escape HTML attribute values.
///
/// Identical to `escape()` but semantically indicates attribute context.
#[inline]
pub fn escape_attr(s: &str) -> Cow<'_, str> {
    escape_with(s, &ESCAPE_CHARS)
}

#[inline]
fn escape_with<'a>(s: &'a str, chars: &[char]) -> Cow<'a, str> {
    if !s.contains(chars) {
        return Cow::Borrowed(s);
    }

    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match escape_char(c) {
            Some(entity) => result.push_str(entity),
            None => result.push(c),
        }
    }
    Cow::Owned(result)
}

// =============================================================================
// Text Extraction
// =============================================================================

/// Elements whose content is never read as prose.
const SKIPPED_ELEMENTS: [&str; 2] = ["script", "style"];

/// Visible text of an HTML fragment.
///
/// Element boundaries become spaces so that adjacent blocks do not glue
/// words together. Comments and the contents of `<script>` and `<style>`
/// are skipped. Entities are left as-is; they only ever count as part of a
/// word.
pub fn text_content(html: &str) -> String {
    let Ok(dom) = tl::parse(html, tl::ParserOptions::default()) else {
        // Parse failed, count the raw fragment
        return html.to_string();
    };

    let parser = dom.parser();
    let mut out = String::with_capacity(html.len());
    for handle in dom.children() {
        collect_text(*handle, parser, &mut out);
    }
    out
}

fn collect_text(handle: tl::NodeHandle, parser: &tl::Parser, out: &mut String) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str();
            if SKIPPED_ELEMENTS
                .iter()
                .any(|skipped| name.eq_ignore_ascii_case(skipped))
            {
                return;
            }

            out.push(' ');
            for child in tag.children().top().iter() {
                collect_text(*child, parser, out);
            }
            out.push(' ');
        }
        tl::Node::Raw(bytes) => out.push_str(&bytes.as_utf8_str()),
        tl::Node::Comment(_) => {}
    }
}

// ============================================================================
// Tests
// ============================================================================
