//! Link helpers: share intents, Twitter handles, tag slugs.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Characters `encodeURIComponent` leaves alone besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const TWITTER_PROFILE: &str = "https://twitter.com/";

/// Percent-encode a full URL for use as a query value.
pub fn encode_uri_component(s: &str) -> String {
    utf8_percent_encode(s, URI_COMPONENT).to_string()
}

/// Tweet intent sharing `post_url`.
pub fn twitter_share_url(post_url: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?url={}",
        encode_uri_component(post_url)
    )
}

/// Display handle for a Twitter profile URL (`https://twitter.com/ada` → `@ada`).
///
/// Other URLs are shown as-is.
pub fn twitter_handle(profile: &str) -> String {
    profile.replacen(TWITTER_PROFILE, "@", 1)
}

/// Lowercase, dash-separated slug of a tag (`"Motion Graphics"` → `motion-graphics`).
///
/// Words split on anything that is not an ASCII letter or digit, and on case
/// changes inside a word (`"WebGL"` → `web-gl`, `"HTMLCanvas"` → `html-canvas`).
pub fn tag_slug(tag: &str) -> String {
    let mut words: Vec<String> = Vec::new();

    for run in tag.split(|c: char| !c.is_ascii_alphanumeric()) {
        let chars: Vec<char> = run.chars().collect();
        let mut word = String::new();

        for (i, &c) in chars.iter().enumerate() {
            let prev = i.checked_sub(1).map(|p| chars[p]);
            let next = chars.get(i + 1).copied();

            let boundary = match prev {
                None => false,
                Some(p) if c.is_ascii_uppercase() => {
                    p.is_ascii_lowercase()
                        || p.is_ascii_digit()
                        || (p.is_ascii_uppercase() && next.is_some_and(|n| n.is_ascii_lowercase()))
                }
                Some(p) => p.is_ascii_digit() && c.is_ascii_alphabetic(),
            };

            if boundary && !word.is_empty() {
                words.push(std::mem::take(&mut word));
            }
            word.push(c.to_ascii_lowercase());
        }

        if !word.is_empty() {
            words.push(word);
        }
    }

    words.join("-")
}

/// Tag text as displayed: spaces become dashes.
pub fn tag_label(tag: &str) -> String {
    tag.split(' ').collect::<Vec<_>>().join("-")
}
