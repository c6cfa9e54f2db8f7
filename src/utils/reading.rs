//! Reading-time estimation for post bodies without pipeline metadata.

use serde::{Deserialize, Serialize};

use super::html::text_content;

/// Average reading speed used for estimates.
pub const WORDS_PER_MINUTE: usize = 200;

/// Word count and display text shown in the post header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReadingTime {
    pub words: usize,
    /// Display text, e.g. `5 min read`.
    pub text: String,
}

impl ReadingTime {
    /// Estimate from a rendered HTML body.
    pub fn estimate(body_html: &str) -> Self {
        let words = text_content(body_html).split_whitespace().count();
        Self::from_words(words)
    }

    pub fn from_words(words: usize) -> Self {
        let minutes = words.div_ceil(WORDS_PER_MINUTE);
        Self {
            words,
            text: format!("{minutes} min read"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_words_rounds_up() {
        assert_eq!(ReadingTime::from_words(1).text, "1 min read");
        assert_eq!(ReadingTime::from_words(200).text, "1 min read");
        assert_eq!(ReadingTime::from_words(201).text, "2 min read");
    }

    #[test]
    fn test_empty_body() {
        let time = ReadingTime::estimate("");
        assert_eq!(time.words, 0);
        assert_eq!(time.text, "0 min read");
    }

    #[test]
    fn test_estimate_ignores_markup() {
        let time = ReadingTime::estimate("<h2 id=\"a\">Intro</h2><p>two <b>more</b> words</p>");
        assert_eq!(time.words, 4);
    }

    #[test]
    fn test_estimate_attribute_text_is_not_counted() {
        let time = ReadingTime::estimate(r#"<p>one <img alt="a > b" src="x.png"> two</p>"#);
        assert_eq!(time.words, 2);
    }
}
