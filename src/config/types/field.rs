//! Config field path.

use owo_colors::OwoColorize;
use std::fmt;

/// Dotted path of a `folio.toml` key, as shown in diagnostics.
///
/// `#[derive(Config)]` generates one per field:
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "toc")]
/// pub struct TocConfig {
///     pub selector: String,
/// }
///
/// diag.error(TocConfig::FIELDS.selector, "must not be empty"); // `toc.selector`
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldPath(pub &'static str);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(path)
    }

    #[inline]
    pub const fn as_str(&self) -> &'static str {
        self.0
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        self.0
    }
}
