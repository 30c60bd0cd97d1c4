//! Configuration options for parsing.
//!
//! This module provides [`ParseOptions`], the configurable counterpart of
//! the fixed default grammar used by [`parse`](crate::parse):
//!
//! - which special characters (comment, argument marker, newline, quotes,
//!   escape) are active,
//! - which bytes separate fields,
//! - and four independent behavior flags.
//!
//! ## Examples
//!
//! ```rust
//! use optlex::{parse_with_options, ParseOptions};
//!
//! // Colon-separated, comments disabled.
//! let options = ParseOptions::new()
//!     .with_features("=\n'\"\\")
//!     .with_separators(":");
//! let opts = parse_with_options("a:b:#notacomment", &options);
//! assert_eq!(opts.len(), 3);
//!
//! // Explicit empty fields between adjacent separators.
//! let options = ParseOptions::new().allow_multiple_separators();
//! let opts = parse_with_options("a,,b", &options);
//! assert_eq!(opts.len(), 3);
//! assert_eq!(opts[1].tag.text(), Some(""));
//! ```

/// Configuration for [`parse_with_options`](crate::parse_with_options).
///
/// The default value reproduces the fixed grammar exactly: all features
/// enabled, separators space/tab/`;`/`,`, all behavior flags off,
/// arguments enabled.
///
/// # Examples
///
/// ```rust
/// use optlex::ParseOptions;
///
/// let options = ParseOptions::new()
///     .keep_quotes_in_tags()
///     .newline_as_tag();
/// assert!(options.keep_quotes_in_tags);
/// assert!(options.newline_as_tag);
/// assert!(options.arguments);
/// ```
#[derive(Clone, Debug)]
pub struct ParseOptions {
    /// Which special characters stay active (subset of `#=\n'"\`);
    /// `None` enables all of them.
    pub features: Option<String>,
    /// Bytes treated as field boundaries; `None` means space, tab,
    /// `;`, `,`.
    pub separators: Option<String>,
    /// Keep literal quote/escape characters in tag text.
    pub keep_quotes_in_tags: bool,
    /// Keep literal quote/escape characters in argument text.
    pub keep_quotes_in_args: bool,
    /// Adjacent separators produce explicit empty fields instead of
    /// collapsing into one boundary.
    pub allow_multiple_separators: bool,
    /// Each physical newline also emits a synthetic `"\n"` tag.
    pub newline_as_tag: bool,
    /// Whether the argument marker splits tag from value. When disabled
    /// the marker is ordinary text (`a=b` becomes one tag `a=b`).
    pub arguments: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        ParseOptions {
            features: None,
            separators: None,
            keep_quotes_in_tags: false,
            keep_quotes_in_args: false,
            allow_multiple_separators: false,
            newline_as_tag: false,
            arguments: true,
        }
    }
}

impl ParseOptions {
    /// Creates options matching the fixed default grammar.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the active special characters to those listed.
    ///
    /// Characters outside the standard feature set are ignored.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optlex::{parse_with_options, ParseOptions};
    ///
    /// // Everything but the comment character.
    /// let options = ParseOptions::new().with_features("=\n'\"\\");
    /// let opts = parse_with_options("tag=#value", &options);
    /// assert_eq!(opts[0].arg.as_deref(), Some("#value"));
    /// ```
    #[must_use]
    pub fn with_features(mut self, features: impl Into<String>) -> Self {
        self.features = Some(features.into());
        self
    }

    /// Sets the bytes treated as field boundaries.
    #[must_use]
    pub fn with_separators(mut self, separators: impl Into<String>) -> Self {
        self.separators = Some(separators.into());
        self
    }

    /// Retains literal quote and escape characters in tag text.
    #[must_use]
    pub fn keep_quotes_in_tags(mut self) -> Self {
        self.keep_quotes_in_tags = true;
        self
    }

    /// Retains literal quote and escape characters in argument text.
    #[must_use]
    pub fn keep_quotes_in_args(mut self) -> Self {
        self.keep_quotes_in_args = true;
        self
    }

    /// Emits an explicit empty field between adjacent separators.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optlex::{parse_with_options, ParseOptions};
    ///
    /// let options = ParseOptions::new().allow_multiple_separators();
    /// assert_eq!(parse_with_options("a,,b", &options).len(), 3);
    /// ```
    #[must_use]
    pub fn allow_multiple_separators(mut self) -> Self {
        self.allow_multiple_separators = true;
        self
    }

    /// Emits each physical newline as a synthetic `"\n"` tag.
    #[must_use]
    pub fn newline_as_tag(mut self) -> Self {
        self.newline_as_tag = true;
        self
    }

    /// Disables argument splitting; the marker byte becomes plain text.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use optlex::{parse_with_options, ParseOptions};
    ///
    /// let options = ParseOptions::new().without_arguments();
    /// let opts = parse_with_options("a=b", &options);
    /// assert_eq!(opts[0].tag.text(), Some("a=b"));
    /// assert!(opts[0].arg.is_none());
    /// ```
    #[must_use]
    pub fn without_arguments(mut self) -> Self {
        self.arguments = false;
        self
    }
}
