//! # optlex
//!
//! A tokenizer and serializer for delimited option strings.
//!
//! ## What is an option string?
//!
//! A flat, single-level list of options like `uppercase,bold,font=12` —
//! the kind of string found in mount options, terminal attribute lists,
//! and plugin configuration knobs. Each option is a *tag*, optionally
//! bound to an *argument* with `=`, and options are separated by spaces,
//! tabs, semicolons, or commas. Quoting, escaping, and `#` comments are
//! supported: `values='1,2,3',equal=\=`.
//!
//! ## Key Features
//!
//! - **One-pass parsing**: a table-driven finite-state machine scans the
//!   input left to right exactly once
//! - **No recoverable errors**: every byte sequence parses to a
//!   deterministic entry list, malformed quoting included
//! - **Configurable grammar**: enable/disable comment, argument,
//!   newline, quote, and escape handling; choose your own separators
//! - **Round trip**: rebuild the option string from the parsed entries,
//!   skipping logically deleted ones
//! - **No unsafe code**: written entirely in safe Rust
//!
//! ## Quick Start
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! optlex = "0.1"
//! ```
//!
//! ### Basic parsing
//!
//! ```rust
//! use optlex::parse;
//!
//! let opts = parse("uppercase,bold,font=12,values='1,2,3'");
//! assert_eq!(opts.len(), 4);
//!
//! assert_eq!(opts[0].tag.text(), Some("uppercase"));
//! assert!(opts[0].arg.is_none());
//!
//! assert_eq!(opts[2].tag.text(), Some("font"));
//! assert_eq!(opts[2].arg.as_deref(), Some("12"));
//!
//! // Quoted commas are not separators.
//! assert_eq!(opts[3].arg.as_deref(), Some("1,2,3"));
//! ```
//!
//! ### Configurable parsing
//!
//! ```rust
//! use optlex::{parse_with_options, ParseOptions};
//!
//! let options = ParseOptions::new()
//!     .with_separators(":")
//!     .allow_multiple_separators();
//! let opts = parse_with_options("a::b", &options);
//!
//! let tags: Vec<_> = opts.iter().filter_map(|e| e.tag.text()).collect();
//! assert_eq!(tags, vec!["a", "", "b"]);
//! ```
//!
//! ### Serializing back
//!
//! ```rust
//! use optlex::{parse, to_string};
//!
//! let mut opts = parse("uppercase,bold,font=12");
//! opts.delete(1); // drop "bold", keep the slot
//! assert_eq!(to_string(&opts, ',', Some('=')), "uppercase,font=12");
//! ```
//!
//! ### Building lists by hand
//!
//! ```rust
//! use optlex::{optlist, to_string};
//!
//! let opts = optlist!["italic", "font" => "12"];
//! assert_eq!(to_string(&opts, ';', Some('=')), "italic;font=12");
//! ```
//!
//! ## Counting
//!
//! [`count`] reports the number of delimiter events the scan would emit:
//! the number of entries plus one for the terminating sentinel. It exists
//! for callers that size storage ahead of time; [`parse`] already returns
//! an owned, correctly sized list in one call.
//!
//! ```rust
//! use optlex::{count, parse};
//!
//! assert_eq!(count(""), 1); // sentinel only
//! assert_eq!(count("a,b"), parse("a,b").len() + 1);
//! ```
//!
//! ## Grammar (default configuration)
//!
//! ```text
//! input      := token (separator token)* end
//! token      := tag ['=' argument]
//! separator  := one of { ' ', '\t', ';', ',' }
//! comment    := '#' ... up to newline          (discarded)
//! quoted     := '...'  |  "..."                (quotes consumed)
//! escaped    := '\' c                          ('\' + newline is elided)
//! ```

pub mod entry;
pub mod error;
pub mod macros;
pub mod options;
pub mod ser;

mod classify;
mod scan;
mod table;

pub use classify::{DEFAULT_FEATURES, DEFAULT_SEPARATORS};
pub use entry::{Entry, OptList, Tag};
pub use error::{Error, Result};
pub use options::ParseOptions;
pub use ser::{to_string, to_writer};

use classify::CharMap;
use table::ActionTable;

/// Parses an option string with the fixed default grammar.
///
/// All features are enabled (comment `#`, argument marker `=`, newline,
/// single/double quotes, backslash escape) and the separators are space,
/// tab, `;`, and `,`. Infallible: malformed input degrades predictably
/// (an unterminated quote swallows the rest of the input as one token).
///
/// # Examples
///
/// ```rust
/// use optlex::parse;
///
/// let opts = parse("font=12,x=\\=y");
/// assert_eq!(opts[0].arg.as_deref(), Some("12"));
/// assert_eq!(opts[1].arg.as_deref(), Some("=y")); // escaped '=' is literal
/// ```
#[must_use]
pub fn parse(input: &str) -> OptList {
    scan::scan(input, CharMap::standard(), &ActionTable::standard(), true)
}

/// Parses an option string with a configurable grammar.
///
/// Builds a fresh classifier from the options' feature/separator strings,
/// extends the default action table per the behavior flags, and runs the
/// same engine as [`parse`].
///
/// # Examples
///
/// ```rust
/// use optlex::{parse_with_options, ParseOptions};
///
/// let options = ParseOptions::new().newline_as_tag();
/// let opts = parse_with_options("a\nb", &options);
///
/// let tags: Vec<_> = opts.iter().filter_map(|e| e.tag.text()).collect();
/// assert_eq!(tags, vec!["a", "\n", "b"]);
/// ```
#[must_use]
pub fn parse_with_options(input: &str, options: &ParseOptions) -> OptList {
    let map = CharMap::with_config(options.features.as_deref(), options.separators.as_deref());
    let table = ActionTable::for_options(options);
    scan::scan(input, &map, &table, options.arguments)
}

/// Counts the delimiter events of a default-grammar scan without
/// emitting any text.
///
/// Returns the number of entries [`parse`] would produce, plus one for
/// the terminating sentinel; always at least 1.
///
/// # Examples
///
/// ```rust
/// use optlex::count;
///
/// assert_eq!(count(""), 1);
/// assert_eq!(count("a,b,c"), 4);
/// ```
#[must_use]
pub fn count(input: &str) -> usize {
    scan::count(input, CharMap::standard(), &ActionTable::standard(), true)
}

/// Counts the delimiter events of a configurable-grammar scan.
///
/// Same contract as [`count`], for [`parse_with_options`].
#[must_use]
pub fn count_with_options(input: &str, options: &ParseOptions) -> usize {
    let map = CharMap::with_config(options.features.as_deref(), options.separators.as_deref());
    let table = ActionTable::for_options(options);
    scan::count(input, &map, &table, options.arguments)
}
