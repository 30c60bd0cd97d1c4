//! Byte classification for the scan engine.
//!
//! Every input byte maps to exactly one [`CharClass`]. The mapping lives in a
//! [`CharMap`], a 256-entry table built once per configuration from an
//! optional features string and an optional separator string. The engine
//! builds the map internally from [`ParseOptions`](crate::ParseOptions);
//! only the default feature/separator strings are part of the public API.

/// Semantic class of a single input byte.
///
/// The classes form a closed set: anything not given a special meaning by
/// the active configuration is [`CharClass::Ordinary`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum CharClass {
    /// Plain text, copied into the current token.
    Ordinary,
    /// Field boundary between tokens.
    Separator,
    /// End of input. Byte 0 always classifies here.
    Terminator,
    /// Starts a comment running to the end of the line.
    CommentStart,
    /// Physical newline.
    Newline,
    /// Binds an argument value to the current tag (`=` by default).
    ArgMarker,
    /// Opens/closes a single-quoted region.
    SingleQuote,
    /// Opens/closes a double-quoted region.
    DoubleQuote,
    /// Escapes the following byte (`\` by default).
    Escape,
}

/// Number of character classes, used to size the state tables.
pub(crate) const NCLASSES: usize = 9;

impl CharClass {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }
}

/// Feature characters enabled when no features string is given.
pub const DEFAULT_FEATURES: &str = "#=\n'\"\\";

/// Separator bytes used when no separator string is given.
pub const DEFAULT_SEPARATORS: &str = " \t;,";

const fn standard_table() -> [CharClass; 256] {
    let mut table = [CharClass::Ordinary; 256];
    table[0] = CharClass::Terminator;
    table[b' ' as usize] = CharClass::Separator;
    table[b'\t' as usize] = CharClass::Separator;
    table[b';' as usize] = CharClass::Separator;
    table[b',' as usize] = CharClass::Separator;
    table[b'#' as usize] = CharClass::CommentStart;
    table[b'=' as usize] = CharClass::ArgMarker;
    table[b'\n' as usize] = CharClass::Newline;
    table[b'\'' as usize] = CharClass::SingleQuote;
    table[b'"' as usize] = CharClass::DoubleQuote;
    table[b'\\' as usize] = CharClass::Escape;
    table
}

static STANDARD: CharMap = CharMap(standard_table());

/// Per-byte classification table.
///
/// A `CharMap` is immutable once built; the engine only reads it, so a
/// single map may be shared freely across threads.
#[derive(Clone)]
pub(crate) struct CharMap([CharClass; 256]);

impl CharMap {
    /// Returns the built-in classification used by the fixed-grammar entry
    /// point: all features enabled, separators space/tab/`;`/`,`.
    pub(crate) fn standard() -> &'static CharMap {
        &STANDARD
    }

    /// Builds a classification from an optional features string and an
    /// optional separator string.
    ///
    /// `features` selects which of the standard special characters keep
    /// their meaning (subset of `#=\n'"\`; `None` enables all of them).
    /// Characters outside the standard set are ignored. `separators` lists
    /// the bytes acting as field boundaries (`None` means space, tab, `;`,
    /// `,`). Separators are applied after features, so a byte named by
    /// both ends up a separator. Byte 0 is always [`CharClass::Terminator`].
    pub(crate) fn with_config(features: Option<&str>, separators: Option<&str>) -> CharMap {
        let mut table = [CharClass::Ordinary; 256];
        for byte in features.unwrap_or(DEFAULT_FEATURES).bytes() {
            table[byte as usize] = STANDARD.classify(byte);
        }
        for byte in separators.unwrap_or(DEFAULT_SEPARATORS).bytes() {
            table[byte as usize] = CharClass::Separator;
        }
        table[0] = CharClass::Terminator;
        CharMap(table)
    }

    /// Returns the class of `byte` under this configuration.
    #[inline]
    pub(crate) fn classify(&self, byte: u8) -> CharClass {
        self.0[byte as usize]
    }
}
