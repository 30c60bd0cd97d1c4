//! Rebuilding option strings from entry lists.
//!
//! The inverse of parsing: joins a tag/argument sequence back into text
//! with a configurable separator and assignment character. Slots whose
//! tag is [`Tag::Deleted`] are skipped entirely, separator included, so
//! entries can be removed without resizing the list.
//!
//! Two output modes, mirroring the parse side's convenience/configurable
//! split:
//!
//! - [`to_string`] allocates and returns the result.
//! - [`to_writer`] writes into any [`io::Write`] sink, including a
//!   caller-supplied fixed buffer (`&mut [u8]`), and fails with
//!   [`Error::Io`] when the sink rejects the write.
//!
//! ## Examples
//!
//! ```rust
//! use optlex::{parse, to_string};
//!
//! let mut opts = parse("uppercase bold font=12");
//! assert_eq!(to_string(&opts, ',', Some('=')), "uppercase,bold,font=12");
//!
//! opts.delete(1);
//! assert_eq!(to_string(&opts, ',', Some('=')), "uppercase,font=12");
//! ```

use std::io::{self, Write};

use crate::entry::{Entry, Tag};
use crate::error::{Error, Result};

/// Joins `entries` into a freshly allocated string.
///
/// Each kept entry emits the separator owed by the previous kept entry
/// (none before the first), the tag text, and, when the entry has an
/// argument, the assignment character followed by the argument text.
/// Passing `eq: None` omits the assignment character but still emits the
/// argument text directly after the tag.
///
/// When the separator is `'\n'` and at least one entry was emitted, one
/// trailing newline is appended, so newline-joined output is always
/// line-terminated. No other separator ever trails.
///
/// # Examples
///
/// ```rust
/// use optlex::{to_string, Entry};
///
/// let entries = [Entry::new("bold"), Entry::with_arg("font", "12")];
/// assert_eq!(to_string(&entries, ';', Some('=')), "bold;font=12");
/// assert_eq!(to_string(&entries, '\n', Some('=')), "bold\nfont=12\n");
/// assert_eq!(to_string(&entries, ';', None), "bold;font12");
/// ```
#[must_use]
pub fn to_string(entries: &[Entry], sep: char, eq: Option<char>) -> String {
    let mut out = String::new();
    let mut next_sep = None;
    for entry in entries {
        let Tag::Active(tag) = &entry.tag else {
            continue;
        };
        if let Some(sep) = next_sep {
            out.push(sep);
        }
        out.push_str(tag);
        if let Some(arg) = &entry.arg {
            if let Some(eq) = eq {
                out.push(eq);
            }
            out.push_str(arg);
        }
        next_sep = Some(sep);
    }
    if next_sep == Some('\n') {
        out.push('\n');
    }
    out
}

/// Joins `entries` into a caller-supplied [`io::Write`] sink.
///
/// Same output as [`to_string`]. A `&mut [u8]` works as a fixed-size
/// target; if it fills up the write fails and [`Error::Io`] is returned.
///
/// # Errors
///
/// Returns an error when the sink rejects a write.
///
/// # Examples
///
/// ```rust
/// use optlex::{parse, to_writer};
///
/// let opts = parse("a=1,b");
/// let mut buf = Vec::new();
/// to_writer(&mut buf, &opts, ',', Some('=')).unwrap();
/// assert_eq!(buf, b"a=1,b");
/// ```
pub fn to_writer<W: io::Write>(
    mut writer: W,
    entries: &[Entry],
    sep: char,
    eq: Option<char>,
) -> Result<()> {
    let mut encoded = [0u8; 4];
    let mut next_sep = None;
    for entry in entries {
        let Tag::Active(tag) = &entry.tag else {
            continue;
        };
        if let Some(sep) = next_sep {
            write_char(&mut writer, sep, &mut encoded)?;
        }
        writer
            .write_all(tag.as_bytes())
            .map_err(|e| Error::io(&e.to_string()))?;
        if let Some(arg) = &entry.arg {
            if let Some(eq) = eq {
                write_char(&mut writer, eq, &mut encoded)?;
            }
            writer
                .write_all(arg.as_bytes())
                .map_err(|e| Error::io(&e.to_string()))?;
        }
        next_sep = Some(sep);
    }
    if next_sep == Some('\n') {
        write_char(&mut writer, '\n', &mut encoded)?;
    }
    Ok(())
}

fn write_char<W: Write>(writer: &mut W, ch: char, encoded: &mut [u8; 4]) -> Result<()> {
    writer
        .write_all(ch.encode_utf8(encoded).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}
