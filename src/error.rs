//! Error types for option-string serialization.
//!
//! Parsing is infallible: any byte sequence produces a deterministic
//! entry list, so only the serializer's writer mode can fail, and only
//! when the underlying sink rejects the write (for example a fixed-size
//! `&mut [u8]` that is too small).
//!
//! ## Examples
//!
//! ```rust
//! use optlex::{parse, to_writer, Error};
//!
//! let opts = parse("uppercase,bold,font=12");
//! let mut small = [0u8; 4];
//! let result = to_writer(&mut small[..], &opts, ',', Some('='));
//! assert!(matches!(result, Err(Error::Io(_))));
//! ```

use thiserror::Error;

/// Errors produced by this crate.
#[derive(Debug, Clone, Error)]
pub enum Error {
    /// The serializer's output sink failed.
    #[error("IO error: {0}")]
    Io(String),
}

impl Error {
    /// Creates an I/O error from a display message.
    pub fn io(msg: &str) -> Self {
        Error::Io(msg.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
