//! Character length and screen width primitives for client encodings.
//!
//! Offsets are byte offsets into the text. Implementations must always
//! report a length of at least one byte so scans make progress.

use unicode_width::UnicodeWidthChar;

/// Encoding-specific primitives used by the cursor display.
pub trait Encoding {
    /// Longest character in bytes; 1 means a single-byte encoding.
    fn max_char_len(&self) -> usize;

    /// Byte length of the character starting at `offset`.
    fn char_len(&self, text: &str, offset: usize) -> usize;

    /// Screen columns of the character starting at `offset`. May be zero or
    /// negative for combining and control characters.
    fn display_width(&self, text: &str, offset: usize) -> isize;
}

/// UTF-8 with East Asian wide characters taking two columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl Encoding for Utf8 {
    fn max_char_len(&self) -> usize {
        4
    }

    fn char_len(&self, text: &str, offset: usize) -> usize {
        char_at(text, offset).map_or(1, char::len_utf8)
    }

    fn display_width(&self, text: &str, offset: usize) -> isize {
        match char_at(text, offset) {
            Some(ch) if ch.is_control() => -1,
            Some(ch) => ch.width().map_or(-1, |w| w as isize),
            None => -1,
        }
    }
}

/// Single-byte encoding: one byte, one character, one column.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SqlAscii;

impl Encoding for SqlAscii {
    fn max_char_len(&self) -> usize {
        1
    }

    fn char_len(&self, _text: &str, _offset: usize) -> usize {
        1
    }

    fn display_width(&self, text: &str, offset: usize) -> isize {
        match text.as_bytes().get(offset) {
            Some(b) if b.is_ascii_control() => -1,
            Some(_) => 1,
            None => -1,
        }
    }
}

/// Client encodings a record can be tagged with.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ClientEncoding {
    #[default]
    Utf8,
    SqlAscii,
}

impl ClientEncoding {
    /// Accepts the server's spelling of the encoding name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().replace(['-', '_'], "").as_str() {
            "UTF8" | "UNICODE" => Some(ClientEncoding::Utf8),
            "SQLASCII" => Some(ClientEncoding::SqlAscii),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            ClientEncoding::Utf8 => "UTF8",
            ClientEncoding::SqlAscii => "SQL_ASCII",
        }
    }

    pub fn as_encoding(self) -> &'static dyn Encoding {
        match self {
            ClientEncoding::Utf8 => &Utf8,
            ClientEncoding::SqlAscii => &SqlAscii,
        }
    }
}

impl Encoding for ClientEncoding {
    fn max_char_len(&self) -> usize {
        self.as_encoding().max_char_len()
    }

    fn char_len(&self, text: &str, offset: usize) -> usize {
        self.as_encoding().char_len(text, offset)
    }

    fn display_width(&self, text: &str, offset: usize) -> isize {
        self.as_encoding().display_width(text, offset)
    }
}

/// Display width with zero and negative widths collapsed to one column.
pub fn column_width<E: Encoding + ?Sized>(encoding: &E, text: &str, offset: usize) -> usize {
    encoding.display_width(text, offset).max(1) as usize
}

fn char_at(text: &str, offset: usize) -> Option<char> {
    text.get(offset..).and_then(|rest| rest.chars().next())
}
