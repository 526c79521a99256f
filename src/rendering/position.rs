//! Cursor display for error positions inside query text.
//!
//! A position is a one-based count of logical characters. The reporter
//! finds the line holding that character, cuts the line down to a fixed
//! screen width while keeping the character visible, and draws a caret
//! under it:
//!
//! ```text
//! LINE 1: SELECT * FRM foo
//!                  ^
//! ```

use serde::Serialize;

use super::encoding::{Encoding, column_width};

/// Screen width limit for the displayed line, in screen columns.
pub const DISPLAY_SIZE: usize = 60;
/// Columns to keep between the cursor and a right-hand cut.
pub const MIN_RIGHT_CUT: usize = 10;

const ELLIPSIS: &str = "...";

/// Where the target character sits in the query, measured before any
/// truncation for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryPositionDetail {
    /// Line holding the target (1-based)
    pub line_num: usize,
    /// Character number of the target within its line (1-based)
    pub char_num: usize,
    pub byte_index: usize,
    pub char_index: usize,
    /// Screen columns between the line start and the target
    pub screen_col: usize,
    pub line_start_byte: usize,
    pub line_start_char: usize,
    /// One past the last byte of the line, excluding the terminator
    pub line_end_byte: usize,
    pub line_end_char: usize,
}

/// Per-character byte offsets and starting screen columns for the query,
/// filled as far as the end of the line holding the target.
///
/// `byte_index.len() == column_index.len() == line_end + 1`; the last slot
/// records the position just past the line's final character.
#[derive(Debug)]
pub(crate) struct LineScan {
    /// Query with tabs replaced by single spaces
    text: String,
    pub(super) byte_index: Vec<usize>,
    pub(super) column_index: Vec<usize>,
    /// Characters scanned; the query length unless a line break stopped us
    pub(super) char_count: usize,
    pub(super) loc: usize,
    pub(super) loc_line: usize,
    pub(super) line_start: usize,
    pub(super) line_end: usize,
}

/// Character range of the displayed part of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Window {
    pub begin: usize,
    pub end: usize,
    pub left_truncated: bool,
    pub right_truncated: bool,
}

impl LineScan {
    /// Scans `query` for the zero-based character `loc`. Returns `None` if
    /// the working buffers cannot be allocated.
    pub(crate) fn new<E: Encoding + ?Sized>(query: &str, loc: usize, encoding: &E) -> Option<Self> {
        let mut text = String::new();
        let mut byte_index = Vec::new();
        let mut column_index = Vec::new();
        let reserved = text.try_reserve_exact(query.len()).is_ok()
            && byte_index.try_reserve_exact(query.len() + 1).is_ok()
            && column_index.try_reserve_exact(query.len() + 1).is_ok();
        if !reserved {
            tracing::debug!(len = query.len(), "cursor display skipped: allocation failed");
            return None;
        }

        // Tabs get no variable width here; they display as one space.
        text.extend(query.chars().map(|ch| if ch == '\t' { ' ' } else { ch }));

        let single_byte = encoding.max_char_len() == 1;
        let bytes = text.as_bytes();
        let mut offset = 0;
        let mut column = 0;
        let mut loc_line = 1;
        let mut line_start = 0;
        let mut line_end = None;
        let mut cno = 0;

        while offset < bytes.len() {
            let ch = bytes[offset];
            byte_index.push(offset);
            column_index.push(column);

            // Each \r or \n ends a line, except that \r\n counts once.
            if ch == b'\r' || ch == b'\n' {
                if cno < loc {
                    if ch == b'\r' || cno == 0 || bytes[byte_index[cno - 1]] != b'\r' {
                        loc_line += 1;
                    }
                    line_start = cno + 1;
                } else {
                    line_end = Some(cno);
                    break;
                }
            }

            if single_byte {
                column += 1;
                offset += 1;
            } else {
                column += column_width(encoding, &text, offset);
                offset += encoding.char_len(&text, offset).max(1);
            }
            cno += 1;
        }

        let line_end = match line_end {
            Some(end) => end,
            None => {
                byte_index.push(offset.min(bytes.len()));
                column_index.push(column);
                cno
            }
        };

        Some(Self {
            text,
            byte_index,
            column_index,
            char_count: cno,
            loc,
            loc_line,
            line_start,
            line_end,
        })
    }

    /// Whether the target falls inside the scanned text. A target one past
    /// the last character is still displayable.
    pub(crate) fn in_range(&self) -> bool {
        self.loc <= self.char_count
    }

    fn col(&self, index: usize) -> usize {
        self.column_index[index]
    }

    pub(crate) fn detail(&self) -> QueryPositionDetail {
        let loc = self.loc;
        QueryPositionDetail {
            line_num: self.loc_line,
            char_num: loc - self.line_start + 1,
            byte_index: self.byte_index[loc],
            char_index: loc,
            screen_col: self.col(loc) - self.col(self.line_start),
            line_start_byte: self.byte_index[self.line_start],
            line_start_char: self.line_start,
            line_end_byte: self.byte_index[self.line_end],
            line_end_char: self.line_end,
        }
    }

    /// Picks the part of the target line to display.
    ///
    /// Cutting only the right side is preferred since it keeps the leading
    /// context, but only while the target stays `MIN_RIGHT_CUT` columns
    /// clear of the cut. Otherwise the right side is cut to that margin and
    /// the left side is cut until the line fits. Near a wide character the
    /// margin can be off by a column.
    pub(crate) fn window(&self) -> Window {
        let loc = self.loc;
        let mut begin = self.line_start;
        let mut end = self.line_end;
        let mut left_truncated = false;
        let mut right_truncated = false;

        if self.col(end) - self.col(begin) > DISPLAY_SIZE {
            if self.col(begin) + DISPLAY_SIZE >= self.col(loc) + MIN_RIGHT_CUT {
                while self.col(end) - self.col(begin) > DISPLAY_SIZE {
                    end -= 1;
                }
                right_truncated = true;
            } else {
                while self.col(loc) + MIN_RIGHT_CUT < self.col(end) {
                    end -= 1;
                    right_truncated = true;
                }
                while self.col(end) - self.col(begin) > DISPLAY_SIZE {
                    begin += 1;
                    left_truncated = true;
                }
            }
            tracing::trace!(
                begin,
                end,
                left_truncated,
                right_truncated,
                "truncated cursor line"
            );
        }

        Window {
            begin,
            end,
            left_truncated,
            right_truncated,
        }
    }

    fn slice(&self, begin: usize, end: usize) -> Option<&str> {
        self.text.get(self.byte_index[begin]..self.byte_index[end])
    }
}

/// Converts a one-based position to a zero-based character index.
fn zero_based(location: i64) -> Option<usize> {
    location
        .checked_sub(1)
        .filter(|loc| *loc >= 0)
        .and_then(|loc| usize::try_from(loc).ok())
}

/// Locates a one-based character position in `query` without rendering.
pub fn locate<E: Encoding + ?Sized>(
    query: &str,
    location: i64,
    encoding: &E,
) -> Option<QueryPositionDetail> {
    let loc = zero_based(location)?;
    let scan = LineScan::new(query, loc, encoding)?;
    scan.in_range().then(|| scan.detail())
}

/// Appends a `LINE N: ...` line and a caret line pointing at the one-based
/// character `location` of `query`.
///
/// Writes nothing when the position is out of range or the display cannot
/// be built; the returned detail tells the caller whether output was
/// produced.
pub fn report_position<E: Encoding + ?Sized>(
    out: &mut String,
    query: &str,
    location: i64,
    encoding: &E,
) -> Option<QueryPositionDetail> {
    let Some(loc) = zero_based(location) else {
        tracing::debug!(location, "cursor display skipped: position before start");
        return None;
    };
    let scan = LineScan::new(query, loc, encoding)?;
    if !scan.in_range() {
        tracing::debug!(
            location,
            chars = scan.char_count,
            "cursor display skipped: position past end of query"
        );
        return None;
    }

    let window = scan.window();
    let Some(line_text) = scan.slice(window.begin, window.end) else {
        tracing::debug!(location, "cursor display skipped: cut inside a character");
        return None;
    };

    let mark = out.len();
    out.push_str(&format!("LINE {}: ", scan.loc_line));
    if window.left_truncated {
        out.push_str(ELLIPSIS);
    }

    // Width of the prefix just written, measured the same way as the query.
    let mut prefix_cols = 0;
    let mut i = mark;
    while i < out.len() {
        prefix_cols += column_width(encoding, out.as_str(), i);
        i += encoding.char_len(out.as_str(), i).max(1);
    }

    out.push_str(line_text);
    if window.right_truncated {
        out.push_str(ELLIPSIS);
    }
    out.push('\n');

    let caret_col = prefix_cols + scan.col(loc) - scan.col(window.begin);
    out.push_str(&" ".repeat(caret_col));
    out.push_str("^\n");

    Some(scan.detail())
}
