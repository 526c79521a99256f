//! Text rendering for error records.
//!
//! `message` assembles the diagnostic lines, `position` draws the cursor
//! display under the offending query line, `listing` prints the whole query
//! with a marker, and `encoding` supplies the per-character length and
//! width rules the cursor math depends on.

pub mod encoding;
pub mod listing;
pub mod message;
pub mod position;

pub use encoding::{ClientEncoding, Encoding, SqlAscii, Utf8};
pub use listing::{render_query_listing, render_values};
pub use message::{MessageMeta, build_message, error_message, parse_position};
pub use position::{DISPLAY_SIZE, MIN_RIGHT_CUT, QueryPositionDetail, locate, report_position};

#[cfg(test)]
mod listing_test;
