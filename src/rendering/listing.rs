//! Full query listing appended after an error message.
//!
//! ```text
//! QUERY:
//!  1: SELECT a, b
//!  2: FROM fubar
//!  3: LEFT JOIN 1234 ON fu = 'bar'
//!  ═════════════╛
//!  4: WHERE a = 'a';
//! ```

use serde_json::Value;

use super::position::QueryPositionDetail;

const MARKER_FILL: char = '═';
const MARKER_TIP: char = '╛';

/// Appends a `QUERY:` block listing every line of `text` with its number,
/// plus a marker under the column in `detail` when one is given.
pub fn render_query_listing(
    out: &mut String,
    text: Option<&str>,
    detail: Option<&QueryPositionDetail>,
) {
    out.push_str("QUERY:");
    let text = match text {
        Some(text) if !text.is_empty() => text,
        Some(_) => {
            out.push_str("  \"\"");
            return;
        }
        None => {
            out.push_str("  null");
            return;
        }
    };

    let text = text.replace('\t', " ");
    let lines = split_lines(&text);
    let number_width = lines.len().to_string().len();

    for (i, line) in lines.iter().enumerate() {
        let line_num = i + 1;
        out.push('\n');
        out.push_str(&format!(
            " {:>width$}: {}",
            line_num,
            line,
            width = number_width
        ));

        if let Some(detail) = detail
            && detail.line_num == line_num
        {
            out.push_str("\n ");
            let fill = number_width + 2 + detail.screen_col;
            out.extend(std::iter::repeat_n(MARKER_FILL, fill));
            out.push(MARKER_TIP);
        }
    }
}

/// Appends the bound parameter values as a JSON array.
pub fn render_values(out: &mut String, values: &[Value]) {
    out.push_str("VALUES:  ");
    match serde_json::to_string(values) {
        Ok(json) => out.push_str(&json),
        Err(err) => {
            tracing::debug!(%err, "could not serialize query values");
            out.push_str("[]");
        }
    }
}

/// Splits on `\r\n`, `\r` and `\n`, keeping a trailing empty line.
pub(super) fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let bytes = text.as_bytes();
    let mut start = 0;
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'\r' => {
                lines.push(&text[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            b'\n' => {
                lines.push(&text[start..i]);
                i += 1;
                start = i;
            }
            _ => i += 1,
        }
    }
    lines.push(&text[start..]);
    lines
}
