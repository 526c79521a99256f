use serde_json::json;

use super::encoding::Utf8;
use super::listing::{render_query_listing, render_values, split_lines};
use super::position::locate;

#[test]
fn lists_numbered_lines_with_marker_under_error_column() {
    let query = "SELECT a, b\nFROM fubar\nWHERE a = 'a';";
    let detail = locate(query, 18, &Utf8).expect("in range");

    let mut out = String::new();
    render_query_listing(&mut out, Some(query), Some(&detail));
    assert_eq!(
        out,
        format!(
            "QUERY:\n 1: SELECT a, b\n 2: FROM fubar\n {}╛\n 3: WHERE a = 'a';",
            "═".repeat(8)
        )
    );
}

#[test]
fn marker_tip_lines_up_with_target_character() {
    let query = "SELECT 1;\nSELECT '日本' FRM t";
    let detail = locate(query, 23, &Utf8).expect("in range");

    let mut out = String::new();
    render_query_listing(&mut out, Some(query), Some(&detail));
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[2], " 2: SELECT '日本' FRM t");
    // Wide characters count double, so compare screen columns.
    assert_eq!(lines[3], format!(" {}╛", "═".repeat(3 + 14)));
}

#[test]
fn pads_line_numbers_to_widest() {
    let query = (1..=10).map(|i| format!("-- {}", i)).collect::<Vec<_>>().join("\n");
    let mut out = String::new();
    render_query_listing(&mut out, Some(&query), None);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[1], "  1: -- 1");
    assert_eq!(lines[10], " 10: -- 10");
}

#[test]
fn replaces_tabs_in_listing() {
    let mut out = String::new();
    render_query_listing(&mut out, Some("SELECT\t1"), None);
    assert_eq!(out, "QUERY:\n 1: SELECT 1");
}

#[test]
fn missing_or_empty_text_is_shown_literally() {
    let mut out = String::new();
    render_query_listing(&mut out, None, None);
    assert_eq!(out, "QUERY:  null");

    let mut out = String::new();
    render_query_listing(&mut out, Some(""), None);
    assert_eq!(out, "QUERY:  \"\"");
}

#[test]
fn values_render_as_json_array() {
    let mut out = String::new();
    render_values(&mut out, &[json!("D"), json!(1), json!(null)]);
    assert_eq!(out, "VALUES:  [\"D\",1,null]");
}

#[test]
fn splits_on_every_line_terminator_style() {
    assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
    assert_eq!(split_lines("a\n"), vec!["a", ""]);
    assert_eq!(split_lines("\n\r"), vec!["", "", ""]);
    assert_eq!(split_lines(""), vec![""]);
}
