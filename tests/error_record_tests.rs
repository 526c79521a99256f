use pqdiag::diagnostics::{
    ContextVisibility, DiagError, DiagnosticField, ErrorRecord, ResultStatus, Verbosity,
};
use pqdiag::rendering::{ClientEncoding, build_message, error_message};

fn render_json(json: &str, verbosity: Verbosity) -> String {
    let record = ErrorRecord::from_json_str(json).expect("valid record");
    error_message(&record, verbosity, ContextVisibility::ErrorsOnly)
}

#[test]
fn renders_record_keyed_by_codes() {
    let json = r#"{
        "S": "ERROR",
        "V": "ERROR",
        "C": "42601",
        "M": "syntax error at or near \"FRM\"",
        "P": "10",
        "query": "SELECT * FRM foo"
    }"#;
    assert_eq!(
        render_json(json, Verbosity::Default),
        format!(
            "ERROR:  syntax error at or near \"FRM\"\nLINE 1: SELECT * FRM foo\n{}^\n",
            " ".repeat(17)
        )
    );
}

#[test]
fn renders_record_keyed_by_names() {
    let json = r#"{
        "severity": "ERROR",
        "code": "22012",
        "message": "division by zero",
        "position": 8,
        "query": "SELECT 1/0"
    }"#;
    assert_eq!(
        render_json(json, Verbosity::Verbose),
        format!(
            "ERROR:  22012: division by zero\nLINE 1: SELECT 1/0\n{}^\n",
            " ".repeat(15)
        )
    );
}

#[test]
fn every_position_in_a_short_query_lines_up() {
    let query = "SELECT a,\n  b FROM t";
    for position in 1..=query.chars().count() as i64 + 1 {
        let record = ErrorRecord::default()
            .with_field(DiagnosticField::MessagePrimary, "m")
            .with_field(DiagnosticField::StatementPosition, position.to_string())
            .with_query(query);
        let out = error_message(&record, Verbosity::Default, ContextVisibility::Never);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines.len(), 3, "position {position}: {out:?}");

        let caret = lines[2].find('^').expect("caret");
        assert!(lines[2][..caret].bytes().all(|b| b == b' '));

        let line_num = if position <= 10 { 1 } else { 2 };
        let target_line = query.lines().nth(line_num - 1).expect("line");
        let line_start = if line_num == 1 { 0 } else { 10 };
        assert_eq!(lines[1], format!("LINE {line_num}: {target_line}"));
        assert_eq!(caret, "LINE 1: ".len() + (position as usize - 1 - line_start));
    }
}

#[test]
fn notices_are_nonfatal() {
    let record = ErrorRecord::from_json_str(
        r#"{"S": "WARNUNG", "V": "WARNING", "M": "m", "W": "c"}"#,
    )
    .expect("record");
    assert_eq!(record.status, ResultStatus::NonfatalError);
    assert_eq!(
        error_message(&record, Verbosity::Default, ContextVisibility::ErrorsOnly),
        "WARNUNG:  m\n"
    );
}

#[test]
fn client_encoding_from_json_drives_cursor_math() {
    let json = r#"{"M": "m", "P": "4", "query": "SELECT 1", "clientEncoding": "SQL_ASCII"}"#;
    let record = ErrorRecord::from_json_str(json).expect("record");
    assert_eq!(record.encoding, ClientEncoding::SqlAscii);

    let mut out = String::new();
    let meta = build_message(
        &mut out,
        Some(&record),
        Verbosity::Default,
        ContextVisibility::ErrorsOnly,
    );
    assert_eq!(out, format!("m\nLINE 1: SELECT 1\n{}^\n", " ".repeat(11)));
    assert_eq!(meta.position.map(|p| p.screen_col), Some(3));
    assert!(!meta.internal_query);
}

#[test]
fn rejects_malformed_input() {
    assert!(matches!(
        ErrorRecord::from_json_str("[]"),
        Err(DiagError::NotAnObject(_))
    ));
    assert!(matches!(
        ErrorRecord::from_json_str("not json"),
        Err(DiagError::Json(_))
    ));
}
