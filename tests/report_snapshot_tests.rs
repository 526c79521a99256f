use insta::assert_snapshot;
use pqdiag::diagnostics::{
    ContextVisibility, DiagnosticField, ErrorRecord, MessageOptions, Verbosity,
};
use pqdiag::report::{ErrorReport, Query};
use serde_json::json;

fn missing_relation() -> ErrorRecord {
    ErrorRecord::default()
        .with_field(DiagnosticField::Severity, "ERROR")
        .with_field(DiagnosticField::SeverityNonlocalized, "ERROR")
        .with_field(DiagnosticField::SqlState, "42P01")
        .with_field(DiagnosticField::MessagePrimary, "relation \"fubar\" does not exist")
        .with_field(DiagnosticField::StatementPosition, "18")
}

fn plpgsql_failure() -> ErrorRecord {
    ErrorRecord::default()
        .with_field(DiagnosticField::Severity, "ERROR")
        .with_field(DiagnosticField::MessagePrimary, "column \"nope\" does not exist")
        .with_field(DiagnosticField::InternalPosition, "8")
        .with_field(DiagnosticField::InternalQuery, "SELECT nope FROM t")
        .with_field(DiagnosticField::Context, "PL/pgSQL function f() line 3 at RETURN")
}

const QUERY: &str = "SELECT a, b\nFROM fubar\nWHERE a = $1;";

#[test]
fn snapshot_report_with_listing_and_values() {
    let record = missing_relation();
    let report = ErrorReport::new(&record).with_query(Query::new(QUERY).with_values(vec![json!("a")]));

    assert_snapshot!(report.render(), @r#"
ERROR:  relation "fubar" does not exist
LINE 2: FROM fubar
             ^
QUERY:
 1: SELECT a, b
 2: FROM fubar
 ════════╛
 3: WHERE a = $1;

VALUES:  ["a"]
"#);
}

#[test]
fn snapshot_verbose_report() {
    let record = missing_relation()
        .with_field(DiagnosticField::SourceFile, "parse_relation.c")
        .with_field(DiagnosticField::SourceLine, "1384")
        .with_field(DiagnosticField::SourceFunction, "parserOpenTable");
    let options = MessageOptions::default().with_verbosity(Verbosity::Verbose);
    let report = ErrorReport::new(&record).with_query(QUERY).with_options(options);

    assert_snapshot!(report.to_string(), @r#"
ERROR:  42P01: relation "fubar" does not exist
LINE 2: FROM fubar
             ^
LOCATION:  parserOpenTable, parse_relation.c:1384
QUERY:
 1: SELECT a, b
 2: FROM fubar
 ════════╛
 3: WHERE a = $1;
"#);
}

#[test]
fn snapshot_internal_query_has_no_listing_marker() {
    let record = plpgsql_failure();
    let report = ErrorReport::new(&record).with_query("SELECT f()");

    assert_snapshot!(report.render(), @r#"
ERROR:  column "nope" does not exist
LINE 1: SELECT nope FROM t
               ^
QUERY:  SELECT nope FROM t
CONTEXT:  PL/pgSQL function f() line 3 at RETURN
QUERY:
 1: SELECT f()
"#);
}

#[test]
fn snapshot_terse_report_keeps_listing_without_marker() {
    let record = missing_relation();
    let options = MessageOptions::default().with_verbosity(Verbosity::Terse);
    let report = ErrorReport::new(&record).with_query(QUERY).with_options(options);

    assert_snapshot!(report.render(), @r#"
ERROR:  relation "fubar" does not exist at character 18
QUERY:
 1: SELECT a, b
 2: FROM fubar
 3: WHERE a = $1;
"#);
}

#[test]
fn hide_query_leaves_only_the_message() {
    let record = missing_relation();
    let options = MessageOptions::default().with_hide_query(true);
    let report = ErrorReport::new(&record).with_query(QUERY).with_options(options);
    assert_eq!(
        report.render(),
        "ERROR:  relation \"fubar\" does not exist\nLINE 2: FROM fubar\n             ^"
    );
}

#[test]
fn hide_query_text_still_lists_values() {
    let record = missing_relation();
    let options = MessageOptions {
        hide_query_text: true,
        ..MessageOptions::default()
    };
    let report = ErrorReport::new(&record)
        .with_query(Query::new(QUERY).with_values(vec![json!(1), json!(null)]))
        .with_options(options);
    assert!(report.render().ends_with("             ^\nVALUES:  [1,null]"));
}

#[test]
fn hide_query_values_keeps_listing() {
    let record = missing_relation();
    let options = MessageOptions {
        hide_query_values: true,
        ..MessageOptions::default()
    };
    let report = ErrorReport::new(&record)
        .with_query(Query::new(QUERY).with_values(vec![json!(1)]))
        .with_options(options);
    let rendered = report.render();
    assert!(rendered.ends_with(" 3: WHERE a = $1;"));
    assert!(!rendered.contains("VALUES"));
}

#[test]
fn report_without_query_is_just_the_message() {
    let record = missing_relation();
    assert_eq!(
        ErrorReport::new(&record).render(),
        "ERROR:  relation \"fubar\" does not exist at character 18"
    );
}

#[test]
fn record_query_is_used_when_report_has_none() {
    let record = missing_relation().with_query(QUERY);
    assert_eq!(
        ErrorReport::new(&record).render(),
        "ERROR:  relation \"fubar\" does not exist\nLINE 2: FROM fubar\n             ^"
    );
}

#[test]
fn notice_context_follows_visibility() {
    let record = ErrorRecord::default()
        .with_field(DiagnosticField::Severity, "NOTICE")
        .with_field(DiagnosticField::MessagePrimary, "table \"t\" does not exist, skipping")
        .with_field(DiagnosticField::Context, "SQL function \"cleanup\"");

    assert_eq!(
        ErrorReport::new(&record).render(),
        "NOTICE:  table \"t\" does not exist, skipping"
    );

    let options = MessageOptions::default().with_show_context(ContextVisibility::Always);
    assert_eq!(
        ErrorReport::new(&record).with_options(options).render(),
        "NOTICE:  table \"t\" does not exist, skipping\nCONTEXT:  SQL function \"cleanup\""
    );
}

#[test]
fn query_without_text_lists_only_values() {
    let record = ErrorRecord::default()
        .with_field(DiagnosticField::Severity, "ERROR")
        .with_field(DiagnosticField::MessagePrimary, "bind message supplies 2 parameters");
    let query = Query {
        text: None,
        values: Some(vec![json!(1), json!("two")]),
    };
    let report = ErrorReport::new(&record).with_query(query);
    assert_eq!(
        report.render(),
        "ERROR:  bind message supplies 2 parameters\nVALUES:  [1,\"two\"]"
    );

    let report = ErrorReport::new(&record).with_query(Query::default());
    assert_eq!(report.render(), "ERROR:  bind message supplies 2 parameters");
}

#[test]
fn empty_query_text_is_listed_as_empty_string() {
    let record = ErrorRecord::default().with_field(DiagnosticField::MessagePrimary, "empty query");
    let report = ErrorReport::new(&record).with_query("");
    assert_eq!(report.render(), "empty query\nQUERY:  \"\"");
}
