use std::fmt::Write;

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use pqdiag::rendering::{Utf8, report_position};

struct Case {
    name: &'static str,
    query: String,
    location: i64,
}

fn build_long_single_line() -> String {
    let mut src = String::with_capacity(64_000);
    src.push_str("SELECT ");
    for i in 0..4_000usize {
        let _ = write!(src, "column_{i}, ");
    }
    src.push_str("1 FROM wide_table");
    src
}

fn build_many_lines() -> String {
    let mut src = String::with_capacity(128_000);
    for i in 0..4_000usize {
        let _ = writeln!(src, "SELECT value_{i}, value_{} FROM t_{i}", i + 1);
        let _ = write!(src, "WHERE id = {i} AND name = 'n{i}'\r\n");
    }
    src
}

fn build_wide_characters() -> String {
    let mut src = String::with_capacity(64_000);
    src.push_str("SELECT '");
    for _ in 0..2_000usize {
        src.push_str("日本語テキスト");
    }
    src.push_str("' FRM t");
    src
}

fn build_cases() -> Vec<Case> {
    let long_line = build_long_single_line();
    let many_lines = build_many_lines();
    let wide = build_wide_characters();
    vec![
        Case {
            name: "short",
            query: "SELECT * FRM foo".to_string(),
            location: 10,
        },
        Case {
            name: "long_line_tail",
            location: long_line.len() as i64 - 10,
            query: long_line,
        },
        Case {
            name: "many_lines_tail",
            location: many_lines.chars().count() as i64 - 5,
            query: many_lines,
        },
        Case {
            name: "wide_characters",
            location: wide.chars().count() as i64 - 4,
            query: wide,
        },
    ]
}

fn bench_report_position(c: &mut Criterion) {
    let cases = build_cases();
    let mut group = c.benchmark_group("position/report");

    for case in &cases {
        group.throughput(Throughput::Bytes(case.query.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(case.name), case, |b, case| {
            b.iter(|| {
                let mut out = String::new();
                let detail = report_position(
                    &mut out,
                    black_box(case.query.as_str()),
                    black_box(case.location),
                    &Utf8,
                );
                black_box((out.len(), detail));
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_report_position);
criterion_main!(benches);
