use std::{
    env, fs,
    io::{self, Read},
    process,
};

use pqdiag::{
    diagnostics::{ContextVisibility, DiagError, ErrorRecord, MessageOptions, Verbosity},
    report::{ErrorReport, Query},
};

fn main() {
    let mut args: Vec<String> = env::args().skip(1).collect();

    if args.iter().any(|arg| arg == "-h" || arg == "--help") {
        print_help();
        return;
    }

    let mut options = MessageOptions::from_env();
    let hide_query = args.iter().any(|arg| arg == "--hide-query");
    if hide_query {
        args.retain(|arg| arg != "--hide-query");
        options = options.with_hide_query(true);
    }

    let Some(verbosity) = extract_value::<Verbosity>(&mut args, "--verbosity") else {
        process::exit(2);
    };
    if let Some(verbosity) = verbosity {
        options = options.with_verbosity(verbosity);
    }
    let Some(show_context) = extract_value::<ContextVisibility>(&mut args, "--context") else {
        process::exit(2);
    };
    if let Some(show_context) = show_context {
        options = options.with_show_context(show_context);
    }
    let Some(query_path) = extract_value::<String>(&mut args, "--query") else {
        process::exit(2);
    };

    if args.len() != 1 {
        print_help();
        process::exit(2);
    }

    if let Err(err) = render(&args[0], query_path.as_deref(), options) {
        eprintln!("Error: {}", err);
        process::exit(1);
    }
}

fn render(record_path: &str, query_path: Option<&str>, options: MessageOptions) -> Result<(), DiagError> {
    let json = read_input(record_path)?;
    let record = ErrorRecord::from_json_str(&json)?;

    let mut report = ErrorReport::new(&record).with_options(options);
    if let Some(path) = query_path {
        report = report.with_query(Query::new(fs::read_to_string(path)?));
    }
    println!("{}", report.render());
    Ok(())
}

fn read_input(path: &str) -> io::Result<String> {
    if path == "-" {
        let mut input = String::new();
        io::stdin().read_to_string(&mut input)?;
        return Ok(input);
    }
    fs::read_to_string(path)
}

/// Removes `flag <value>` from `args`. `None` means a usage error was
/// already reported; `Some(None)` means the flag was not given.
fn extract_value<T>(args: &mut Vec<String>, flag: &str) -> Option<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let mut value = None;
    let mut i = 0;
    while i < args.len() {
        if args[i] == flag {
            if i + 1 >= args.len() {
                eprintln!("Usage: pqdiag {} <value> <record.json>", flag);
                return None;
            }
            let raw = args.remove(i + 1);
            args.remove(i);
            match raw.parse::<T>() {
                Ok(parsed) => value = Some(parsed),
                Err(err) => {
                    eprintln!("Error: {}: {}", flag, err);
                    return None;
                }
            }
            continue;
        }
        i += 1;
    }
    Some(value)
}

fn print_help() {
    println!(
        "\
pqdiag: render PostgreSQL error records

Usage:
  pqdiag [flags] <record.json>
  pqdiag [flags] -                 Read the record from stdin

The record is a JSON object keyed by field codes (\"S\", \"C\", \"M\", ...) or
names (\"severity\", \"code\", \"message\", ...). A \"query\" key holds the
statement text used for the cursor display.

Flags:
  --verbosity <v>    terse, default, verbose or sqlstate
  --context <c>      never, errors or always
  --query <file>     Append a listing of the query in <file>
  --hide-query       Do not append the query listing
  -h, --help         Show this help message

Environment:
  PQDIAG_VERBOSITY, PQDIAG_SHOW_CONTEXT   Defaults for --verbosity and --context
"
    );
}
