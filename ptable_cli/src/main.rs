//! # Periodic Table CLI
//!
//! Looks up one element and prints its record.
//!
//! ```text
//! ptable_cli <name|symbol|number|period,group> [--json] [--verbose]
//! ```
//!
//! With no query argument the CLI prompts for one on stdin.

mod logger;

use std::io::{self, BufRead, Write};
use std::num::{IntErrorKind, ParseIntError};
use std::process::ExitCode;

use log::LevelFilter;
use ptable_core::{Substance, TableError, TableResult};

const USAGE: &str = "Usage: ptable_cli <name|symbol|number|period,group> [--json] [--verbose]";

const EXIT_SUCCESS: u8 = 0;
/// The query was well formed but the lookup failed
const EXIT_LOOKUP_FAILED: u8 = 1;
const EXIT_USAGE: u8 = 2;

/// A single lookup, parsed from the command line
#[derive(Debug, Clone, PartialEq, Eq)]
enum Query {
    AtomicNumber(u32),
    Position { period: u32, group: u32 },
    /// Tried as a symbol first, then as a name
    Text(String),
}

impl Query {
    fn parse(input: &str) -> Result<Query, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err("empty query".to_string());
        }

        if let Some((period, group)) = input.split_once(',') {
            let period = parse_number("period", period)?;
            let group = parse_number("group", group)?;
            return Ok(Query::Position { period, group });
        }

        if input.chars().all(|c| c.is_ascii_digit()) {
            return parse_number("atomic number", input).map(Query::AtomicNumber);
        }

        Ok(Query::Text(input.to_string()))
    }

    fn run(&self) -> TableResult<Vec<&'static Substance>> {
        match self {
            Query::AtomicNumber(number) => Ok(vec![ptable_core::get_by_atomic_number(*number)?]),
            Query::Position { period, group } => ptable_core::get_by_position(*period, *group),
            Query::Text(text) => {
                if let Some(substance) = ptable_core::find_by_symbol(text)? {
                    return Ok(vec![substance]);
                }
                Ok(vec![ptable_core::get_by_name(text)?])
            }
        }
    }
}

fn parse_number(field: &str, text: &str) -> Result<u32, String> {
    let text = text.trim();
    text.parse().map_err(|e: ParseIntError| match e.kind() {
        IntErrorKind::PosOverflow => format!("{} '{}' is too large (maximum {})", field, text, u32::MAX),
        _ => format!("{} must be a non-negative integer, got '{}'", field, text),
    })
}

#[derive(Debug, Default, PartialEq, Eq)]
struct Args {
    query: Option<String>,
    json: bool,
    verbose: bool,
}

impl Args {
    fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Args, String> {
        let mut parsed = Args::default();
        for arg in args {
            match arg.as_str() {
                "--json" => parsed.json = true,
                "--verbose" | "-v" => parsed.verbose = true,
                "--help" | "-h" => return Err(USAGE.to_string()),
                flag if flag.starts_with("--") => return Err(format!("unknown flag '{}'", flag)),
                _ if parsed.query.is_some() => return Err("only one query may be given".to_string()),
                _ => parsed.query = Some(arg),
            }
        }
        Ok(parsed)
    }
}

fn prompt(text: &str) -> Option<String> {
    print!("{}", text);
    io::stdout().flush().ok()?;

    let mut input = String::new();
    io::stdin().lock().read_line(&mut input).ok()?;
    Some(input.trim().to_string())
}

fn main() -> ExitCode {
    let args = match Args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            if message != USAGE {
                eprintln!("{}", USAGE);
            }
            return ExitCode::from(EXIT_USAGE);
        }
    };

    let level = if args.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    if let Err(e) = logger::init(level) {
        eprintln!("Failed to install logger: {}", e);
    }

    let input = match args.query.clone() {
        Some(query) => query,
        None => match prompt("Enter element name, symbol, number, or period,group: ") {
            Some(input) => input,
            None => return ExitCode::from(EXIT_USAGE),
        },
    };

    ExitCode::from(run(&args, &input, &mut io::stdout().lock(), &mut io::stderr().lock()))
}

/// Run one query, writing results to `out` and diagnostics to `err`.
///
/// Returns the process exit code.
fn run(args: &Args, input: &str, out: &mut impl Write, err: &mut impl Write) -> u8 {
    let query = match Query::parse(input) {
        Ok(query) => query,
        Err(message) => {
            let _ = writeln!(err, "Error: {}", message);
            let _ = writeln!(err, "{}", USAGE);
            return EXIT_USAGE;
        }
    };
    log::debug!("running {:?}", query);

    match query.run() {
        Ok(substances) => match write_substances(&substances, args.json, out) {
            Ok(()) => EXIT_SUCCESS,
            Err(e) => {
                let _ = writeln!(err, "Error: {}", e);
                EXIT_LOOKUP_FAILED
            }
        },
        Err(e) => {
            let _ = report_error(&e, args.json, err);
            EXIT_LOOKUP_FAILED
        }
    }
}

fn write_substances(substances: &[&Substance], json: bool, out: &mut impl Write) -> io::Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *out, substances)?;
        return writeln!(out);
    }
    for substance in substances {
        write_summary(substance, out)?;
    }
    Ok(())
}

fn report_error(error: &TableError, json: bool, err: &mut impl Write) -> io::Result<()> {
    writeln!(err, "Error [{}]: {}", error.error_code(), error)?;
    if json {
        serde_json::to_writer_pretty(&mut *err, error)?;
        writeln!(err)?;
    }
    Ok(())
}

fn write_summary(s: &Substance, out: &mut impl Write) -> io::Result<()> {
    let phase = if s.phase.is_determined() { s.phase.display_name() } else { "unknown" };

    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  {} ({})", s.name, s.symbol)?;
    writeln!(out, "═══════════════════════════════════════")?;
    writeln!(out, "  {}", s)?;
    writeln!(out, "  Category:      {}", s.category)?;
    writeln!(out, "  Block:         {}", s.block)?;
    writeln!(out, "  Phase:         {}", phase)?;
    writeln!(out, "  Atomic mass:   {}", s.atomic_mass)?;
    writeln!(out, "  Configuration: {}", s.electron_configuration_semantic)?;
    writeln!(out, "  Shells:        {:?}", s.shells)?;
    if let Some(valence) = s.valence_shell_electrons() {
        writeln!(out, "  Valence shell: {} electrons", valence)?;
    }
    writeln!(out, "  Melting point: {}", format_optional(s.melt, "K"))?;
    writeln!(out, "  Boiling point: {}", format_optional(s.boil, "K"))?;
    writeln!(out, "  Density:       {}", format_optional(s.density, ""))?;
    writeln!(out, "  Electroneg.:   {}", format_optional(s.electronegativity_pauling, ""))?;
    writeln!(out, "  Ionization 1:  {}", format_optional(s.first_ionization_energy(), "kJ/mol"))?;
    if let Some(color) = s.color() {
        writeln!(out, "  CPK colour:    {}", color)?;
    }
    if let Some(discoverer) = &s.discovered_by {
        writeln!(out, "  Discovered by: {}", discoverer)?;
    }
    if let Some(image) = &s.image {
        writeln!(out, "  Image:         {}", image)?;
    }
    writeln!(out, "  Source:        {}", s.source)?;
    writeln!(out)
}

fn format_optional(value: Option<f64>, unit: &str) -> String {
    match value {
        Some(v) if unit.is_empty() => format!("{}", v),
        Some(v) => format!("{} {}", v, unit),
        None => "unknown".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Result<Args, String> {
        Args::parse(list.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_queries() {
        assert_eq!(Query::parse("26"), Ok(Query::AtomicNumber(26)));
        assert_eq!(Query::parse("6, 3"), Ok(Query::Position { period: 6, group: 3 }));
        assert_eq!(Query::parse(" iron "), Ok(Query::Text("iron".to_string())));
        assert!(Query::parse("").is_err());
        assert!(Query::parse("1,x").is_err());
        assert!(Query::parse("-1,2").is_err());
    }

    #[test]
    fn test_parse_number_overflow() {
        let err = Query::parse("99999999999").unwrap_err();
        assert_eq!(err, "atomic number '99999999999' is too large (maximum 4294967295)");

        let err = Query::parse("1,99999999999").unwrap_err();
        assert!(err.starts_with("group '99999999999' is too large"));

        let err = Query::parse("x,1").unwrap_err();
        assert!(err.contains("must be a non-negative integer"));
    }

    #[test]
    fn test_text_query_prefers_symbol() {
        let found = Query::Text("sn".to_string()).run().unwrap();
        assert_eq!(found[0].name, "Tin");

        let found = Query::Text("tin".to_string()).run().unwrap();
        assert_eq!(found[0].symbol, "Sn");
    }

    #[test]
    fn test_query_errors_pass_through() {
        let err = Query::AtomicNumber(0).run().unwrap_err();
        assert_eq!(err.error_code(), "OUT_OF_RANGE");

        let err = Query::Text("Unobtainium".to_string()).run().unwrap_err();
        assert_eq!(err.error_code(), "NOT_FOUND");
    }

    #[test]
    fn test_position_query() {
        let found = Query::Position { period: 1, group: 18 }.run().unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Helium");
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(
            args(&["He", "--json"]),
            Ok(Args { query: Some("He".to_string()), json: true, verbose: false })
        );
        assert_eq!(args(&["-v"]), Ok(Args { query: None, json: false, verbose: true }));
        assert!(args(&["He", "Ne"]).is_err());
        assert!(args(&["--nope"]).is_err());
        assert_eq!(args(&["--help"]), Err(USAGE.to_string()));
    }

    fn run_query(input: &str, json: bool) -> (u8, String, String) {
        let args = Args { query: Some(input.to_string()), json, verbose: false };
        let mut out = Vec::new();
        let mut err = Vec::new();
        let code = run(&args, input, &mut out, &mut err);
        (code, String::from_utf8(out).unwrap(), String::from_utf8(err).unwrap())
    }

    #[test]
    fn test_run_success() {
        let (code, out, err) = run_query("Fe", false);
        assert_eq!(code, EXIT_SUCCESS);
        assert!(out.contains("Iron (Fe)"));
        assert!(out.contains("Phase:         Solid"));
        assert!(out.contains("Valence shell: 2 electrons"));
        assert!(out.contains("Ionization 1:  762.5 kJ/mol"));
        assert!(err.is_empty());
    }

    #[test]
    fn test_run_json_success() {
        let (code, out, _) = run_query("6,3", true);
        assert_eq!(code, EXIT_SUCCESS);
        let records: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(records.as_array().unwrap().len(), 15);
        assert_eq!(records[0]["symbol"], "La");
    }

    #[test]
    fn test_run_lookup_failure() {
        let (code, out, err) = run_query("Unobtainium", false);
        assert_eq!(code, EXIT_LOOKUP_FAILED);
        assert!(out.is_empty());
        assert!(err.starts_with("Error [NOT_FOUND]"));
    }

    #[test]
    fn test_run_json_lookup_failure() {
        let (code, out, err) = run_query("0", true);
        assert_eq!(code, EXIT_LOOKUP_FAILED);
        assert!(out.is_empty());
        let (first, rest) = err.split_once('\n').unwrap();
        assert!(first.starts_with("Error [OUT_OF_RANGE]"));
        let details: TableError = serde_json::from_str(rest).unwrap();
        assert_eq!(details.error_code(), "OUT_OF_RANGE");
    }

    #[test]
    fn test_run_usage_error() {
        let (code, out, err) = run_query("1,x", false);
        assert_eq!(code, EXIT_USAGE);
        assert!(out.is_empty());
        assert!(err.contains(USAGE));

        assert_eq!(run_query("   ", true).0, EXIT_USAGE);
    }

    #[test]
    fn test_format_optional() {
        assert_eq!(format_optional(Some(20.271), "K"), "20.271 K");
        assert_eq!(format_optional(Some(1.5), ""), "1.5");
        assert_eq!(format_optional(None, "K"), "unknown");
    }
}
