#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `cli` implements the `schema-filter` command. It gathers filter rules
//! from `--filter` arguments and `--filter-file` sources, parses them with
//! [`filter_rules`], and either prints the parsed definitions or reports how
//! every rule judges the objects named on the command line.
//!
//! # Design
//!
//! The crate exposes [`run`] as the entry point. It accepts an iterator of
//! arguments together with handles for standard output and error so tests
//! can drive it without spawning a process. A [`clap`] command definition
//! recognises the flags; rule loading, object parsing, logging setup, and
//! rendering each live in a private module.
//!
//! # Invariants
//!
//! - `run` never panics; failures surface as exit code `1` with a diagnostic
//!   on the supplied error handle.
//! - Inline `--filter` rules precede rules read from files.
//! - Every rejected rule is reported before the command gives up.
//!
//! # Examples
//!
//! ```
//! let mut stdout = Vec::new();
//! let mut stderr = Vec::new();
//! let code = cli::run(
//!     ["schema-filter", "--filter", "IgnoreType(Table, dbo)", "Table:dbo.Orders"],
//!     &mut stdout,
//!     &mut stderr,
//! );
//!
//! assert_eq!(code, 0);
//! assert_eq!(stdout, b"Table:dbo.Orders\t0\tIgnoreType(Table, dbo)\ttrue\n");
//! assert!(stderr.is_empty());
//! ```

use std::ffi::OsString;
use std::io::Write;

use clap::{Arg, ArgAction, Command, builder::OsStringValueParser};
use filter_rules::{FilterSet, WriterReporter, parse_with_reporter};

mod logging;
mod object_spec;
mod output;
mod sources;

use object_spec::{ObjectSpec, parse_object_spec};
use sources::{append_rules_from_files, os_string_to_rule};

/// Maximum exit code representable by a Unix process.
const MAX_EXIT_CODE: i32 = u8::MAX as i32;

/// Program name used in help, version, and when no arguments are supplied.
const PROGRAM_NAME: &str = "schema-filter";

const CLI_TARGET: &str = "schema_filter::cli";

/// Deterministic help text describing the command-line surface.
const HELP_TEXT: &str = concat!(
    "schema-filter ",
    env!("CARGO_PKG_VERSION"),
    "\n",
    "\n",
    "Usage: schema-filter [-h] [-V] [-v] [--json] [-f RULE]... ",
    "[--filter-file FILE]... [OBJECT...]\n",
    "\n",
    "Parses schema filter rules such as 'IgnoreType(Table, dbo)' or\n",
    "'KeepName!([a-zA-Z]99.*)'. Without objects the parsed rules are printed\n",
    "in canonical form. Each OBJECT is written TYPE:PART[.PART...] and is\n",
    "reported against every rule as LABEL, RULE INDEX, RULE and APPLIES.\n",
    "\n",
    "Options:\n",
    "  -h, --help              Show this help message and exit.\n",
    "  -V, --version           Output version information and exit.\n",
    "  -f, --filter=RULE       Add RULE; may be repeated.\n",
    "      --filter-file=FILE  Read rules from FILE, one per line ('-' for stdin).\n",
    "      --json              Emit JSON instead of text.\n",
    "  -v, --verbose           Increase diagnostic logging; may be repeated.\n",
    "\n",
    "Set SCHEMA_FILTER_LOG to a tracing filter directive to control logging.\n",
);

/// Parsed command produced by [`parse_args`].
#[derive(Debug, Default)]
struct ParsedArgs {
    show_help: bool,
    show_version: bool,
    json: bool,
    verbosity: u8,
    filters: Vec<OsString>,
    filter_files: Vec<OsString>,
    objects: Vec<OsString>,
}

/// Builds the `clap` command used for parsing.
fn clap_command() -> Command {
    Command::new(PROGRAM_NAME)
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg_required_else_help(false)
        .arg(
            Arg::new("help")
                .long("help")
                .short('h')
                .help("Show this help message and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("version")
                .long("version")
                .short('V')
                .help("Output version information and exit.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("filter")
                .long("filter")
                .short('f')
                .value_name("RULE")
                .help("Add a filter rule.")
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("filter-file")
                .long("filter-file")
                .value_name("FILE")
                .help("Read filter rules from FILE.")
                .action(ArgAction::Append)
                .value_parser(OsStringValueParser::new()),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit JSON instead of text.")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase diagnostic logging.")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("objects")
                .value_name("OBJECT")
                .action(ArgAction::Append)
                .num_args(0..)
                .value_parser(OsStringValueParser::new()),
        )
}

/// Parses command-line arguments into a [`ParsedArgs`] structure.
fn parse_args<I, S>(arguments: I) -> Result<ParsedArgs, clap::Error>
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
{
    let mut args: Vec<OsString> = arguments.into_iter().map(Into::into).collect();

    if args.is_empty() {
        args.push(OsString::from(PROGRAM_NAME));
    }

    let mut matches = clap_command().try_get_matches_from(args)?;

    let filters = matches
        .remove_many::<OsString>("filter")
        .map(|values| values.collect())
        .unwrap_or_default();
    let filter_files = matches
        .remove_many::<OsString>("filter-file")
        .map(|values| values.collect())
        .unwrap_or_default();
    let objects = matches
        .remove_many::<OsString>("objects")
        .map(|values| values.collect())
        .unwrap_or_default();

    Ok(ParsedArgs {
        show_help: matches.get_flag("help"),
        show_version: matches.get_flag("version"),
        json: matches.get_flag("json"),
        verbosity: matches.get_count("verbose"),
        filters,
        filter_files,
        objects,
    })
}

/// Renders the help text describing the supported options.
fn render_help() -> String {
    HELP_TEXT.to_string()
}

fn render_version() -> String {
    format!("{PROGRAM_NAME} {}\n", env!("CARGO_PKG_VERSION"))
}

/// Runs the CLI using the provided argument iterator and output handles.
///
/// The function returns the process exit code that should be used by the
/// caller: `0` on success and `1` for usage, rule, object, or I/O failures.
pub fn run<I, S, Out, Err>(arguments: I, stdout: &mut Out, stderr: &mut Err) -> i32
where
    I: IntoIterator<Item = S>,
    S: Into<OsString>,
    Out: Write,
    Err: Write,
{
    match parse_args(arguments) {
        Ok(parsed) => execute(parsed, stdout, stderr),
        Err(error) => {
            let _ = write!(stderr, "{error}");
            1
        }
    }
}

fn execute<Out, Err>(parsed: ParsedArgs, stdout: &mut Out, stderr: &mut Err) -> i32
where
    Out: Write,
    Err: Write,
{
    let ParsedArgs {
        show_help,
        show_version,
        json,
        verbosity,
        filters,
        filter_files,
        objects,
    } = parsed;

    if show_help {
        return write_or_fail(stdout, stderr, render_help().as_bytes());
    }
    if show_version {
        return write_or_fail(stdout, stderr, render_version().as_bytes());
    }

    logging::init_logging(verbosity);

    let mut rules: Vec<String> = filters.into_iter().map(os_string_to_rule).collect();
    if let Err(error) = append_rules_from_files(&mut rules, &filter_files) {
        let _ = writeln!(stderr, "error: {error}");
        return 1;
    }

    let Some(set) = build_filter_set(&rules, stderr) else {
        return 1;
    };

    let mut specs: Vec<ObjectSpec> = Vec::with_capacity(objects.len());
    for object in objects {
        match parse_object_spec(&os_string_to_rule(object)) {
            Ok(spec) => specs.push(spec),
            Err(error) => {
                let _ = writeln!(stderr, "error: {error}");
                return 1;
            }
        }
    }

    tracing::debug!(
        target: CLI_TARGET,
        rules = set.len(),
        objects = specs.len(),
        json,
        "evaluating filter rules"
    );

    let written = match (specs.is_empty(), json) {
        (true, false) => output::write_definitions(stdout, &set),
        (true, true) => output::write_definitions_json(stdout, &set),
        (false, false) => output::write_verdicts(stdout, &set, &specs),
        (false, true) => output::write_verdicts_json(stdout, &set, &specs),
    };
    match written.and_then(|()| stdout.flush()) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "error: failed to write output: {error}");
            1
        }
    }
}

/// Parses and compiles `rules`, reporting every rejected rule to `stderr`.
fn build_filter_set<Err: Write>(rules: &[String], stderr: &mut Err) -> Option<FilterSet> {
    let mut reporter = WriterReporter::new(&mut *stderr);
    let mut definitions = Vec::with_capacity(rules.len());
    let mut rejected = false;
    for rule in rules {
        match parse_with_reporter(rule, &mut reporter) {
            Ok(definition) => definitions.push(definition),
            Err(_) => rejected = true,
        }
    }
    if rejected {
        return None;
    }

    match FilterSet::from_definitions(definitions) {
        Ok(set) => Some(set),
        Err(error) => {
            let _ = writeln!(stderr, "error: {error}");
            None
        }
    }
}

fn write_or_fail<Out: Write, Err: Write>(stdout: &mut Out, stderr: &mut Err, text: &[u8]) -> i32 {
    match stdout.write_all(text).and_then(|()| stdout.flush()) {
        Ok(()) => 0,
        Err(error) => {
            let _ = writeln!(stderr, "error: failed to write output: {error}");
            1
        }
    }
}

/// Converts a numeric exit code into an [`std::process::ExitCode`].
#[must_use]
pub fn exit_code_from(status: i32) -> std::process::ExitCode {
    let clamped = status.clamp(0, MAX_EXIT_CODE);
    std::process::ExitCode::from(clamped as u8)
}
