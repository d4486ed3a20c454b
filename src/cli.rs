use clap::{App, Arg, ArgMatches};
use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

use crate::diagnostics::TracingConfig;
use crate::dialect::{
    CompilerFamily, DialectError, ProfileError, RegistryError, TableError, TableFormat,
};

// Exit Codes for different types of errors
pub const ERR_UNKNOWN_PROFILE: i32 = 1;
pub const ERR_DUPLICATE_DEFINITION: i32 = 2;
pub const ERR_HEADER_ERROR: i32 = 3;
pub const ERR_REWRITE_ERROR: i32 = 4;
pub const ERR_IO_ERROR: i32 = 5;
pub const ERR_TABLE_ERROR: i32 = 6;

pub fn print_errs(errs: &[DialectError]) {
    for e in errs {
        eprintln!("{}", e);
    }
}

/// The exit code which reports `e`
pub fn exit_code(e: &DialectError) -> i32 {
    match e {
        DialectError::Registry(RegistryError::UnknownProfile(_)) => ERR_UNKNOWN_PROFILE,
        DialectError::Registry(RegistryError::DuplicateProfile(_)) => ERR_DUPLICATE_DEFINITION,
        DialectError::Profile(_) => ERR_DUPLICATE_DEFINITION,
        DialectError::Header { .. } => ERR_HEADER_ERROR,
        DialectError::Rewrite { .. } => ERR_REWRITE_ERROR,
        DialectError::Io(..) => ERR_IO_ERROR,
        DialectError::Table(TableError::Io(..)) => ERR_IO_ERROR,
        DialectError::Table(TableError::Profile(ProfileError::DuplicateSymbolDefinition {
            ..
        })) => ERR_DUPLICATE_DEFINITION,
        DialectError::Table(_) => ERR_TABLE_ERROR,
    }
}

pub fn configure_cli() -> clap::App<'static, 'static> {
    let app = App::new("Dialect Shim")
        .version("0.3.0")
        .about("Neutralizes the vendor extensions of embedded C compilers so that a standard C front end can parse code written for them")
        .arg(
            Arg::with_name("list")
                .long("list")
                .help("Prints the id of every available dialect profile")
        )
        .arg(
            Arg::with_name("profile")
                .short("p")
                .long("profile")
                .takes_value(true)
                .required_unless("list")
                .help("Id of the dialect profile to use, e.g. armclang, keil-c51, iar-stm8. Profile ids are matched exactly.")
        )
        .arg(
            Arg::with_name("prologue")
                .long("prologue")
                .conflicts_with_all(&["input", "export"])
                .help("Writes the header which a host force includes to neutralize the profile's dialect")
        )
        .arg(
            Arg::with_name("input")
                .short("i")
                .long("input")
                .takes_value(true)
                .help("Translation unit to rewrite with the rules of the profile")
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("File the result is written to.  Defaults to standard output.")
        )
        .arg(
            Arg::with_name("header")
                .long("header")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .requires("profile")
                .help("Dialect header, or directory of headers, to build the profile named by --profile from. May be given more than once.")
        )
        .arg(
            Arg::with_name("family")
                .long("family")
                .takes_value(true)
                .requires("header")
                .possible_values(&["arm-clang", "arm-cc", "keil-c51", "sdcc", "iar-arm", "iar-stm8", "other"])
                .help("Compiler family of a profile built from headers")
        )
        .arg(
            Arg::with_name("target")
                .long("target")
                .takes_value(true)
                .requires("header")
                .help("Target architecture of a profile built from headers")
        )
        .arg(
            Arg::with_name("check")
                .long("check")
                .requires("header")
                .help("Only validates the headers given with --header: reports conflicting definitions and malformed directives")
        )
        .arg(
            Arg::with_name("table")
                .long("table")
                .takes_value(true)
                .multiple(true)
                .number_of_values(1)
                .help("YAML or JSON table file holding an additional profile")
        )
        .arg(
            Arg::with_name("export")
                .long("export")
                .takes_value(true)
                .possible_values(&["yaml", "json"])
                .help("Writes the selected profile as a table file")
        )
        .arg(
            Arg::with_name("log-level")
                .long("log-level")
                .takes_value(true)
                .possible_values(&["off", "error", "warn", "info", "debug", "trace"])
                .help("Sets the level of the log messages written to standard error")
        )
        .arg(
            Arg::with_name("trace-lexer")
                .long("trace-lexer")
                .takes_value(true)
                .validator(validate_trace)
                .help("Traces every token the lexer produces on the given lines: all, N, ..N, N.., or N..M.  Requires --log-level debug.")
        )
        .arg(
            Arg::with_name("trace-header")
                .long("trace-header")
                .takes_value(true)
                .validator(validate_trace)
                .help("Traces every definition the header reader produces on the given lines.  Requires --log-level debug.")
        );
    app
}

fn validate_trace(v: String) -> Result<(), String> {
    v.parse::<TracingConfig>().map(|_| ())
}

pub fn get_log_level(args: &ArgMatches) -> Option<LevelFilter> {
    match args.value_of("log-level")? {
        "off" => Some(LevelFilter::Off),
        "error" => Some(LevelFilter::Error),
        "warn" => Some(LevelFilter::Warn),
        "info" => Some(LevelFilter::Info),
        "debug" => Some(LevelFilter::Debug),
        "trace" => Some(LevelFilter::Trace),
        _ => None,
    }
}

/// Installs the terminal logger.  Log messages go to standard error so that
/// they never mix with a prologue or rewritten unit on standard output.
pub fn configure_logging(level: LevelFilter) -> Result<(), log::SetLoggerError> {
    TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    )
}

pub fn get_trace_config(args: &ArgMatches, name: &str) -> TracingConfig {
    args.value_of(name)
        .and_then(|v| v.parse().ok())
        .unwrap_or(TracingConfig::Off)
}

pub fn get_headers<'a>(args: &'a ArgMatches) -> Vec<&'a str> {
    args.values_of("header")
        .map(|v| v.collect())
        .unwrap_or_default()
}

pub fn get_tables<'a>(args: &'a ArgMatches) -> Vec<&'a str> {
    args.values_of("table")
        .map(|v| v.collect())
        .unwrap_or_default()
}

pub fn get_family(args: &ArgMatches) -> CompilerFamily {
    args.value_of("family")
        .and_then(|f| f.parse().ok())
        .unwrap_or(CompilerFamily::Other)
}

pub fn get_export(args: &ArgMatches) -> Option<TableFormat> {
    args.value_of("export").and_then(|f| f.parse().ok())
}
