extern crate log;
extern crate simplelog;

use std::path::Path;

use clap::ArgMatches;
use log::info;

use dialect_shim::cli::*;
use dialect_shim::diagnostics::TracingConfig;
use dialect_shim::dialect::*;
use dialect_shim::io::{get_files, read_source, write_output, HEADER_FILE_EXT};

fn main() {
    let config = configure_cli().get_matches();

    if let Some(level) = get_log_level(&config) {
        if let Err(e) = configure_logging(level) {
            eprintln!("Failed to configure logger: {}", e);
        }
    }

    if let Err(e) = run(&config) {
        let code = exit_code(&e);
        print_errs(&[e]);
        std::process::exit(code);
    }
}

fn run(config: &ArgMatches) -> Result<(), DialectError> {
    let mut registry = Registry::builtin()?;

    for path in get_tables(config) {
        let profile = Table::load(Path::new(path))?.into_profile(path)?;
        info!("Read {} from {}", profile, path);
        registry.register(profile)?;
    }

    let headers = get_headers(config);
    if !headers.is_empty() {
        let id = config.value_of("profile").unwrap_or_default();
        let target = config.value_of("target").unwrap_or("unknown");
        let mut builder = ProfileBuilder::new(id, get_family(config), target);
        load_headers(&mut builder, &headers, config)?;
        let profile = builder.build();

        if config.is_present("check") {
            println!("{}: {} rules, no conflicts", profile, profile.len());
            return Ok(());
        }
        registry.register(profile)?;
    }

    if config.is_present("list") {
        for profile in registry.profiles() {
            println!("{:<10} {}", profile.id(), profile.description());
        }
        return Ok(());
    }

    let id = config.value_of("profile").unwrap_or_default();
    let output = config.value_of("output");

    if config.is_present("prologue") {
        write_output(output, &registry.prologue(id)?)?;
    } else if let Some(input) = config.value_of("input") {
        let source = read_source(Path::new(input))?;
        let rewriter = registry.rewriter(id, get_trace_config(config, "trace-lexer"))?;
        let text = rewriter
            .rewrite(&source)
            .map_err(|error| DialectError::Rewrite {
                source: source.name().into(),
                error,
            })?;
        write_output(output, &text)?;
    } else if let Some(format) = get_export(config) {
        let mut buf = vec![];
        Table::extract(registry.lookup(id)?).write(&mut buf, format)?;
        write_output(output, &String::from_utf8_lossy(&buf))?;
    } else {
        // Without an action, report the profile's rules
        let profile = registry.lookup(id)?;
        println!("{}: {}", profile, profile.description());
        for rule in profile.rules() {
            println!("    {}", rule);
        }
    }

    Ok(())
}

/// Reads every header named on the command line into `builder`.
fn load_headers(
    builder: &mut ProfileBuilder,
    headers: &[&str],
    config: &ArgMatches,
) -> Result<(), DialectError> {
    let tracing = match get_trace_config(config, "trace-header") {
        TracingConfig::Off => get_trace_config(config, "trace-lexer"),
        tracing => tracing,
    };

    for header in headers {
        let path = Path::new(header);
        let files = get_files(path, HEADER_FILE_EXT)
            .map_err(|e| DialectError::Io(header.to_string(), e))?;
        for file in files {
            let source = read_source(&file)?;
            load_header(builder, &source, tracing)?;
        }
    }

    Ok(())
}
