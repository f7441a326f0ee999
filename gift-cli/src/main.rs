//! Command-line interface for gift
//! Parses a GIFT question bank and prints the questions as JSON, YAML or a plain-text summary.
//!
//! Usage:
//!   gift `<path>` [--config `<file>`] [--format `<format>`] [--category `<name>`]
//!
//! Settings come from the built-in defaults, then `gift.toml` in the working directory
//! (or the file given with `--config`), then command-line flags.

use anyhow::{Context, Result};
use clap::{Arg, ArgAction, ArgMatches, Command};
use gift_config::Loader;
use gift_parser::{OutputFormat, Question, QuestionBankLoader};
use std::process::ExitCode;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

const LOCAL_CONFIG: &str = "gift.toml";

fn cli() -> Command {
    Command::new("gift")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Parse GIFT question banks")
        .arg_required_else_help(true)
        .arg(
            Arg::new("path")
                .help("Path to the question bank")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .short('c')
                .help("Configuration file layered over the defaults"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .short('f')
                .help("Output format")
                .value_parser(OutputFormat::ALL.map(|format| format.as_str())),
        )
        .arg(
            Arg::new("category")
                .long("category")
                .help("Category for questions before the first $CATEGORY directive"),
        )
        .arg(
            Arg::new("compact")
                .long("compact")
                .help("Print JSON on a single line")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Increase log verbosity (repeatable)")
                .action(ArgAction::Count),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .short('q')
                .help("Disable logging")
                .action(ArgAction::SetTrue)
                .conflicts_with("verbose"),
        )
}

fn main() -> ExitCode {
    let matches = cli().get_matches();
    init_tracing(&matches);

    match run(&matches) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(matches: &ArgMatches) {
    if matches.get_flag("quiet") {
        return;
    }

    let filter = match matches.get_count("verbose") {
        0 => "warn",
        1 => "info,gift_parser=debug",
        2 => "debug,gift_parser=trace",
        _ => "trace",
    };

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(matches: &ArgMatches) -> Result<()> {
    let mut loader = match matches.get_one::<String>("config") {
        Some(path) => Loader::new().with_file(path),
        None => Loader::new().with_optional_file(LOCAL_CONFIG),
    };
    if let Some(format) = matches.get_one::<String>("format") {
        loader = loader.set_override("output.format", format.as_str())?;
    }
    if let Some(category) = matches.get_one::<String>("category") {
        loader = loader.set_override("parser.default_category", category.as_str())?;
    }
    if matches.get_flag("compact") {
        loader = loader.set_override("output.pretty", false)?;
    }
    let config = loader.build().context("failed to load configuration")?;
    let options = config.parser_options()?;

    let path = matches
        .get_one::<String>("path")
        .context("missing input path")?;
    let report = QuestionBankLoader::from_path(path)?
        .with_options(options)
        .parse_report()
        .with_context(|| format!("failed to parse {path}"))?;

    for skipped in &report.skipped {
        tracing::warn!(
            block = skipped.ordinal,
            reason = ?skipped.reason,
            "skipped block: {}",
            first_line(&skipped.source)
        );
    }

    tracing::info!(
        questions = report.len(),
        skipped = report.skipped.len(),
        ignored_directives = report.ignored_directives,
        "parsed question bank"
    );

    print_output(config.output.format, &report.questions, config.output.pretty)?;

    eprintln!("Found {} questions", report.len());
    if report.is_empty() {
        eprintln!("Warning: no questions found in {path}");
    }
    if !report.skipped.is_empty() {
        eprintln!("Warning: skipped {} malformed block(s)", report.skipped.len());
    }
    Ok(())
}

fn print_output(format: OutputFormat, questions: &[Question], pretty: bool) -> Result<()> {
    let rendered = format
        .render(questions, pretty)
        .with_context(|| format!("failed to render {format} output"))?;
    if rendered.ends_with('\n') {
        print!("{rendered}");
    } else {
        println!("{rendered}");
    }
    Ok(())
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or("")
}
