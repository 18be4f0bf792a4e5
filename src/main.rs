//! MD Highlighter - token dump tool
//!
//! Entry point for the binary. Handles CLI argument parsing, logging
//! initialization, and printing the token stream for a file or stdin.

use anyhow::Context;
use mdhighlighter::config::{Config, OutputFormat};
use mdhighlighter::error::{AppError, AppResult, ConfigError, FileError, FileResult};
use mdhighlighter::utils::{path, text};
use mdhighlighter::{spans, MarkdownTokenizer, Token};
use std::io::{Read, Write};
use std::path::PathBuf;

/// Application name for logging
const APP_NAME: &str = "mdhighlighter";

/// Parsed command line options
#[derive(Debug, Default)]
struct Flags {
    /// File to tokenize; stdin when absent
    input: Option<PathBuf>,
    /// Explicit configuration file
    config: Option<PathBuf>,
    /// Output format override
    format: Option<OutputFormat>,
}

fn main() {
    init_logging();

    if let Err(err) = run() {
        log::error!("{:#}", err);
        eprintln!("Error: {}", report(&err));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let flags = parse_args();
    log::debug!("Starting {} with {:?}", APP_NAME, flags);

    let config = load_config(&flags).context("failed to load configuration")?;
    let source = read_input(flags.input.as_ref())?;
    let tokens = MarkdownTokenizer::new(config.tokenizer.clone()).tokenize(&source);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match config.output.format {
        OutputFormat::Table => write_table(&mut out, &tokens, config.output.max_value_width)?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut out, &tokens).context("failed to write JSON")?;
            writeln!(out)?;
        }
    }

    Ok(())
}

/// Turn an error into the message shown to the user
fn report(err: &anyhow::Error) -> String {
    if let Some(e) = err.downcast_ref::<AppError>() {
        e.user_message()
    } else if let Some(e) = err.downcast_ref::<FileError>() {
        e.user_message()
    } else if let Some(e) = err.downcast_ref::<ConfigError>() {
        e.user_message()
    } else {
        format!("{:#}", err)
    }
}

/// Initialize the logging system
fn init_logging() {
    // Set default log level if not specified
    if std::env::var("RUST_LOG").is_err() {
        std::env::set_var("RUST_LOG", "info,mdhighlighter=debug");
    }

    env_logger::Builder::from_default_env()
        .format_timestamp_millis()
        .init();
}

/// Parse command line arguments
fn parse_args() -> Flags {
    let args: Vec<String> = std::env::args().collect();
    let mut flags = Flags::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-v" | "--version" => {
                print_version();
                std::process::exit(0);
            }
            "-j" | "--json" => flags.format = Some(OutputFormat::Json),
            "-t" | "--table" => flags.format = Some(OutputFormat::Table),
            "-c" | "--config" => {
                if i + 1 < args.len() {
                    flags.config = Some(PathBuf::from(&args[i + 1]));
                    i += 1;
                } else {
                    eprintln!("Error: --config requires a path argument");
                    std::process::exit(1);
                }
            }
            "-" => flags.input = None,
            arg if arg.starts_with('-') => {
                eprintln!("Unknown option: {}", arg);
                eprintln!("Use --help for usage information");
                std::process::exit(1);
            }
            _ => {
                let input = PathBuf::from(&args[i]);
                if !path::is_markdown(&input) {
                    log::warn!("{} does not look like a Markdown file", input.display());
                }
                flags.input = Some(input);
            }
        }
        i += 1;
    }

    flags
}

/// Load configuration and apply command line overrides
fn load_config(flags: &Flags) -> AppResult<Config> {
    let mut config = match &flags.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(format) = flags.format {
        config.output.format = format;
    }
    Ok(config)
}

/// Read the whole input, from a file or stdin
fn read_input(input: Option<&PathBuf>) -> FileResult<String> {
    match input {
        Some(file) => std::fs::read_to_string(file).map_err(|e| FileError::from_io(file.clone(), e)),
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .map_err(FileError::StdinError)?;
            Ok(buffer)
        }
    }
}

/// Write one line per token: byte range, type, value
fn write_table(out: &mut impl Write, tokens: &[Token], max_width: usize) -> std::io::Result<()> {
    for (range, token) in spans(tokens) {
        let value = text::truncate(&text::escape_value(&token.value), max_width);
        writeln!(
            out,
            "{:>6}..{:<6} {:<14} {}",
            range.start,
            range.end,
            format!("{:?}", token.token_type),
            value
        )?;
    }
    Ok(())
}

/// Print help message
fn print_help() {
    println!(
        r#"MD Highlighter - dump the Markdown token stream of a file

USAGE:
    mdhighlighter [OPTIONS] [FILE]

OPTIONS:
    -h, --help          Show this help message
    -v, --version       Show version information
    -j, --json          Print tokens as JSON
    -t, --table         Print tokens as a table (default)
    -c, --config PATH   Use a specific configuration file

Reads standard input when FILE is omitted or is "-".

EXAMPLES:
    mdhighlighter README.md
    mdhighlighter --json notes.md
    echo '***hi***' | mdhighlighter
"#
    );
}

/// Print version information
fn print_version() {
    println!("{} {}", APP_NAME, env!("CARGO_PKG_VERSION"));
}
