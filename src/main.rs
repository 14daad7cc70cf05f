use anyhow::{Context, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use colored::*;
use serde::Serialize;
use std::fs;
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};

use reflow_lib::config as reflow_config;
use reflow_lib::exit_codes::exit;
use reflow_lib::{Cursor, Document, InMemoryDocument, ReflowOutcome, WrapWidth, reflow_current_paragraph};

use reflow_config::Config;

#[derive(Parser)]
#[command(name = "reflow", version, about = "Reflow the paragraph around a line to a fixed width")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Reflow the paragraph touching a line of a file
    Fill(FillArgs),
    /// Create a default configuration file
    Init {
        /// Where to write the file
        #[arg(default_value = ".reflow.toml")]
        path: PathBuf,
    },
    /// Print the JSON schema of the configuration file
    Schema,
}

#[derive(Args)]
struct FillArgs {
    /// File to read, or "-" for stdin
    file: PathBuf,

    /// Line inside the paragraph (1-based)
    #[arg(short, long)]
    line: NonZeroUsize,

    /// Cursor column on that line, in characters (0-based)
    #[arg(short, long, default_value_t = 0)]
    column: usize,

    /// Target line width, overrides the configuration file
    #[arg(short, long)]
    width: Option<WrapWidth>,

    /// Path to a configuration file
    #[arg(long, conflicts_with = "no_config")]
    config: Option<PathBuf>,

    /// Ignore configuration files and use the defaults
    #[arg(long)]
    no_config: bool,

    /// Write the result back to the file instead of stdout
    #[arg(short, long, conflicts_with = "check")]
    in_place: bool,

    /// Only report whether the paragraph needs reflowing (exit code 1 if so)
    #[arg(long)]
    check: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    output_format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

/// Machine-readable summary of a fill run
#[derive(Serialize)]
struct FillReport<'a> {
    file: String,
    wrap_width: WrapWidth,
    outcome: &'a ReflowOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    text: Option<&'a str>,
}

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == "-"
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if is_stdin(path) {
        let mut content = String::new();
        io::stdin()
            .read_to_string(&mut content)
            .context("Failed to read from stdin")?;
        Ok(content)
    } else {
        fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
    }
}

fn load_config(args: &FillArgs) -> anyhow::Result<Config> {
    if args.no_config {
        return Ok(Config::default());
    }
    if let Some(path) = &args.config {
        return Ok(Config::load(Some(path.as_path()))?);
    }

    let start_dir = if is_stdin(&args.file) {
        std::env::current_dir().context("Failed to get current directory")?
    } else {
        match args.file.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => std::env::current_dir().context("Failed to get current directory")?,
        }
    };
    Ok(Config::discover(&start_dir)?)
}

/// Run the fill subcommand. Returns true when `--check` found work to do.
fn run_fill(args: &FillArgs) -> anyhow::Result<bool> {
    if args.in_place && is_stdin(&args.file) {
        bail!("--in-place cannot be used when reading from stdin");
    }

    let content = read_input(&args.file)?;
    let config = load_config(args)?;
    let mut options = config.reflow_options();
    if let Some(width) = args.width {
        options.wrap_width = width;
    }
    log::debug!(
        "[reflow-cli] Filling {} at line {} with width {}",
        args.file.display(),
        args.line,
        options.wrap_width
    );

    let mut doc = InMemoryDocument::from_text(&content);
    doc.set_cursor(Cursor::new(args.line.get() - 1, args.column))?;
    let outcome = reflow_current_paragraph(&mut doc, &options)?;
    let changed = matches!(outcome, ReflowOutcome::Reflowed { changed: true, .. });
    let new_content = doc.text();

    if args.check {
        match args.output_format {
            OutputFormat::Json => print_report(args, options.wrap_width, &outcome, None)?,
            OutputFormat::Text => {
                if let ReflowOutcome::Reflowed { range, changed: true, .. } = &outcome {
                    println!(
                        "{}:{}-{}: paragraph needs reflow at width {}",
                        args.file.display(),
                        range.begin + 1,
                        range.end,
                        options.wrap_width
                    );
                }
            }
        }
        return Ok(changed);
    }

    if args.in_place {
        if changed {
            fs::write(&args.file, &new_content).with_context(|| format!("Failed to write {}", args.file.display()))?;
        }
        if args.output_format == OutputFormat::Json {
            print_report(args, options.wrap_width, &outcome, None)?;
        }
        return Ok(false);
    }

    match args.output_format {
        OutputFormat::Json => print_report(args, options.wrap_width, &outcome, Some(&new_content))?,
        OutputFormat::Text => print!("{new_content}"),
    }
    Ok(false)
}

fn print_report(args: &FillArgs, wrap_width: WrapWidth, outcome: &ReflowOutcome, text: Option<&str>) -> anyhow::Result<()> {
    let report = FillReport {
        file: args.file.display().to_string(),
        wrap_width,
        outcome,
        text,
    };
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Handle the schema subcommand
fn handle_schema_command() {
    let schema = schemars::schema_for!(Config);
    let schema_json = serde_json::to_string_pretty(&schema).unwrap_or_else(|e| {
        eprintln!("{}: Failed to serialize schema: {}", "Error".red().bold(), e);
        exit::tool_error();
    });
    println!("{schema_json}");
}

fn main() {
    let cli = Cli::parse();

    // Warn by default, RUST_LOG refines it and --verbose overrides both
    let mut logger = env_logger::Builder::new();
    logger.filter_level(log::LevelFilter::Warn).parse_default_env();
    if cli.verbose {
        logger.filter_level(log::LevelFilter::Debug);
    }
    logger.init();

    match cli.command {
        Commands::Fill(args) => match run_fill(&args) {
            Ok(true) => exit::needs_reflow(),
            Ok(false) => exit::success(),
            Err(e) => {
                eprintln!("{}: {:#}", "Error".red().bold(), e);
                exit::tool_error();
            }
        },
        Commands::Init { path } => match reflow_config::create_default_config(&path) {
            Ok(()) => println!("Created default configuration file: {}", path.display()),
            Err(e) => {
                eprintln!("{}: {}", "Error".red().bold(), e);
                exit::tool_error();
            }
        },
        Commands::Schema => handle_schema_command(),
    }
}
