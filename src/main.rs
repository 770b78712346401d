use std::cmp::Ordering;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::info;

use dotver::config::{self, FormatConfig};
use dotver::{FormatOptions, Version};

#[derive(Parser)]
#[command(name = "dotver")]
#[command(version, about = "Parse, compare and format dotted version numbers")]
struct Cli {
    /// Write JSON logs to this file instead of stderr
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Write JSON logs to the default log file in the data directory
    #[arg(long, global = true, conflicts_with = "log_file")]
    log: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the fields of a version as JSON
    Parse { version: String },
    /// Print -1, 0 or 1 as A is less than, equal to or greater than B
    Compare { a: String, b: String },
    /// Render a version with explicit formatting rules
    Format(FormatArgs),
}

#[derive(Args)]
struct FormatArgs {
    version: String,

    /// Number of fields to emit (2-5)
    #[arg(long)]
    fields: Option<usize>,

    /// Always append the release tag
    #[arg(long, conflicts_with = "no_release")]
    release: bool,

    /// Never append the release tag unless five fields are requested
    #[arg(long)]
    no_release: bool,

    /// Separator placed before the release tag
    #[arg(long)]
    separator: Option<String>,

    /// JSON file with fieldCount, includeRelease and releaseSeparator
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ParseReport<'a> {
    major: i32,
    minor: i32,
    revision: i32,
    build: i32,
    release: Option<&'a str>,
    significant_fields: u8,
    fields: u8,
    empty: bool,
}

impl<'a> From<&'a Version> for ParseReport<'a> {
    fn from(v: &'a Version) -> Self {
        Self {
            major: v.major(),
            minor: v.minor(),
            revision: v.revision(),
            build: v.build(),
            release: v.release_set().then_some(v.release()),
            significant_fields: v.significant_fields(),
            fields: v.fields(),
            empty: v.is_empty(),
        }
    }
}

fn parse_arg(input: &str) -> anyhow::Result<Version> {
    Version::parse(input).with_context(|| format!("Invalid version '{}'", input))
}

fn format_options(args: &FormatArgs) -> anyhow::Result<FormatOptions> {
    let config = match &args.config {
        Some(path) => FormatConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => FormatConfig::default(),
    };

    let mut options = FormatOptions::from(config);
    if let Some(fields) = args.fields {
        options = options.field_count(fields);
    }
    if args.release {
        options = options.include_release(true);
    } else if args.no_release {
        options = options.include_release(false);
    }
    if let Some(separator) = &args.separator {
        options = options.release_separator(separator.as_str());
    }
    Ok(options)
}

fn run(command: Command) -> anyhow::Result<String> {
    match command {
        Command::Parse { version } => {
            let v = parse_arg(&version)?;
            Ok(serde_json::to_string_pretty(&ParseReport::from(&v))?)
        }
        Command::Compare { a, b } => {
            let ordering = parse_arg(&a)?.compare(&parse_arg(&b)?);
            info!("Compared {} with {}: {:?}", a, b, ordering);
            Ok(match ordering {
                Ordering::Less => "-1",
                Ordering::Equal => "0",
                Ordering::Greater => "1",
            }
            .to_string())
        }
        Command::Format(args) => {
            let options = format_options(&args)?;
            Ok(parse_arg(&args.version)?.format(&options))
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let log_file = if cli.log {
        Some(config::log_path())
    } else {
        cli.log_file
    };
    let _guard = dotver::logging::init(log_file.as_deref())?;

    println!("{}", run(cli.command)?);
    Ok(())
}
