//! tocweave: add a numbered, collapsible table of contents to a markdown document.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;
use tocweave::config::Config;
use tocweave::error::Result;
use tocweave::formats::{markdown::MarkdownFormat, Format};
use tocweave::{render, toc};

#[derive(Parser)]
#[command(name = "tocweave")]
#[command(about = "Hierarchically numbered tables of contents", long_about = None)]
#[allow(clippy::struct_excessive_bools)]
struct Args {
    /// Markdown file to index
    #[arg(value_name = "PATH")]
    path: PathBuf,

    /// Configuration file (defaults to ./tocweave.toml when present)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,

    /// Write the annotated document here instead of stdout
    #[arg(long, short = 'o', value_name = "FILE", conflicts_with = "in_place")]
    output: Option<PathBuf>,

    /// Rewrite the input file
    #[arg(long, conflicts_with_all = ["json", "outline"])]
    in_place: bool,

    /// Print the table of contents as JSON instead of the document
    #[arg(long, conflicts_with = "outline")]
    json: bool,

    /// Print the table of contents as an indented markdown list instead of the document
    #[arg(long)]
    outline: bool,

    /// Show hierarchical identifiers in front of each entry
    #[arg(long)]
    numbered: bool,

    /// Start with the list collapsed
    #[arg(long)]
    collapsed: bool,

    /// Emit diagnostic logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("tocweave: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let mut cfg = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    // Override config with command line args
    if args.numbered {
        cfg.use_numbering = true;
    }
    if args.collapsed {
        cfg.expanded_by_default = false;
    }
    if args.verbose {
        cfg.use_logging = true;
    }

    init_logging(cfg.use_logging);

    let source = fs::read_to_string(&args.path)?;
    let mut doc = MarkdownFormat.parse(&source)?;
    let contents = toc::generate(&mut doc, &cfg)?;

    let rendered = if args.json {
        let mut json = serde_json::to_string_pretty(&contents)?;
        json.push('\n');
        json
    } else if args.outline {
        render::outline(&contents)
    } else {
        doc.serialize()
    };

    let target = if args.in_place {
        Some(&args.path)
    } else {
        args.output.as_ref()
    };
    match target {
        Some(path) => {
            fs::write(path, rendered)?;
            log::info!("Wrote {}", path.display());
        }
        None => io::stdout().write_all(rendered.as_bytes())?,
    }

    Ok(())
}

fn init_logging(enabled: bool) {
    let level = if enabled {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}
