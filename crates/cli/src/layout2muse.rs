//! layout2muse - Rebuild Muse markup from a PDF layout dump
//!
//! Reads the JSON dump of a pdfminer-style layout analysis (run with
//! `line_margin = 0` so that lines are not grouped into paragraphs) and
//! writes the reconstructed document: headings, paragraphs, quotes, bullet
//! lists, bibliography and renumbered footnotes.

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use paramuse_core::calibration::Calibration;
use paramuse_core::high_level::{ConvertOptions, convert_to_fp};
use paramuse_core::source::LayoutDocument;
use tracing_subscriber::EnvFilter;

/// Rebuild Muse markup from a pdfminer-style layout dump.
#[derive(Parser, Debug)]
#[command(name = "layout2muse")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the JSON layout dump
    input: PathBuf,

    /// Path to file where output is written, or "-" for stdout
    #[arg(short = 'o', long, default_value = "-")]
    outfile: String,

    /// JSON calibration file (size bands, margins, override tables)
    #[arg(short = 'c', long)]
    calibration: Option<PathBuf>,

    /// A space- or comma-separated list of page ids to convert
    #[arg(long = "page-numbers")]
    page_numbers: Option<String>,

    /// The maximum number of pages to convert (0 = no limit)
    #[arg(short = 'm', long, default_value = "0")]
    maxpages: usize,

    /// Skip the generic markup normalization pass
    #[arg(long = "no-normalize", action = ArgAction::SetTrue)]
    no_normalize: bool,

    /// Use debug logging level
    #[arg(short = 'd', long, action = ArgAction::SetTrue)]
    debug: bool,
}

/// Parses `--page-numbers`; an empty list means all pages.
fn parse_page_numbers(raw: Option<&str>) -> Result<Option<Vec<u32>>> {
    let Some(raw) = raw else {
        return Ok(None);
    };
    let nums = raw
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<u32>()
                .with_context(|| format!("invalid page number {s:?}"))
        })
        .collect::<Result<Vec<u32>>>()?;
    Ok((!nums.is_empty()).then_some(nums))
}

fn init_logging(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn run(args: &Args) -> Result<()> {
    let calibration = match &args.calibration {
        Some(path) => Calibration::from_path(path)
            .with_context(|| format!("failed to load calibration {}", path.display()))?,
        None => Calibration::default(),
    };

    let file = File::open(&args.input)
        .with_context(|| format!("failed to open {}", args.input.display()))?;
    let layout = LayoutDocument::from_json_reader(BufReader::new(file))
        .with_context(|| format!("failed to parse layout dump {}", args.input.display()))?;
    tracing::debug!(pages = layout.pages.len(), "layout dump loaded");

    let options = ConvertOptions {
        page_numbers: parse_page_numbers(args.page_numbers.as_deref())?,
        maxpages: args.maxpages,
        normalize: !args.no_normalize,
    };

    let mut output: Box<dyn Write> = if args.outfile == "-" {
        Box::new(BufWriter::new(io::stdout()))
    } else {
        let file = File::create(&args.outfile)
            .with_context(|| format!("failed to create output file {}", args.outfile))?;
        Box::new(BufWriter::new(file))
    };

    convert_to_fp(&layout, &calibration, &options, &mut output)
        .with_context(|| format!("error processing {}", args.input.display()))?;
    output.write_all(b"\n")?;
    output.flush()?;
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.debug);
    run(&args)
}
