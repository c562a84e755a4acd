//! Reads survey page text and writes the extracted questions as JSON.
//!
//! Usage: `extract_questions [PAGE_FILE...] [-o OUTPUT]`
//!
//! Page files are read in argument order, one file per page. Without page
//! files the whole document is read from stdin. Extraction settings come
//! from `SURVEY_*` environment variables, verbosity from `RUST_LOG`.

use std::env;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;

use survey_questions::{encoding, extract_pages, Options, QuestionRecord};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

struct Args {
    pages: Vec<String>,
    output: Option<String>,
}

fn parse_args() -> Result<Args, String> {
    let mut pages = Vec::new();
    let mut output = None;
    let mut args = env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-o" | "--output" => {
                output = Some(args.next().ok_or("missing value for --output")?);
            }
            "-h" | "--help" => {
                return Err("Usage: extract_questions [PAGE_FILE...] [-o OUTPUT]".to_string());
            }
            _ => pages.push(arg),
        }
    }
    Ok(Args { pages, output })
}

fn read_pages(paths: &[String]) -> io::Result<Vec<String>> {
    if paths.is_empty() {
        let mut buffer = Vec::new();
        io::stdin().read_to_end(&mut buffer)?;
        return Ok(vec![encoding::transcode_to_utf8(&buffer)]);
    }
    paths
        .iter()
        .map(|path| fs::read(path).map(|bytes| encoding::transcode_to_utf8(&bytes)))
        .collect()
}

fn write_output(questions: &[QuestionRecord], output: Option<&str>) -> io::Result<()> {
    let json = serde_json::to_string_pretty(questions)?;
    match output {
        Some(path) => fs::write(path, json + "\n"),
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{json}")
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{message}");
            return ExitCode::FAILURE;
        }
    };

    let pages = match read_pages(&args.pages) {
        Ok(pages) => pages,
        Err(e) => {
            error!("failed to read input: {e}");
            return ExitCode::FAILURE;
        }
    };

    let options = Options::from_env();

    // A failed extraction degrades to an empty question list.
    let questions = match extract_pages(&pages, &options) {
        Ok(result) => {
            info!(
                pages = pages.len(),
                questions = result.stats.kept,
                duplicates = result.stats.duplicates,
                "extraction complete"
            );
            result.questions
        }
        Err(e) => {
            error!("extraction failed, writing empty question list: {e}");
            Vec::new()
        }
    };

    if let Err(e) = write_output(&questions, args.output.as_deref()) {
        error!("failed to write output: {e}");
        return ExitCode::FAILURE;
    }
    if let Some(path) = &args.output {
        info!("questions saved to {path}");
    }

    ExitCode::SUCCESS
}
