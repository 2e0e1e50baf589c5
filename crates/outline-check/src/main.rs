//! outline-check - Main Entry Point
//!
//! Exit status: 0 valid outline, 1 outline violations, 2 no headings or
//! unreadable input.

mod cli;

use std::fs::File;
use std::io::{self, Write};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use outline_a11y::{check_document, Outline, OutlineEntry};
use outline_html::{Document, HtmlParser};
use outline_overlay::{present, Presentation};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Config, Format, Input};

const EXIT_VIOLATIONS: u8 = 1;
const EXIT_FAILURE: u8 = 2;

/// JSON report
#[derive(Serialize)]
struct Report<'a> {
    url: &'a str,
    title: &'a str,
    valid: bool,
    entries: &'a [OutlineEntry],
}

fn main() -> ExitCode {
    let config = Config::from(Cli::parse());

    // RUST_LOG wins over -v; logs stay on stderr
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match run(&config) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {:#}", err);
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

fn run(config: &Config) -> Result<ExitCode> {
    let document = load(config)?;
    tracing::info!(url = document.url(), nodes = document.tree().len(), "Loaded document");

    let result = check_document(&document);
    let mut stdout = io::stdout().lock();

    if config.format == Format::Json {
        if let Ok(outline) = &result {
            write_json(&mut stdout, &document, outline)?;
            return Ok(exit_code(outline.is_valid()));
        }
    }

    match present(result) {
        Presentation::Notice(notice) => {
            eprintln!("{}", notice.message);
            Ok(ExitCode::from(EXIT_FAILURE))
        }
        Presentation::Overlay(mut overlay) => {
            let valid = overlay.is_all_valid();
            let rendered = match config.format {
                Format::Html => overlay.render_html(),
                Format::Text | Format::Json => {
                    overlay.expand_all();
                    overlay.render_text()
                }
            };
            stdout.write_all(rendered.as_bytes()).context("Failed to write report")?;
            overlay.close();
            Ok(exit_code(valid))
        }
    }
}

fn load(config: &Config) -> Result<Document> {
    let parser = HtmlParser::new();
    match &config.input {
        Input::Stdin => parser
            .parse_reader(&mut io::stdin().lock(), &config.url)
            .context("Failed to read HTML from stdin"),
        Input::File(path) => {
            let mut file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            parser
                .parse_reader(&mut file, &config.url)
                .with_context(|| format!("Failed to read {}", path.display()))
        }
    }
}

fn write_json(out: &mut impl Write, document: &Document, outline: &Outline) -> Result<()> {
    let title = document.title();
    let report = Report {
        url: document.url(),
        title: &title,
        valid: outline.is_valid(),
        entries: outline.entries(),
    };
    serde_json::to_writer_pretty(&mut *out, &report).context("Failed to write report")?;
    writeln!(out).context("Failed to write report")?;
    Ok(())
}

fn exit_code(valid: bool) -> ExitCode {
    if valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::from(EXIT_VIOLATIONS)
    }
}
