//! adasfps - ADAS frame-rate log analyzer
//!
//! Reads a diagnostic log (plain or gzip-compressed), extracts every
//! "ADAS FPS INFO" block and prints per-metric statistics.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{self, Write};
use std::path::PathBuf;

use adasfps::analysis::MetricsEngine;
use adasfps::loader::{load_log_text, read_log_text};
use adasfps::parsers::Field;
use adasfps::report::{render_text, to_json, Report};
use adasfps::settings::UserSettings;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFmt {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(
    name = "adasfps",
    version,
    about = "ADAS frame-rate log analyzer",
    after_long_help = "Examples:\n  adasfps adas.log\n  adasfps adas.log.gz --fields PCW,TSR --no-table\n  zcat adas.log.gz | adasfps --format json"
)]
struct Args {
    /// Log file to analyze (`.log`, `.txt` or `.gz`); reads stdin when omitted or `-`
    path: Option<PathBuf>,
    /// Fields to chart, comma separated (defaults to saved settings)
    #[arg(long, short = 'f', value_delimiter = ',')]
    fields: Vec<Field>,
    #[arg(long, short = 'o', value_enum, default_value = "text")]
    format: OutputFmt,
    /// Leave the per-record data table out of text reports
    #[arg(long, default_value_t = false)]
    no_table: bool,
    /// Remember the --fields selection for later runs
    #[arg(long, default_value_t = false, requires = "fields")]
    save_fields: bool,
}

fn read_input(path: Option<&PathBuf>) -> Result<(String, String)> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            let text = load_log_text(p)?;
            Ok((p.display().to_string(), text))
        }
        _ => {
            let text = read_log_text(io::stdin().lock()).context("Failed to read stdin")?;
            Ok(("stdin".to_string(), text))
        }
    }
}

fn main() -> Result<()> {
    // Logs go to stderr so reports on stdout stay machine readable
    tracing_subscriber::fmt().with_writer(io::stderr).init();

    let args = Args::parse();
    let mut settings = UserSettings::load();

    if !args.fields.is_empty() {
        settings.chart_fields = args.fields.clone();
        if args.save_fields {
            if let Err(e) = settings.save() {
                tracing::warn!("Could not save settings: {}", e);
            }
        }
    }

    let (source, text) = read_input(args.path.as_ref())?;

    let mut engine = MetricsEngine::new();
    let (summary, strategy) = engine.analyze_text(&text);
    let report = Report::build(
        source,
        &engine,
        summary,
        strategy,
        &settings.chart_selection(),
    );

    let rendered = match args.format {
        OutputFmt::Text => render_text(&report, settings.show_table && !args.no_table),
        OutputFmt::Json => to_json(&report).context("Failed to serialize report")?,
    };

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", rendered.trim_end()).context("Failed to write report")?;
    Ok(())
}
