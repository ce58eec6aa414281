use clap::{Parser, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use std::process;
use tracing::info;

use wellplot::data::loader;
use wellplot::render::echarts::to_echarts_option;
use wellplot::{ChartConfig, ChartSpecBuilder, FieldCatalog, RecordParser};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// Normalized chart specification
    Spec,
    /// ECharts option document
    Echarts,
}

/// Chart frac stage sensor logs
#[derive(Debug, Parser)]
#[command(name = "wellplot", version, about)]
struct Args {
    /// CSV log file
    file: PathBuf,

    /// Fields to chart, in axis order (defaults to the configured selection)
    #[arg(short, long, value_delimiter = ',')]
    fields: Option<Vec<String>>,

    /// JSON chart configuration
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output document
    #[arg(long, value_enum, default_value_t = OutputFormat::Spec)]
    format: OutputFormat,

    /// Print the plottable fields and exit
    #[arg(long)]
    list_fields: bool,

    /// Print the parsed records instead of a chart
    #[arg(long)]
    records: bool,
}

fn run(args: Args) -> wellplot::Result<()> {
    let config = match &args.config {
        Some(path) => ChartConfig::load(path)?,
        None => ChartConfig::default(),
    };

    let text = loader::load_text(&args.file)?;
    let outcome = RecordParser::new().parse_with_stats(&text);
    info!(
        "Parsed {} records from {} data rows ({} skipped)",
        outcome.stats.records_emitted,
        outcome.stats.data_rows,
        outcome.stats.rows_skipped()
    );
    if outcome.records.is_empty() {
        eprintln!("The CSV is empty or invalid; see the warnings above for details.");
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    if args.list_fields {
        for field in FieldCatalog::available_fields(&outcome.records) {
            writeln!(out, "{field}").map_err(|e| wellplot::Error::io("<stdout>", e))?;
        }
        return Ok(());
    }

    if args.records {
        serde_json::to_writer_pretty(&mut out, &outcome.records)?;
        writeln!(out).map_err(|e| wellplot::Error::io("<stdout>", e))?;
        return Ok(());
    }

    let mut catalog = FieldCatalog::from_config(&config);
    if let Some(fields) = args.fields {
        catalog.set_selection(fields);
    }
    let spec = ChartSpecBuilder::new(config).build_with_catalog(&outcome.records, &catalog);

    match args.format {
        OutputFormat::Spec => serde_json::to_writer_pretty(&mut out, &spec)?,
        OutputFormat::Echarts => serde_json::to_writer_pretty(&mut out, &to_echarts_option(&spec))?,
    }
    writeln!(out).map_err(|e| wellplot::Error::io("<stdout>", e))?;
    Ok(())
}

fn main() {
    // Diagnostics go to stderr; stdout carries only JSON
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    if let Err(error) = run(args) {
        eprintln!("Error: {error}");
        process::exit(1);
    }
}
