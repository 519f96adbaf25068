//! `ChartFlow` - render a chord chart as a transposed or Nashville-numbered document.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use chartflow::config::Config;
use chartflow::files::{output_path, resolve_input};
use chartflow::pipeline::{process_chart, Mode};
use chartflow::render::OutputFormat;
use chartflow::theory::Note;

#[derive(Parser)]
#[command(name = "chartflow")]
#[command(about = "Chord chart generator: transpose, Nashville numbers, repeat compression")]
#[command(version)]
struct Cli {
    /// Chart filename or path (e.g., `my_song.txt`)
    chart: PathBuf,

    /// Output document path. A bare file name is placed in the output directory
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Directory containing input charts [env: `CHART_INPUT_DIR`, default: input]
    #[arg(long)]
    input_dir: Option<PathBuf>,

    /// Directory to place generated documents [env: `CHART_OUTPUT_DIR`, default: output]
    #[arg(long)]
    output_dir: Option<PathBuf>,

    /// Target key to transpose into (e.g., G, F#, Bb)
    #[arg(long)]
    key: Option<String>,

    /// Keep chord names instead of converting to Nashville numbers
    #[arg(long)]
    no_nashville: bool,

    /// Key of the input chart; overrides auto-detection (e.g., Eb)
    #[arg(long)]
    input_key: Option<String>,

    /// Generate a document with lyrics only (no chords)
    #[arg(long)]
    lyrics_only: bool,

    /// Maximum text width [env: `CHART_MAX_WIDTH`, default: 80]
    #[arg(long)]
    max_width: Option<usize>,

    /// Output document format
    #[arg(long, value_enum, default_value_t = OutputFormat::Rtf)]
    format: OutputFormat,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    tracing::debug!("{} v{}", config.app_name(), config.app_version());

    // Keys are validated before any file is touched
    let target = cli.key.as_deref().map(Note::parse_key).transpose()?;
    let input_key = cli.input_key.as_deref().map(Note::parse_key).transpose()?;

    let mut options = config.chart_options();
    options.mode = match target {
        Some(target) => Mode::Transpose { target },
        None if cli.no_nashville => Mode::Original,
        None => Mode::Nashville,
    };
    if input_key.is_some() {
        options.input_key = input_key;
    }
    if let Some(width) = cli.max_width {
        options.max_width = width;
    }
    options.lyrics_only = cli.lyrics_only;

    let input_dir = cli.input_dir.unwrap_or_else(|| config.input_dir.clone());
    let output_dir = cli.output_dir.unwrap_or_else(|| config.output_dir.clone());

    let input = resolve_input(&cli.chart, &input_dir)?;
    let text = fs_err::read_to_string(&input)?;

    let lines = process_chart(&text, &options);

    fs_err::create_dir_all(&output_dir)
        .with_context(|| format!("Failed to create output directory {}", output_dir.display()))?;
    let path = output_path(&input, cli.output.as_deref(), &output_dir, &options, cli.format);
    let document = cli.format.render(&lines, &config.rtf_options());
    fs_err::write(&path, document)?;

    println!("Chart written to {}", path.display());
    Ok(())
}
