//! highlight-hop - e-reader notebook export converter

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use highlight_hop::{Format, Notebook, format_notebook, parse_notebook_bytes};

#[derive(Parser)]
#[command(name = "highlight-hop")]
#[command(version, about = "Convert e-reader notebook exports", long_about = None)]
#[command(after_help = "EXAMPLES:
    highlight-hop notebook.html                 Print Markdown to stdout
    highlight-hop notebook.html -f csv -o out/  Write out/<title>.csv
    highlight-hop -i notebook.html              Show notebook summary")]
struct Cli {
    /// Notebook export (HTML)
    #[arg(value_name = "INPUT")]
    input: PathBuf,

    /// Output format: csv, markdown, or json
    #[arg(short, long, default_value = "markdown")]
    format: String,

    /// Output file or directory (defaults to stdout)
    #[arg(short, long, value_name = "OUTPUT")]
    output: Option<PathBuf>,

    /// Show notebook summary without converting
    #[arg(short, long)]
    info: bool,

    /// Suppress output messages
    #[arg(short, long)]
    quiet: bool,

    /// Log parser decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = if cli.info {
        show_info(&cli.input)
    } else {
        convert(&cli)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with_writer(io::stderr)
        .init();
}

fn load(path: &Path) -> highlight_hop::Result<Notebook> {
    let bytes = fs::read(path)?;
    Ok(parse_notebook_bytes(&bytes)?)
}

fn show_info(path: &Path) -> highlight_hop::Result<()> {
    let notebook = load(path)?;

    println!("File: {}", path.display());
    println!("Title: {}", notebook.title.as_deref().unwrap_or("Unknown Title"));
    if let Some(ref authors) = notebook.authors {
        println!("Authors: {authors}");
    }
    println!("Highlights: {}", notebook.highlight_count());
    println!("Notes: {}", notebook.note_count());

    Ok(())
}

fn convert(cli: &Cli) -> highlight_hop::Result<()> {
    let format: Format = cli.format.parse()?;
    let notebook = load(&cli.input)?;
    let formatted = format_notebook(&notebook, format)?;

    let Some(output) = &cli.output else {
        io::stdout().write_all(formatted.content.as_bytes())?;
        return Ok(());
    };

    let path = if output.is_dir() {
        output.join(&formatted.filename)
    } else {
        output.clone()
    };
    fs::write(&path, formatted.content.as_bytes())?;

    if !cli.quiet {
        eprintln!("Wrote {} ({} markers)", path.display(), notebook.markers.len());
    }
    Ok(())
}
