use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use email_list::{DEFAULT_FILENAME, DirectorySink, Extraction};
use serde_json::json;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "email-list")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Extract and format email addresses from raw text")]
#[command(after_help = "EXAMPLES:\n  \
    email-list contacts.txt\n  \
    pbpaste | email-list --export --output-dir ~/Downloads\n  \
    email-list notes.txt --output-format json")]
struct Cli {
    /// Text file to scan (reads stdin when omitted or "-")
    #[arg(value_name = "INPUT")]
    input: Option<PathBuf>,

    /// Save the extracted list as CSV
    #[arg(short, long)]
    export: bool,

    /// Directory the CSV is written to
    #[arg(long, value_name = "DIR", env = "EMAIL_LIST_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// Name of the exported CSV file
    #[arg(long, value_name = "NAME", default_value = DEFAULT_FILENAME)]
    filename: String,

    /// Output format for results
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    output_format: OutputFormat,

    /// Verbose output level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Notice plus numbered listing
    Human,
    /// Single JSON object
    Json,
    /// Bare addresses, one per line
    Plain,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli);
    process::exit(run(&cli));
}

fn run(cli: &Cli) -> i32 {
    let text = match read_input(cli.input.as_deref()) {
        Ok(text) => text,
        Err(e) => {
            eprintln!("Error: {e:#}");
            return 1;
        }
    };

    let extraction = Extraction::run(&text);
    print_extraction(&extraction, cli.output_format);

    if !cli.export {
        return 0;
    }

    let mut sink = DirectorySink::new(&cli.output_dir);
    match extraction.export_to(&mut sink, &cli.filename) {
        Ok(Some(file)) => {
            if matches!(cli.output_format, OutputFormat::Human) {
                let location = file
                    .path
                    .as_ref()
                    .map_or_else(|| file.filename.clone(), |p| p.display().to_string());
                println!("Saved {location} ({} bytes)", file.bytes);
            }
            0
        }
        Ok(None) => {
            eprintln!("Nothing to export: no emails extracted");
            0
        }
        Err(e) => {
            eprintln!("Error: {e}");
            2
        }
    }
}

// Invalid UTF-8 is replaced, not rejected; the pattern is ASCII-only.
fn read_input(input: Option<&Path>) -> Result<String> {
    let bytes = match input {
        Some(path) if path.as_os_str() != "-" => {
            debug!("Reading text from {}", path.display());
            std::fs::read(path)
                .with_context(|| format!("Failed to read input file {}", path.display()))?
        }
        _ => {
            debug!("Reading text from stdin");
            let mut bytes = Vec::new();
            std::io::stdin()
                .read_to_end(&mut bytes)
                .context("Failed to read text from stdin")?;
            bytes
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

fn print_extraction(extraction: &Extraction, format: OutputFormat) {
    match format {
        OutputFormat::Human => {
            println!("{}", extraction.notice());
            print!("{}", extraction.listing());
        }
        OutputFormat::Json => {
            let value = json!({
                "count": extraction.count(),
                "emails": extraction.emails(),
                "notice": extraction.notice().to_string(),
            });
            println!("{value}");
        }
        OutputFormat::Plain => {
            for email in extraction.emails() {
                println!("{email}");
            }
        }
    }
}

fn init_tracing(cli: &Cli) {
    let default_level = if cli.quiet {
        "error"
    } else {
        match cli.verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
