//! Deck List Export - Scryfall set exporter
//!
//! Fetches all cards of a set that are legal in a constructed format and
//! prints them as a deck list, or saves the list to a file.

use clap::Parser;
use decklist_export::models::{Color, DeckRequest, Format, MAX_COPIES};
use decklist_export::{decklist, io, prompt, ExportResult};
use std::path::PathBuf;

/// MTG deck list exporter - fetches format-legal cards of a set from Scryfall
#[derive(Parser, Debug)]
#[command(name = "decklist_export")]
#[command(version, about, long_about = None)]
struct Args {
    /// Set code to export (e.g. 'neo'). Running with no arguments at all
    /// switches to interactive mode instead.
    #[arg(short, long)]
    set: Option<String>,

    /// Legality format to filter on
    #[arg(short, long, default_value = "pauper")]
    format: String,

    /// Copy count printed before each card, 0 disables the prefix
    #[arg(short, long, default_value_t = 0)]
    copies: u8,

    /// Color filter letters (subset of WUBRG)
    #[arg(long)]
    colors: Option<String>,

    /// Restrict the search to common printings
    #[arg(long, default_value_t = false)]
    commons_only: bool,

    /// Write the deck list to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging (shows rate-limit retry detail)
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Builds the export request from explicit CLI flags, validating ranges
fn request_from_args(args: &Args) -> Result<DeckRequest, String> {
    let set_code = match args.set.as_deref().map(str::trim) {
        Some(code) if !code.is_empty() => code.to_lowercase(),
        _ => return Err("missing required flag --set <CODE>".to_string()),
    };

    let format = Format::parse(&args.format).ok_or_else(|| {
        let names: Vec<&str> = Format::all().iter().map(|f| f.as_str()).collect();
        format!(
            "unknown format '{}', expected one of: {}",
            args.format,
            names.join(", ")
        )
    })?;

    if args.copies > MAX_COPIES {
        return Err(format!("copy count must be between 0 and {}", MAX_COPIES));
    }

    let colors = match args.colors.as_deref().map(str::trim) {
        Some("") | None => None,
        Some(letters) => {
            let parsed = Color::parse_list(letters).ok_or_else(|| {
                let valid: String = Color::all().iter().map(Color::letter).collect();
                format!("colors must be letters from {}", valid)
            })?;
            Some(parsed)
        }
    };

    Ok(DeckRequest {
        set_code,
        format,
        copies: args.copies,
        colors,
        commons_only: args.commons_only,
        output: args.output.clone(),
    })
}

/// Fetches, filters, renders, and writes the deck list
fn run(request: &DeckRequest) -> ExportResult<()> {
    let lines = decklist::export(request)?;

    if lines.is_empty() {
        log::info!("No cards found");
    }

    match &request.output {
        Some(path) => {
            io::write_decklist(path, &lines)?;
            log::info!("Deck list saved to {}", path.display());
        }
        None => {
            for line in &lines {
                println!("{line}");
            }
        }
    }

    Ok(())
}

fn main() {
    // No arguments at all means guided interactive mode
    let interactive = std::env::args().len() <= 1;
    let args = Args::parse();

    // Initialize logging. RUST_LOG overrides the --verbose default.
    let default_filter = if args.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    let request = if interactive {
        match prompt::collect_request() {
            Ok(request) => request,
            Err(e) => {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    } else {
        match request_from_args(&args) {
            Ok(request) => request,
            Err(message) => {
                eprintln!("Error: {message}");
                std::process::exit(2);
            }
        }
    };

    if let Err(e) = run(&request) {
        log::error!("Export failed: {e}");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
