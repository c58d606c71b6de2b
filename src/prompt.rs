//! Guided interactive mode: collects the same parameters as the CLI flags,
//! one prompt at a time, re-asking on invalid input.

use crate::error::ExportResult;
use crate::models::{Color, DeckRequest, Format, MAX_COPIES};
use inquire::{Confirm, Select, Text};
use std::path::PathBuf;

/// Collects a full export request from interactive prompts
pub fn collect_request() -> ExportResult<DeckRequest> {
    let set_code = prompt_set_code()?;
    let format = prompt_format()?;

    let commons_only = if format == Format::Pauper {
        Confirm::new("Extract only common cards?")
            .with_default(false)
            .prompt()?
    } else {
        false
    };

    let copies = prompt_copies()?;
    let colors = prompt_colors()?;
    let output = prompt_output(&set_code, format)?;

    Ok(DeckRequest {
        set_code,
        format,
        copies,
        colors,
        commons_only,
        output,
    })
}

fn prompt_set_code() -> ExportResult<String> {
    loop {
        let answer = Text::new("Enter the set code (e.g. 'neo' for Kamigawa: Neon Dynasty):")
            .prompt()?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            println!("Set code cannot be empty");
            continue;
        }
        return Ok(trimmed.to_lowercase());
    }
}

fn prompt_format() -> ExportResult<Format> {
    let format_names: Vec<&str> = Format::all().iter().map(|f| f.as_str()).collect();
    let answer = Select::new("Choose the legality format:", format_names).prompt()?;
    Ok(Format::parse(answer).unwrap_or_default())
}

fn prompt_copies() -> ExportResult<u8> {
    loop {
        let answer = Text::new("Copies to list before each card (0 for no number):")
            .with_default("0")
            .prompt()?;
        match answer.trim().parse::<u8>() {
            Ok(n) if n <= MAX_COPIES => return Ok(n),
            _ => println!("Please enter a number between 0 and {}", MAX_COPIES),
        }
    }
}

fn prompt_colors() -> ExportResult<Option<Vec<Color>>> {
    loop {
        let answer = Text::new("Color filter letters (WUBRG, leave empty for all):").prompt()?;
        let trimmed = answer.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        match Color::parse_list(trimmed) {
            Some(colors) => return Ok(Some(colors)),
            None => {
                let letters: String = Color::all().iter().map(Color::letter).collect();
                println!("Colors must be letters from {}", letters);
            }
        }
    }
}

fn prompt_output(set_code: &str, format: Format) -> ExportResult<Option<PathBuf>> {
    let save = Confirm::new("Save the list to a file?")
        .with_default(false)
        .prompt()?;
    if !save {
        return Ok(None);
    }

    let suggested = format!("{}_{}_decklist.txt", format.as_str(), set_code);
    let filename = Text::new("File name:").with_default(&suggested).prompt()?;
    Ok(Some(PathBuf::from(filename.trim())))
}
