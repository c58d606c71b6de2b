//! Fetch-filter-format pipeline for deck list exports.

use crate::api::scryfall::{search_cards_from, SCRYFALL_API};
use crate::card_filter::filter_cards;
use crate::error::ExportResult;
use crate::formatters::format_decklist;
use crate::models::DeckRequest;

/// Runs the full pipeline against the production Scryfall API and returns
/// the rendered deck list lines.
pub fn export(request: &DeckRequest) -> ExportResult<Vec<String>> {
    export_from(SCRYFALL_API, request)
}

/// Runs the pipeline against the given base URL (for testing with mock
/// servers).
pub(crate) fn export_from(base_url: &str, request: &DeckRequest) -> ExportResult<Vec<String>> {
    let cards = search_cards_from(
        base_url,
        &request.set_code,
        request.format,
        request.commons_only,
    )?;

    log::info!(
        "Found {} {}-legal cards in set {}",
        cards.len(),
        request.format.as_str(),
        request.set_code.to_uppercase()
    );

    let entries = filter_cards(
        cards,
        request.format,
        request.colors.as_deref(),
        request.copies,
    );

    Ok(format_decklist(&entries))
}

#[cfg(test)]
#[path = "decklist_tests.rs"]
mod tests;
