//! Deck List Export - Scryfall set exporter
//!
//! Fetches all cards of a set that are legal in a constructed format and
//! renders them as a plain-text deck list, optionally saved to a file.

pub mod api;
pub mod card_filter;
pub mod decklist;
pub mod error;
pub mod formatters;
pub mod io;
pub mod models;
pub mod prompt;

// Re-export commonly used items
pub use api::{search_cards, ScryfallCard};
pub use card_filter::{filter_cards, DeckEntry, COLORLESS_PASSES_FILTER};
pub use decklist::export;
pub use error::{ExportError, ExportResult};
pub use formatters::{format_deck_line, format_decklist};
pub use io::write_decklist;
pub use models::{Color, DeckRequest, Format, MAX_COPIES};
