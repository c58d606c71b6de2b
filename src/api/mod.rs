//! API client for the Scryfall card database

pub mod scryfall;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use scryfall::{search_cards, CardPage, ScryfallCard, SCRYFALL_API};
