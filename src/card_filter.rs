use crate::api::ScryfallCard;
use crate::models::{Color, Format};

/// Colorless cards (lands, artifacts) carry no color to conflict with a
/// color filter, so they pass it unconditionally.
pub const COLORLESS_PASSES_FILTER: bool = true;

/// A card paired with the requested copy count, ready for rendering
#[derive(Debug, Clone)]
pub struct DeckEntry {
    pub card: ScryfallCard,
    pub copies: u8,
}

/// Keeps only cards legal in `format` and, when a color filter is given,
/// sharing at least one color with it. Order of the input is preserved.
pub fn filter_cards(
    cards: Vec<ScryfallCard>,
    format: Format,
    colors: Option<&[Color]>,
    copies: u8,
) -> Vec<DeckEntry> {
    cards
        .into_iter()
        .filter(|card| card.is_legal_in(format))
        .filter(|card| match colors {
            Some(filter) => matches_color_filter(card, filter),
            None => true,
        })
        .map(|card| DeckEntry { card, copies })
        .collect()
}

fn matches_color_filter(card: &ScryfallCard, filter: &[Color]) -> bool {
    let letters = card.color_letters();
    if letters.is_empty() {
        return COLORLESS_PASSES_FILTER;
    }

    letters
        .iter()
        .filter_map(|letter| letter.chars().next())
        .filter_map(Color::from_letter)
        .any(|color| filter.contains(&color))
}
