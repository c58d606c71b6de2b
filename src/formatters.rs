use crate::card_filter::DeckEntry;

/// Renders one deck list line: "4 Lightning Bolt (LEA)", or
/// "Lightning Bolt (LEA)" when the copy count is zero.
pub fn format_deck_line(entry: &DeckEntry) -> String {
    let set = entry.card.set.to_uppercase();
    if entry.copies > 0 {
        format!("{} {} ({})", entry.copies, entry.card.name, set)
    } else {
        format!("{} ({})", entry.card.name, set)
    }
}

/// Renders the full deck list, one line per entry, in input order
pub fn format_decklist(entries: &[DeckEntry]) -> Vec<String> {
    entries.iter().map(format_deck_line).collect()
}
