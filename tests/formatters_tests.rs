use decklist_export::card_filter::DeckEntry;
use decklist_export::formatters::{format_deck_line, format_decklist};
use decklist_export::ScryfallCard;
use std::collections::HashMap;

fn entry(name: &str, set: &str, copies: u8) -> DeckEntry {
    DeckEntry {
        card: ScryfallCard {
            id: format!("uuid-{}", name),
            name: name.to_string(),
            set: set.to_string(),
            set_name: "Test Set".to_string(),
            collector_number: "1".to_string(),
            rarity: "common".to_string(),
            colors: None,
            legalities: HashMap::new(),
            mana_cost: None,
            type_line: None,
        },
        copies,
    }
}

#[test]
fn zero_copies_omits_the_numeric_prefix() {
    let line = format_deck_line(&entry("Lightning Bolt", "lea", 0));
    assert_eq!(line, "Lightning Bolt (LEA)");
}

#[test]
fn positive_copies_prepend_the_count() {
    for copies in 1..=4u8 {
        let line = format_deck_line(&entry("Lightning Bolt", "lea", copies));
        assert_eq!(line, format!("{} Lightning Bolt (LEA)", copies));
    }
}

#[test]
fn set_code_is_uppercased() {
    let line = format_deck_line(&entry("Virus Beetle", "neo", 2));
    assert_eq!(line, "2 Virus Beetle (NEO)");
}

#[test]
fn decklist_renders_one_line_per_entry_in_order() {
    let entries = vec![
        entry("Apple Card", "neo", 3),
        entry("Banana Card", "neo", 3),
    ];

    let lines = format_decklist(&entries);

    assert_eq!(lines, vec!["3 Apple Card (NEO)", "3 Banana Card (NEO)"]);
}

#[test]
fn empty_decklist_renders_no_lines() {
    assert!(format_decklist(&[]).is_empty());
}
