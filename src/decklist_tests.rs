//! End-to-end tests for the export pipeline against a mock API.

use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::export_from;
use crate::models::{Color, DeckRequest, Format};

fn card_json(name: &str, colors: &[&str], pauper_status: &str) -> serde_json::Value {
    serde_json::json!({
        "id": format!("uuid-{}", name),
        "name": name,
        "set": "neo",
        "set_name": "Kamigawa: Neon Dynasty",
        "collector_number": "1",
        "rarity": "common",
        "colors": colors,
        "legalities": { "pauper": pauper_status }
    })
}

fn request(copies: u8, colors: Option<Vec<Color>>) -> DeckRequest {
    DeckRequest {
        set_code: "neo".to_string(),
        format: Format::Pauper,
        copies,
        colors,
        commons_only: false,
        output: None,
    }
}

async fn mount_search_page(server: &MockServer, cards: Vec<serde_json::Value>) {
    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "data": cards,
            "has_more": false
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn export_renders_lines_with_copy_prefix() {
    let mock_server = MockServer::start().await;
    mount_search_page(
        &mock_server,
        vec![
            card_json("Dragonspark Reactor", &["R"], "legal"),
            card_json("Virus Beetle", &["B"], "legal"),
        ],
    )
    .await;

    let base_url = mock_server.uri();
    let lines = tokio::task::spawn_blocking(move || export_from(&base_url, &request(4, None)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        lines,
        vec!["4 Dragonspark Reactor (NEO)", "4 Virus Beetle (NEO)"]
    );
}

#[tokio::test]
async fn export_omits_prefix_for_zero_copies() {
    let mock_server = MockServer::start().await;
    mount_search_page(&mock_server, vec![card_json("Virus Beetle", &["B"], "legal")]).await;

    let base_url = mock_server.uri();
    let lines = tokio::task::spawn_blocking(move || export_from(&base_url, &request(0, None)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(lines, vec!["Virus Beetle (NEO)"]);
}

#[tokio::test]
async fn export_drops_cards_the_api_reports_as_not_legal() {
    let mock_server = MockServer::start().await;
    mount_search_page(
        &mock_server,
        vec![
            card_json("Legal Card", &["W"], "legal"),
            card_json("Banned Card", &["W"], "banned"),
        ],
    )
    .await;

    let base_url = mock_server.uri();
    let lines = tokio::task::spawn_blocking(move || export_from(&base_url, &request(0, None)))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(lines, vec!["Legal Card (NEO)"]);
}

#[tokio::test]
async fn export_applies_color_filter() {
    let mock_server = MockServer::start().await;
    mount_search_page(
        &mock_server,
        vec![
            card_json("Red Card", &["R"], "legal"),
            card_json("Blue Card", &["U"], "legal"),
            card_json("Colorless Card", &[], "legal"),
        ],
    )
    .await;

    let base_url = mock_server.uri();
    let lines = tokio::task::spawn_blocking(move || {
        export_from(&base_url, &request(0, Some(vec![Color::Red])))
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(lines, vec!["Red Card (NEO)", "Colorless Card (NEO)"]);
}

#[tokio::test]
async fn export_of_empty_set_yields_no_lines() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cards/search"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "status": 404,
            "code": "not_found",
            "details": "Your query didn't match any cards."
        })))
        .mount(&mock_server)
        .await;

    let base_url = mock_server.uri();
    let lines = tokio::task::spawn_blocking(move || export_from(&base_url, &request(0, None)))
        .await
        .unwrap()
        .unwrap();

    assert!(lines.is_empty());
}
