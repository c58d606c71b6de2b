use crate::error::{ExportError, ExportResult};
use crate::models::Format;
use serde::Deserialize;
use std::collections::HashMap;
use std::thread;
use std::time::Duration;

/// Production Scryfall API base URL
pub const SCRYFALL_API: &str = "https://api.scryfall.com";

const USER_AGENT: &str = "DecklistExport/1.0";

/// Courtesy delay between page requests, per Scryfall's rate guidelines
const REQUEST_DELAY: Duration = Duration::from_millis(100);

/// Delay before retrying a rate-limited request
const RATE_LIMIT_DELAY: Duration = Duration::from_millis(100);

/// Attempts for a single page before giving up on rate limiting
const MAX_RATE_LIMIT_ATTEMPTS: u32 = 5;

/// Scryfall card response
#[derive(Debug, Deserialize, Clone)]
#[allow(dead_code)]
pub struct ScryfallCard {
    pub id: String,
    pub name: String,
    pub set: String,
    pub set_name: String,
    pub collector_number: String,
    pub rarity: String,
    /// Color symbols (W, U, B, R, G); absent or empty for colorless cards
    #[serde(default)]
    pub colors: Option<Vec<String>>,
    /// Format name -> "legal" / "not_legal" / "restricted" / "banned"
    #[serde(default)]
    pub legalities: HashMap<String, String>,
    #[serde(default)]
    pub mana_cost: Option<String>,
    #[serde(default)]
    pub type_line: Option<String>,
}

impl ScryfallCard {
    /// Returns true if this card is marked legal in the given format
    pub fn is_legal_in(&self, format: Format) -> bool {
        self.legalities
            .get(format.as_str())
            .map(|status| status == "legal")
            .unwrap_or(false)
    }

    /// Returns the card's color letters, empty for colorless cards
    pub fn color_letters(&self) -> &[String] {
        self.colors.as_deref().unwrap_or(&[])
    }
}

/// One page of a paginated search response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct CardPage {
    pub data: Vec<ScryfallCard>,
    #[serde(default)]
    pub has_more: bool,
    #[serde(default)]
    pub next_page: Option<String>,
    #[serde(default)]
    pub total_cards: Option<u32>,
}

/// Scryfall API error response
#[derive(Debug, Deserialize)]
#[allow(dead_code)]
pub struct ScryfallError {
    pub status: u16,
    pub code: String,
    pub details: String,
}

/// Builds the search query string for a set and format
pub(crate) fn build_query(set_code: &str, format: Format, commons_only: bool) -> String {
    let mut query = format!("e:{} f:{}", set_code.to_lowercase(), format.as_str());
    if commons_only {
        query.push_str(" rarity:common");
    }
    query
}

/// Search for all cards of a set legal in a format, following pagination
pub fn search_cards(
    set_code: &str,
    format: Format,
    commons_only: bool,
) -> ExportResult<Vec<ScryfallCard>> {
    search_cards_from(SCRYFALL_API, set_code, format, commons_only)
}

/// Searches against the given base URL (for testing with mock servers).
pub(crate) fn search_cards_from(
    base_url: &str,
    set_code: &str,
    format: Format,
    commons_only: bool,
) -> ExportResult<Vec<ScryfallCard>> {
    let query = build_query(set_code, format, commons_only);
    let mut url = format!(
        "{}/cards/search?order=name&q={}",
        base_url,
        urlencoding::encode(&query)
    );

    log::info!("Searching Scryfall: {}", query);

    let client = reqwest::blocking::Client::new();
    let mut cards: Vec<ScryfallCard> = Vec::new();
    let mut page = 1;

    loop {
        let body = match fetch_page(&client, &url) {
            Ok(body) => body,
            // Scryfall reports an empty search result as a not_found error
            Err(ExportError::ApiResponse { ref code, .. })
                if code == "not_found" && cards.is_empty() =>
            {
                log::info!("No cards matched the search");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        cards.extend(body.data);
        log::info!("Fetched page {} ({} cards so far)", page, cards.len());

        match body.next_page {
            Some(next) if body.has_more => {
                url = next;
                page += 1;
                thread::sleep(REQUEST_DELAY);
            }
            _ => break,
        }
    }

    Ok(cards)
}

/// Fetches a single page, retrying on rate limiting with a bounded delay
fn fetch_page(client: &reqwest::blocking::Client, url: &str) -> ExportResult<CardPage> {
    let mut attempts = 0;

    loop {
        let response = client.get(url).header("User-Agent", USER_AGENT).send()?;
        let status = response.status();

        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            attempts += 1;
            if attempts >= MAX_RATE_LIMIT_ATTEMPTS {
                return Err(ExportError::RateLimited { attempts });
            }
            log::debug!(
                "Rate limited by Scryfall, retrying in {:?} (attempt {}/{})",
                RATE_LIMIT_DELAY,
                attempts,
                MAX_RATE_LIMIT_ATTEMPTS
            );
            thread::sleep(RATE_LIMIT_DELAY);
            continue;
        }

        let body = response.text()?;

        if status.is_success() {
            return Ok(serde_json::from_str::<CardPage>(&body)?);
        }

        return match serde_json::from_str::<ScryfallError>(&body) {
            Ok(error) => Err(ExportError::ApiResponse {
                code: error.code,
                details: error.details,
            }),
            Err(_) => Err(ExportError::HttpStatus(status)),
        };
    }
}

#[cfg(test)]
#[path = "scryfall_tests.rs"]
mod tests;
