//! Storefront search
//!
//! [`StorefrontClient`] queries the Steam store search endpoint and maps the
//! raw items to [`Application`] records.

use async_trait::async_trait;
use serde::Deserialize;

use crate::domain::Application;
use crate::error::{Result, search};

/// Public Steam store
pub const DEFAULT_STORE_URL: &str = "https://store.steampowered.com";

/// The store rejects some requests carrying the default reqwest identification
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                                  (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36";

/// Free-text catalog search
#[async_trait]
pub trait StoreSearch: Send + Sync {
    async fn search(&self, term: &str) -> Result<Vec<Application>>;
}

/// Reject blank terms before anything goes over the wire
pub fn validate_term(term: &str) -> Result<&str> {
    let trimmed = term.trim();
    if trimmed.is_empty() {
        return Err(search::invalid_input("search term must not be blank"));
    }
    Ok(trimmed)
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
struct SearchItem {
    id: u32,
    #[serde(default)]
    name: String,
    #[serde(default, rename = "type")]
    kind: String,
    #[serde(default)]
    price: Option<SearchPrice>,
    #[serde(default)]
    tiny_image: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchPrice {
    #[serde(default, rename = "final")]
    final_price: u64,
    #[serde(default)]
    initial: u64,
    #[serde(default)]
    discount_percent: Option<u8>,
}

impl SearchPrice {
    fn discount(&self) -> u8 {
        if let Some(pct) = self.discount_percent {
            return pct;
        }
        if self.initial > self.final_price && self.initial > 0 {
            let pct = (self.initial - self.final_price) * 100 / self.initial;
            return u8::try_from(pct).unwrap_or(100);
        }
        0
    }
}

impl From<SearchItem> for Application {
    fn from(item: SearchItem) -> Self {
        let (price_minor_units, discount_percent) = item
            .price
            .as_ref()
            .map_or((0, 0), |p| (p.final_price, p.discount()));
        Application {
            id: item.id,
            name: item.name,
            kind: item.kind,
            price_minor_units,
            discount_percent,
            thumbnail_url: item.tiny_image.unwrap_or_default(),
        }
    }
}

/// HTTP client for the store search API
#[derive(Debug, Clone)]
pub struct StorefrontClient {
    http: reqwest::Client,
    base_url: String,
    language: String,
    country: String,
}

impl StorefrontClient {
    pub fn new(
        base_url: impl Into<String>,
        language: impl Into<String>,
        country: impl Into<String>,
    ) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .build()
            .map_err(|e| search::network(e.to_string()))?;
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            language: language.into(),
            country: country.into(),
        })
    }
}

#[async_trait]
impl StoreSearch for StorefrontClient {
    async fn search(&self, term: &str) -> Result<Vec<Application>> {
        let term = validate_term(term)?;
        let url = format!("{}/api/storesearch/", self.base_url);
        tracing::debug!(%url, term, "Searching store");

        let response = self
            .http
            .get(&url)
            .query(&[
                ("term", term),
                ("l", self.language.as_str()),
                ("cc", self.country.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: SearchResponse = response.json().await?;
        tracing::info!(term, results = body.items.len(), "Store search finished");
        Ok(body.items.into_iter().map(Application::from).collect())
    }
}
