//! OMDb API provider
//!
//! API Flow:
//! 1. Title Search: `/?s={term}` → up to 10 titles with IMDB IDs, no ratings
//! 2. Details: `/?i={imdb_id}` → rating, genre, language and country for one title
//!
//! Both endpoints answer HTTP 200 with `"Response": "False"` when they have
//! nothing to return, so the JSON envelope decides success, not the status code.

use crate::{
    error::{AppError, AppResult},
    models::{CatalogDetails, CatalogRecord, OmdbLookupResponse, OmdbSearchResponse},
    services::providers::CatalogProvider,
};
use reqwest::Client as HttpClient;
use std::time::Duration;

/// Errors the catalog reports for an empty result rather than a failure
const EMPTY_RESULT_ERRORS: &[&str] = &["movie not found", "series not found", "too many results"];

/// How much of a failed response body goes into the error message
const ERROR_EXCERPT_CHARS: usize = 200;

#[derive(Clone)]
pub struct OmdbProvider {
    http_client: HttpClient,
    api_key: String,
    api_url: String,
}

impl OmdbProvider {
    /// Creates a new OMDb provider whose every request is bounded by `timeout`
    pub fn new(api_key: String, api_url: String, timeout: Duration) -> AppResult<Self> {
        let http_client = HttpClient::builder().timeout(timeout).build()?;

        Ok(Self {
            http_client,
            api_key,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }

    /// Issues a GET against the API root and returns the raw body
    async fn get(&self, params: &[(&str, &str)]) -> AppResult<String> {
        let url = format!("{}/", self.api_url);

        let response = self
            .http_client
            .get(&url)
            .query(&[("apikey", self.api_key.as_str())])
            .query(params)
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalApi(format!(
                "OMDb API returned status {}: {}",
                status,
                excerpt(&body)
            )));
        }

        Ok(response.text().await?)
    }
}

/// Leading part of an error body, cut on a char boundary
fn excerpt(body: &str) -> &str {
    match body.char_indices().nth(ERROR_EXCERPT_CHARS) {
        Some((end, _)) => &body[..end],
        None => body,
    }
}

/// Whether a `"Response": "False"` error message just means "no results"
fn is_empty_result(error: Option<&str>) -> bool {
    let Some(error) = error else {
        return true;
    };
    let error = error.to_lowercase();
    EMPTY_RESULT_ERRORS
        .iter()
        .any(|pattern| error.contains(pattern))
}

/// Decodes a title search body
fn parse_search(body: &str) -> AppResult<Vec<CatalogRecord>> {
    let response: OmdbSearchResponse = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse OMDb search response: {}", e))
    })?;

    if response.is_success() {
        return Ok(response.search.unwrap_or_default());
    }

    if is_empty_result(response.error.as_deref()) {
        Ok(Vec::new())
    } else {
        Err(AppError::ExternalApi(format!(
            "OMDb search failed: {}",
            response.error.unwrap_or_default()
        )))
    }
}

/// Decodes a by-ID lookup body
fn parse_details(body: &str) -> AppResult<Option<CatalogDetails>> {
    let envelope: OmdbLookupResponse = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse OMDb lookup response: {}", e))
    })?;

    tracing::debug!(
        response = %envelope.response,
        error = envelope.error.as_deref().unwrap_or_default(),
        "OMDb lookup envelope"
    );

    if envelope.response != "True" {
        return if is_empty_result(envelope.error.as_deref())
            || envelope
                .error
                .as_deref()
                .is_some_and(|e| e.to_lowercase().contains("incorrect imdb id"))
        {
            Ok(None)
        } else {
            Err(AppError::ExternalApi(format!(
                "OMDb lookup failed: {}",
                envelope.error.unwrap_or_default()
            )))
        };
    }

    let details: CatalogDetails = serde_json::from_str(body).map_err(|e| {
        AppError::ExternalApi(format!("Failed to parse OMDb details: {}", e))
    })?;
    Ok(Some(details))
}

#[async_trait::async_trait]
impl CatalogProvider for OmdbProvider {
    async fn search_titles(&self, term: &str) -> AppResult<Vec<CatalogRecord>> {
        if term.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "Search term cannot be empty".to_string(),
            ));
        }

        let body = self.get(&[("s", term)]).await?;
        let records = parse_search(&body)?;

        tracing::info!(
            term = %term,
            results = records.len(),
            provider = "omdb",
            "Title search completed"
        );

        Ok(records)
    }

    async fn lookup_by_id(&self, imdb_id: &str) -> AppResult<Option<CatalogDetails>> {
        let body = self.get(&[("i", imdb_id)]).await?;
        let details = parse_details(&body)?;

        tracing::debug!(
            imdb_id = %imdb_id,
            found = details.is_some(),
            provider = "omdb",
            "Details fetched"
        );

        Ok(details)
    }

    fn name(&self) -> &'static str {
        "omdb"
    }
}
