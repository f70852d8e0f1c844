//! HTTP client for the Solvle recommender service

use super::types::{Analysis, RowScore};
use crate::query::Request;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use thiserror::Error;
use url::Url;

/// Default recommender location
pub const DEFAULT_SERVER: &str = "http://localhost:8081";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Debug, Error)]
pub enum RecommenderError {
    #[error("Invalid recommender URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Recommender URL {0} cannot take a path")]
    NotABase(String),

    #[error("Request to recommender failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Recommender returned {status}: {body}")]
    Status { status: StatusCode, body: String },
}

/// Recommender client
///
/// Cheap to clone; clones share one connection pool.
#[derive(Debug, Clone)]
pub struct RecommenderClient {
    http: Client,
    base: Url,
}

impl RecommenderClient {
    /// Create a client for the service at `base_url`
    ///
    /// # Errors
    /// Returns an error if the URL is invalid or the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self, RecommenderError> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(RecommenderError::NotABase(base_url.to_string()));
        }

        let http = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .user_agent(concat!("solvle/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self { http, base })
    }

    #[must_use]
    pub fn base(&self) -> &Url {
        &self.base
    }

    /// Full URL for a request, with path segments and query escaped
    ///
    /// # Errors
    /// Returns `RecommenderError::NotABase` if the base URL cannot take a path.
    pub fn url_for(&self, request: &Request) -> Result<Url, RecommenderError> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|()| RecommenderError::NotABase(self.base.to_string()))?
            .pop_if_empty()
            .extend(request.segments());

        if !request.query().is_empty() {
            url.query_pairs_mut().extend_pairs(request.query());
        }
        Ok(url)
    }

    /// Suggestions for the encoded knowledge state
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status or bad JSON.
    pub async fn analyze(&self, request: &Request) -> Result<Analysis, RecommenderError> {
        self.get_json(request).await
    }

    /// Score of a single entered word
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status or bad JSON.
    pub async fn score(&self, request: &Request) -> Result<RowScore, RecommenderError> {
        self.get_json(request).await
    }

    /// Guesses the recommender would play to reach a solution
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status or bad JSON.
    pub async fn solve(&self, request: &Request) -> Result<Vec<String>, RecommenderError> {
        self.get_json(request).await
    }

    /// Anagrams keyed by word length
    ///
    /// # Errors
    /// Returns an error on transport failure, non-success status or bad JSON.
    pub async fn anagrams(
        &self,
        request: &Request,
    ) -> Result<BTreeMap<usize, Vec<String>>, RecommenderError> {
        self.get_json(request).await
    }

    async fn get_json<T: DeserializeOwned>(&self, request: &Request) -> Result<T, RecommenderError> {
        let url = self.url_for(request)?;
        tracing::info!(%request, "recommender request");

        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(%status, %request, "recommender request failed");
            return Err(RecommenderError::Status {
                status,
                body: body.chars().take(200).collect(),
            });
        }

        Ok(response.json().await?)
    }
}
