//! Content API client
//!
//! Thin reqwest wrapper over the four content endpoints. Every call races a
//! cancellation token (biased toward cancellation) so navigating away from a
//! view aborts its in-flight fetches deterministically.

use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::error;

use super::error::ContentError;
use super::models::{Blog, BlogsPayload, Envelope, GalleryItem, GalleryPayload, Tour, ToursPayload};
use crate::constants;
use crate::i18n::Language;

/// Client for the external content API
pub struct ContentClient {
    http: Client,
    api_base: String,
}

impl ContentClient {
    /// Create the HTTP client with sane timeouts for small JSON payloads
    fn create_http_client() -> Client {
        Client::builder()
            .user_agent("Solterra/0.1")
            .connect_timeout(constants::http::CONNECT_TIMEOUT)
            .timeout(constants::http::REQUEST_TIMEOUT)
            .build()
            .unwrap_or_else(|e| {
                error!("Failed to build HTTP client: {}. Using default client.", e);
                Client::new()
            })
    }

    /// Create a new client for the given API base URL
    pub fn new(api_base: impl Into<String>) -> Self {
        Self {
            http: Self::create_http_client(),
            api_base: api_base.into(),
        }
    }

    /// GET {base}/tours
    pub async fn fetch_tours(&self, cancel: &CancellationToken) -> Result<Vec<Tour>, ContentError> {
        let url = format!("{}/tours", self.api_base);
        let envelope: Envelope<ToursPayload> = self.get_json(&url, cancel).await?;
        Ok(envelope.data.tours)
    }

    /// GET {base}/blogs?status=published
    pub async fn fetch_blogs(&self, cancel: &CancellationToken) -> Result<Vec<Blog>, ContentError> {
        let url = format!("{}/blogs?status=published", self.api_base);
        let envelope: Envelope<BlogsPayload> = self.get_json(&url, cancel).await?;
        Ok(envelope.data.blogs)
    }

    /// GET {base}/blogs/{id}?lang=
    pub async fn fetch_blog(
        &self,
        id: &str,
        lang: Language,
        cancel: &CancellationToken,
    ) -> Result<Blog, ContentError> {
        let url = format!("{}/blogs/{}?lang={}", self.api_base, id, lang.code());
        let envelope: Envelope<Blog> = self.get_json(&url, cancel).await?;
        Ok(envelope.data)
    }

    /// GET {base}/gallery?status=active
    pub async fn fetch_gallery(
        &self,
        cancel: &CancellationToken,
    ) -> Result<Vec<GalleryItem>, ContentError> {
        let url = format!("{}/gallery?status=active", self.api_base);
        let envelope: Envelope<GalleryPayload> = self.get_json(&url, cancel).await?;
        Ok(envelope.data.gallery_items)
    }

    /// Race the request against the cancellation token. Biased so an
    /// already-cancelled token never touches the network.
    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        cancel: &CancellationToken,
    ) -> Result<T, ContentError> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(ContentError::Cancelled),
            result = self.request(url) => result,
        }
    }

    async fn request<T: DeserializeOwned>(&self, url: &str) -> Result<T, ContentError> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ContentError::Status {
                code: status.as_u16(),
            });
        }
        response
            .json::<T>()
            .await
            .map_err(|e| ContentError::Decode(e.to_string()))
    }
}
