//! HTTP catalog adapter.

use async_trait::async_trait;
use aurum::{
    categories::Category, products::Product, query::ProductQuery, settings::Settings,
    stones::Stone, urls::encode_component,
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::{api::CatalogApi, config::ClientConfig, errors::ClientError};

/// HTTP client for the catalog REST API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    base_url: String,
    http: Client,
}

impl HttpCatalog {
    /// Create a new client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the API URL is not an absolute http(s) URL or the HTTP client cannot
    /// be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.api_url.trim().trim_end_matches('/').to_string();

        if !(base_url.starts_with("http://") || base_url.starts_with("https://")) {
            return Err(ClientError::InvalidUrl(config.api_url.clone()));
        }

        let http = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self { base_url, http })
    }

    /// The absolute URL for an API path.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    async fn send(&self, path: &str, params: &[(&str, String)]) -> Result<Response, ClientError> {
        debug!(path, params = params.len(), "fetching catalog resource");

        let response = self
            .http
            .get(self.endpoint(path))
            .query(params)
            .send()
            .await?;

        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T, ClientError> {
        let response = self.send(path, params).await?;

        if !response.status().is_success() {
            return Err(unexpected_status(path, response).await);
        }

        Ok(response.json().await?)
    }

    /// Like [`HttpCatalog::get_json`], but a 404 or a `null` body is `None`.
    async fn get_optional_json<T: DeserializeOwned>(
        &self,
        path: &str,
    ) -> Result<Option<T>, ClientError> {
        let response = self.send(path, &[]).await?;

        if response.status() == StatusCode::NOT_FOUND {
            debug!(path, "catalog resource not found");

            return Ok(None);
        }

        if !response.status().is_success() {
            return Err(unexpected_status(path, response).await);
        }

        Ok(response.json::<Option<T>>().await?)
    }
}

#[async_trait]
impl CatalogApi for HttpCatalog {
    async fn fetch_products(&self, query: &ProductQuery) -> Result<Vec<Product>, ClientError> {
        self.get_json("products", &query.to_params()).await
    }

    async fn fetch_product_by_slug(&self, slug: &str) -> Result<Option<Product>, ClientError> {
        self.get_optional_json(&product_slug_path(slug)).await
    }

    async fn fetch_categories(&self) -> Result<Vec<Category>, ClientError> {
        self.get_json("categories", &[]).await
    }

    async fn fetch_stones(&self) -> Result<Vec<Stone>, ClientError> {
        self.get_json("stones", &[]).await
    }

    async fn fetch_settings(&self) -> Result<Settings, ClientError> {
        self.get_json("settings", &[]).await
    }
}

/// The API path of a product looked up by slug.
pub fn product_slug_path(slug: &str) -> String {
    format!("products/slug/{}", encode_component(slug))
}

async fn unexpected_status(path: &str, response: Response) -> ClientError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();

    ClientError::UnexpectedStatus {
        path: path.to_string(),
        status,
        body,
    }
}
