use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::de::DeserializeOwned;
use tokio::task::JoinHandle;
use url::Url;

use super::models::{CategoriesResponse, ResultsPage, TermsResponse};
use super::params::{
    CategoriesRequest, FeaturedRequest, RegisterShareRequest, SearchRequest, TermsRequest,
    ToQueryParams, TrendingTermsRequest,
};
use crate::error::{GifError, UpstreamService};
use crate::AppConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Search,
    Featured,
    Categories,
    SearchSuggestions,
    Autocomplete,
    TrendingTerms,
    RegisterShare,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Search => "/search",
            Endpoint::Featured => "/featured",
            Endpoint::Categories => "/categories",
            Endpoint::SearchSuggestions => "/search_suggestions",
            Endpoint::Autocomplete => "/autocomplete",
            Endpoint::TrendingTerms => "/trending_terms",
            Endpoint::RegisterShare => "/registershare",
        }
    }
}

/// Thin client for the Tenor v2 API.
///
/// Every request is signed with the server-held API key and the fixed client
/// key. Neither is ever taken from the caller.
#[derive(Clone)]
pub struct TenorClient {
    http: Client,
    base_url: Url,
    api_key: String,
    client_key: String,
}

impl TenorClient {
    /// Fails when `base_url` is not an absolute http(s) URL.
    pub fn new(http: Client, base_url: &str, api_key: &str, client_key: &str) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .with_context(|| format!("invalid Tenor API URL {:?}", base_url))?;
        if !matches!(base_url.scheme(), "http" | "https") || base_url.cannot_be_a_base() {
            bail!("Tenor API URL must be an http(s) URL, got {:?}", base_url.as_str());
        }

        Ok(Self {
            http,
            base_url,
            api_key: api_key.to_string(),
            client_key: client_key.to_string(),
        })
    }

    pub fn from_config(config: &AppConfig, http: Client) -> Result<Self> {
        Self::new(
            http,
            &config.tenor_api_url,
            &config.tenor_api_key,
            &config.tenor_client_key,
        )
    }

    /// Full request URL, with the signing parameters appended last.
    pub fn url(&self, endpoint: Endpoint, params: &impl ToQueryParams) -> Url {
        let mut url = self.base_url.clone();
        url.set_query(None);
        // `new` rejected cannot-be-a-base URLs, so the segments are always available
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .push(endpoint.path().trim_start_matches('/'));
        }
        url.query_pairs_mut()
            .extend_pairs(params.to_query_params())
            .append_pair("key", &self.api_key)
            .append_pair("client_key", &self.client_key);
        url
    }

    pub async fn fetch<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint,
        params: &impl ToQueryParams,
    ) -> Result<T, GifError> {
        let url = self.url(endpoint, params);
        tracing::debug!("tenor request: {}", endpoint.path());

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GifError::network(UpstreamService::Tenor, e))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!("tenor {} returned {}", endpoint.path(), status);
            return Err(GifError::from_status(UpstreamService::Tenor, status));
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| GifError::network(UpstreamService::Tenor, e))?;
        serde_json::from_slice(&body).map_err(|e| GifError::MalformedResponse(e.to_string()))
    }

    pub async fn search(&self, request: &SearchRequest) -> Result<ResultsPage, GifError> {
        self.fetch(Endpoint::Search, request).await
    }

    pub async fn featured(&self, request: &FeaturedRequest) -> Result<ResultsPage, GifError> {
        self.fetch(Endpoint::Featured, request).await
    }

    pub async fn categories(
        &self,
        request: &CategoriesRequest,
    ) -> Result<CategoriesResponse, GifError> {
        self.fetch(Endpoint::Categories, request).await
    }

    pub async fn search_suggestions(
        &self,
        request: &TermsRequest,
    ) -> Result<TermsResponse, GifError> {
        self.fetch(Endpoint::SearchSuggestions, request).await
    }

    pub async fn autocomplete(&self, request: &TermsRequest) -> Result<TermsResponse, GifError> {
        self.fetch(Endpoint::Autocomplete, request).await
    }

    pub async fn trending_terms(
        &self,
        request: &TrendingTermsRequest,
    ) -> Result<TermsResponse, GifError> {
        self.fetch(Endpoint::TrendingTerms, request).await
    }

    /// Tells Tenor a GIF was shared. The response body carries nothing useful.
    pub async fn register_share(&self, id: &str) -> Result<(), GifError> {
        let request = RegisterShareRequest { id: id.to_string() };
        let url = self.url(Endpoint::RegisterShare, &request);

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| GifError::network(UpstreamService::Tenor, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GifError::from_status(UpstreamService::Tenor, status));
        }
        Ok(())
    }

    /// Fires `register_share` on a detached task. Failures are logged and dropped;
    /// the handle exists for tests and may simply be discarded.
    pub fn spawn_register_share(&self, id: String) -> JoinHandle<()> {
        let client = self.clone();
        tokio::spawn(async move {
            if let Err(e) = client.register_share(&id).await {
                tracing::debug!("registershare for {} failed: {}", id, e);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> TenorClient {
        TenorClient::new(Client::new(), "https://tenor.example/v2/", "secret", "graysky").unwrap()
    }

    #[test]
    fn signing_params_come_last() {
        let url = client().url(
            Endpoint::Search,
            &SearchRequest {
                query: "cat".to_string(),
                ..Default::default()
            },
        );

        assert_eq!(url.path(), "/v2/search");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let names: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(names, vec!["q", "mediafilter", "key", "client_key"]);
        assert_eq!(pairs[2].1, "secret");
        assert_eq!(pairs[3].1, "graysky");
    }

    #[test]
    fn query_values_are_encoded() {
        let url = client().url(
            Endpoint::Autocomplete,
            &TermsRequest {
                query: "happy birthday & more".to_string(),
                locale: None,
            },
        );
        assert_eq!(url.path(), "/v2/autocomplete");
        let q: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        assert_eq!(q[0], ("q".to_string(), "happy birthday & more".to_string()));
        assert!(!url.as_str().contains("locale"));
    }

    #[test]
    fn every_endpoint_maps_to_its_path() {
        assert_eq!(Endpoint::SearchSuggestions.path(), "/search_suggestions");
        assert_eq!(Endpoint::TrendingTerms.path(), "/trending_terms");
        assert_eq!(Endpoint::RegisterShare.path(), "/registershare");
    }

    #[test]
    fn base_without_trailing_slash_keeps_its_path() {
        let client = TenorClient::new(Client::new(), "http://127.0.0.1:8080/v2", "k", "c").unwrap();
        let url = client.url(Endpoint::TrendingTerms, &TrendingTermsRequest::default());
        assert_eq!(url.path(), "/v2/trending_terms");

        let root = TenorClient::new(Client::new(), "http://127.0.0.1:8080", "k", "c").unwrap();
        let url = root.url(Endpoint::Featured, &FeaturedRequest::default());
        assert_eq!(url.path(), "/featured");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(TenorClient::new(Client::new(), "tenor.googleapis.com/v2", "k", "c").is_err());
        assert!(TenorClient::new(Client::new(), "mailto:api@tenor.com", "k", "c").is_err());
        assert!(TenorClient::new(Client::new(), "ftp://tenor.example/v2", "k", "c").is_err());
    }
}
