use serde::{Deserialize, Serialize};

/// Only playable formats are requested for result lists.
pub const MEDIA_FILTER: &str = "nanomp4,tinymp4,mp4,preview";

/// Turns a request into the ordered query pairs Tenor expects.
///
/// Unset optional fields never appear in the output. Tenor treats an empty
/// parameter differently from a missing one.
pub trait ToQueryParams {
    fn to_query_params(&self) -> Vec<(&'static str, String)>;
}

fn push_opt<T: ToString>(params: &mut Vec<(&'static str, String)>, name: &'static str, value: &Option<T>) {
    if let Some(value) = value {
        params.push((name, value.to_string()));
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    pub query: String,
    pub locale: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ToQueryParams for SearchRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];
        push_opt(&mut params, "locale", &self.locale);
        push_opt(&mut params, "limit", &self.limit);
        push_opt(&mut params, "pos", &self.cursor);
        params.push(("mediafilter", MEDIA_FILTER.to_string()));
        params
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeaturedRequest {
    pub locale: Option<String>,
    pub limit: Option<u32>,
    pub cursor: Option<String>,
}

impl ToQueryParams for FeaturedRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "locale", &self.locale);
        push_opt(&mut params, "limit", &self.limit);
        push_opt(&mut params, "pos", &self.cursor);
        params.push(("mediafilter", MEDIA_FILTER.to_string()));
        params
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    Featured,
    Trending,
}

impl CategoryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Featured => "featured",
            CategoryType::Trending => "trending",
        }
    }
}

impl std::fmt::Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoriesRequest {
    #[serde(rename = "type")]
    pub category_type: Option<CategoryType>,
    pub locale: Option<String>,
}

impl ToQueryParams for CategoriesRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "type", &self.category_type);
        push_opt(&mut params, "locale", &self.locale);
        params
    }
}

/// Shared by search suggestions and autocomplete.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TermsRequest {
    pub query: String,
    pub locale: Option<String>,
}

impl ToQueryParams for TermsRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![("q", self.query.clone())];
        push_opt(&mut params, "locale", &self.locale);
        params
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendingTermsRequest {
    pub locale: Option<String>,
}

impl ToQueryParams for TrendingTermsRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        push_opt(&mut params, "locale", &self.locale);
        params
    }
}

#[derive(Debug, Clone)]
pub struct RegisterShareRequest {
    pub id: String,
}

impl ToQueryParams for RegisterShareRequest {
    fn to_query_params(&self) -> Vec<(&'static str, String)> {
        vec![("id", self.id.clone())]
    }
}
