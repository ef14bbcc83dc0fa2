use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single GIF as Tenor describes it. Fields Tenor omits fall back to defaults.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TenorResult {
    pub id: String,
    pub created: f64,
    pub hasaudio: bool,
    pub hascaption: bool,
    pub title: String,
    pub content_description: String,
    pub itemurl: String,
    pub url: String,
    pub tags: Vec<String>,
    pub flags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bg_color: Option<String>,
    /// Keyed by format name, e.g. `tinymp4` or `preview`.
    pub media_formats: HashMap<String, TenorMedia>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TenorMedia {
    pub url: String,
    pub dims: Vec<u32>,
    pub duration: f64,
    pub size: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TenorCategory {
    pub searchterm: String,
    pub path: String,
    pub image: String,
    pub name: String,
}

/// Response of `/search` and `/featured`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ResultsPage {
    pub next: String,
    pub results: Vec<TenorResult>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct CategoriesResponse {
    pub tags: Vec<TenorCategory>,
}

/// Response of `/search_suggestions`, `/autocomplete` and `/trending_terms`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct TermsResponse {
    pub results: Vec<String>,
}

impl TenorResult {
    pub fn media(&self, format: &str) -> Option<&TenorMedia> {
        self.media_formats.get(format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sparse_results() {
        let page: ResultsPage = serde_json::from_value(serde_json::json!({
            "next": "c2",
            "results": [{
                "id": "1",
                "media_formats": {
                    "preview": { "url": "https://x/1-preview.gif", "dims": [220, 124], "duration": 0, "size": 1024 }
                },
                "flags": []
            }]
        }))
        .unwrap();

        assert_eq!(page.next, "c2");
        assert_eq!(page.results.len(), 1);
        let gif = &page.results[0];
        assert_eq!(gif.id, "1");
        assert!(gif.bg_color.is_none());
        assert_eq!(gif.media("preview").unwrap().dims, vec![220, 124]);
        assert!(gif.media("mp4").is_none());
    }
}
