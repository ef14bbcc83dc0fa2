use serde::{Deserialize, Serialize};

/// The user's pick from the GIF picker.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbedSelection {
    pub id: String,
    pub asset_url: String,
    pub preview_url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    /// Access token of the posting account, forwarded to the blob store.
    pub token: String,
}

/// Opaque handle returned by the blob store. Passed through as-is.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct BlobRef(pub serde_json::Value);

/// Body of a successful `com.atproto.repo.uploadBlob` call.
#[derive(Debug, Deserialize)]
pub struct UploadBlobResponse {
    pub blob: BlobRef,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "$type", rename = "app.bsky.embed.external#view")]
pub struct EmbedView {
    pub external: ViewExternal,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "$type", rename = "app.bsky.embed.external#viewExternal")]
pub struct ViewExternal {
    pub uri: String,
    pub title: String,
    pub description: String,
}

/// The record attached to the post itself. It is tagged with the lexicon's
/// main id `app.bsky.embed.external`, not the `#view` id that [`EmbedView`]
/// carries: `#view` describes hydrated AppView output, while a stored post
/// embed is typed by the main definition.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "$type", rename = "app.bsky.embed.external")]
pub struct EmbedMain {
    pub external: External,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(tag = "$type", rename = "app.bsky.embed.external#external")]
pub struct External {
    pub uri: String,
    pub title: String,
    pub description: String,
    pub thumb: BlobRef,
}

/// Both shapes of the same embed: `view` renders now, `main` is stored with the post.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct SelectedEmbed {
    pub view: EmbedView,
    pub main: EmbedMain,
}

impl SelectedEmbed {
    /// Title and description stay empty no matter what the selection carried.
    pub fn new(uri: &str, thumb: BlobRef) -> Self {
        let title = String::new();
        let description = String::new();

        Self {
            view: EmbedView {
                external: ViewExternal {
                    uri: uri.to_string(),
                    title: title.clone(),
                    description: description.clone(),
                },
            },
            main: EmbedMain {
                external: External {
                    uri: uri.to_string(),
                    title,
                    description,
                    thumb,
                },
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn records_carry_lexicon_types() {
        let embed = SelectedEmbed::new("https://x/1.gif", BlobRef(json!("ref1")));
        let value = serde_json::to_value(&embed).unwrap();

        assert_eq!(
            value,
            json!({
                "view": {
                    "$type": "app.bsky.embed.external#view",
                    "external": {
                        "$type": "app.bsky.embed.external#viewExternal",
                        "uri": "https://x/1.gif",
                        "title": "",
                        "description": "",
                    }
                },
                "main": {
                    "$type": "app.bsky.embed.external",
                    "external": {
                        "$type": "app.bsky.embed.external#external",
                        "uri": "https://x/1.gif",
                        "title": "",
                        "description": "",
                        "thumb": "ref1",
                    }
                }
            })
        );
    }

    #[test]
    fn blob_ref_keeps_structured_blobs_intact() {
        let blob = json!({
            "$type": "blob",
            "ref": { "$link": "bafkreib" },
            "mimeType": "image/jpeg",
            "size": 2048,
        });
        let parsed: UploadBlobResponse =
            serde_json::from_value(json!({ "blob": blob.clone() })).unwrap();
        assert_eq!(parsed.blob, BlobRef(blob));
    }

    #[test]
    fn selection_accepts_camel_case_without_optional_text() {
        let selection: EmbedSelection = serde_json::from_value(json!({
            "id": "1",
            "assetUrl": "https://x/1.gif",
            "previewUrl": "https://x/1-preview.gif",
            "token": "tok",
        }))
        .unwrap();
        assert_eq!(selection.asset_url, "https://x/1.gif");
        assert!(selection.title.is_none());
        assert!(selection.description.is_none());
    }
}
