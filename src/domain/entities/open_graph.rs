//! OpenGraph preview metadata attached to a short link.

use serde::{Deserialize, Serialize};

/// Structured preview data rendered as HTML meta tags for crawler fetches.
///
/// Owned exclusively by its [`super::ShortLink`]; stored as a JSON text column
/// and deserialized at the storage boundary. PascalCase field names keep the
/// wire format compatible with blobs written by the administrative tooling.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenGraphInfo {
    #[serde(rename = "Type")]
    pub og_type: String,
    pub description: String,
    pub site_name: String,
    pub images: Vec<OpenGraphImage>,
    pub videos: Vec<OpenGraphVideo>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenGraphImage {
    pub url: String,
    pub mime_type: String,
    pub width: i16,
    pub height: i16,
    pub alt_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct OpenGraphVideo {
    pub url: String,
    pub mime_type: String,
    pub width: i16,
    pub height: i16,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_info() -> OpenGraphInfo {
        OpenGraphInfo {
            og_type: "website".to_string(),
            description: "A sample page".to_string(),
            site_name: "Sample Site".to_string(),
            images: vec![
                OpenGraphImage {
                    url: "https://cdn.test/one.png".to_string(),
                    mime_type: "image/png".to_string(),
                    width: 1200,
                    height: 630,
                    alt_text: "First".to_string(),
                },
                OpenGraphImage {
                    url: "https://cdn.test/two.png".to_string(),
                    mime_type: "image/png".to_string(),
                    width: 800,
                    height: 420,
                    alt_text: "Second".to_string(),
                },
            ],
            videos: vec![OpenGraphVideo {
                url: "https://cdn.test/clip.mp4".to_string(),
                mime_type: "video/mp4".to_string(),
                width: 1280,
                height: 720,
            }],
        }
    }

    #[test]
    fn test_open_graph_serde_round_trip() {
        let original = sample_info();

        let raw = serde_json::to_string(&original).unwrap();
        let parsed: OpenGraphInfo = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed, original);
    }

    #[test]
    fn test_open_graph_serializes_pascal_case_fields() {
        let value = serde_json::to_value(sample_info()).unwrap();

        assert!(value.get("Type").is_some());
        assert!(value.get("Description").is_some());
        assert!(value.get("SiteName").is_some());
        assert!(value.get("Images").is_some());
        assert!(value.get("Videos").is_some());
        assert!(value["Images"][0].get("AltText").is_some());
        assert!(value["Images"][0].get("MimeType").is_some());
    }

    #[test]
    fn test_open_graph_preserves_list_order() {
        let raw = serde_json::to_string(&sample_info()).unwrap();
        let parsed: OpenGraphInfo = serde_json::from_str(&raw).unwrap();

        assert_eq!(parsed.images[0].url, "https://cdn.test/one.png");
        assert_eq!(parsed.images[1].url, "https://cdn.test/two.png");
    }
}
