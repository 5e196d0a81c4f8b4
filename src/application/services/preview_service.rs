//! OpenGraph preview rendering for crawler-driven fetches.

use crate::domain::entities::{OpenGraphInfo, ShortLink};

const OG_IMAGE_TAG: &str = r#"<meta property="og:image" content="$image_url">"#;
const OG_VIDEO_TAG: &str = r#"<meta property="og:video" content="$video_url">"#;

const PREVIEW_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en-US">
<head>
    <meta charset="utf-8">
    <title>$title</title>
    <meta property="og:title" content="$title">
    <meta property="og:description" content="$description">
    <meta property="og:site_name" content="$site_name">
    <meta property="og:type" content="$og_type">
    <meta property="og:url" content="$request_url">
    $og_image_tags
    $og_video_tags
    <meta http-equiv="refresh" content="0;url=$redirect_url">
    <style>
    .center-screen {
      display: flex;
      justify-content: center;
      align-items: center;
      text-align: center;
      min-height: 100vh;
    }
    </style>
</head>
<body>
    <div class="center-screen">
        <p>You are being redirected to $title.<br/>If you are not redirected in 10 seconds click <a href="$redirect_url">here</a></p>
    </div>
</body>
</html>
"#;

/// Renders the HTML document served to content-preview crawlers instead of a
/// redirect.
///
/// Pure placeholder substitution into a static template; always yields a
/// complete document and has no error path. Substituted values are NOT
/// HTML-escaped: metadata originates from the trusted administrative tool,
/// and the unescaped output matches the established wire behavior (see
/// DESIGN.md).
pub struct PreviewService {
    default_site_name: String,
}

impl PreviewService {
    pub fn new(default_site_name: String) -> Self {
        Self { default_site_name }
    }

    /// Renders the preview document for `link`.
    ///
    /// `request_url` is the canonical URL of the incoming request (the
    /// `og:url` value); `redirect_url` is the resolved target, embedded as a
    /// meta-refresh destination and a fallback anchor. One `og:image` tag is
    /// emitted per image in list order, likewise `og:video`. A blank site
    /// name falls back to the configured default.
    ///
    /// Callers are expected to have checked [`ShortLink::has_preview`]; a
    /// link without metadata renders with empty fields.
    pub fn render(&self, request_url: &str, redirect_url: &str, link: &ShortLink) -> String {
        let empty = OpenGraphInfo::default();
        let og = link.open_graph.as_ref().unwrap_or(&empty);

        let image_tags: String = og
            .images
            .iter()
            .map(|image| OG_IMAGE_TAG.replace("$image_url", &image.url))
            .collect();

        let video_tags: String = og
            .videos
            .iter()
            .map(|video| OG_VIDEO_TAG.replace("$video_url", &video.url))
            .collect();

        let site_name = if og.site_name.trim().is_empty() {
            &self.default_site_name
        } else {
            &og.site_name
        };

        PREVIEW_TEMPLATE
            .replace("$og_image_tags", &image_tags)
            .replace("$og_video_tags", &video_tags)
            .replace("$title", &link.title)
            .replace("$description", &og.description)
            .replace("$site_name", site_name)
            .replace("$og_type", &og.og_type)
            .replace("$request_url", request_url)
            .replace("$redirect_url", redirect_url)
    }
}
