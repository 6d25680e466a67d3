use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, warn};

use dateline_core::error::{DatelineError, Result};

use crate::request::FormatRequest;

/// Timeout for one formatting-API call.
pub const API_TIMEOUT: Duration = Duration::from_secs(180);
/// Timeout for fetching a user-supplied image URL.
pub const DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Substituted when a 200 response carries no `formatted_dates` field.
const NO_DATES_FALLBACK: &str = "Error: No dates found";

/// Client for the remote formatting API.
///
/// One bounded-timeout call per dispatch; failures come back as explicit
/// [`DatelineError`] variants, never as panics or hangs.
pub struct FormatClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
    api_timeout: Duration,
    download_timeout: Duration,
}

impl FormatClient {
    pub fn new(base_url: String, api_key: Option<String>) -> Self {
        Self::with_timeouts(base_url, api_key, API_TIMEOUT, DOWNLOAD_TIMEOUT)
    }

    /// Construct with explicit timeouts — tests shrink these to milliseconds.
    pub fn with_timeouts(
        base_url: String,
        api_key: Option<String>,
        api_timeout: Duration,
        download_timeout: Duration,
    ) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url,
            api_key,
            api_timeout,
            download_timeout,
        }
    }

    /// Submit one request and return the formatted text.
    pub async fn format(&self, request: FormatRequest) -> Result<String> {
        match request {
            FormatRequest::Text { text } => self.format_text(&text).await,
            FormatRequest::Image {
                bytes,
                filename,
                content_type,
            } => self.format_image(bytes, filename, content_type).await,
        }
    }

    async fn format_text(&self, text: &str) -> Result<String> {
        let url = format!("{}/format/text", self.base_url);
        debug!(chars = text.len(), "submitting text to formatting API");

        let mut builder = self
            .http
            .post(&url)
            .timeout(self.api_timeout)
            .json(&serde_json::json!({ "text": text }));
        if let Some(ref key) = self.api_key {
            builder = builder.header("Authorization", format!("Bearer {key}"));
        }

        let resp = builder.send().await?;
        parse_format_response(resp).await
    }

    // The image endpoint takes no bearer credential — asymmetry kept from the
    // API as deployed.
    async fn format_image(
        &self,
        bytes: Vec<u8>,
        filename: String,
        content_type: String,
    ) -> Result<String> {
        let url = format!("{}/format/image", self.base_url);
        debug!(filename = %filename, bytes = bytes.len(), "submitting image to formatting API");

        let part = reqwest::multipart::Part::bytes(bytes)
            .file_name(filename)
            .mime_str(&content_type)?;
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(&url)
            .timeout(self.api_timeout)
            .multipart(form)
            .send()
            .await?;
        parse_format_response(resp).await
    }

    /// Fetch a user-supplied image URL and package it for the image endpoint.
    ///
    /// Filename comes from the URL's last path segment; content type from the
    /// response header, defaulting to `image/jpeg`.
    pub async fn download_image(&self, url: &str) -> Result<FormatRequest> {
        debug!(url = %url, "downloading image");

        let resp = self
            .http
            .get(url)
            .timeout(self.download_timeout)
            .send()
            .await?;

        let status = resp.status().as_u16();
        if status != 200 {
            return Err(DatelineError::Download { status });
        }

        let content_type = resp
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("image/jpeg")
            .to_string();
        let filename = filename_from_url(url);
        let bytes = resp.bytes().await?.to_vec();

        Ok(FormatRequest::Image {
            bytes,
            filename,
            content_type,
        })
    }
}

#[derive(Deserialize)]
struct FormatResponse {
    formatted_dates: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    detail: String,
}

async fn parse_format_response(resp: reqwest::Response) -> Result<String> {
    let status = resp.status().as_u16();

    if status != 200 {
        let body = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<ApiErrorBody>(&body)
            .map(|b| b.detail)
            .unwrap_or(body);
        warn!(status, detail = %detail, "formatting API error");
        return Err(DatelineError::Api(detail));
    }

    let body: FormatResponse = resp.json().await?;
    Ok(body
        .formatted_dates
        .unwrap_or_else(|| NO_DATES_FALLBACK.to_string()))
}

/// Last path segment of a URL, with any query/fragment stripped.
fn filename_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.rsplit('/')
        .next()
        .filter(|s| !s.is_empty())
        .unwrap_or("image")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filename_is_last_path_segment() {
        assert_eq!(
            filename_from_url("https://example.com/posters/tour.png"),
            "tour.png"
        );
    }

    #[test]
    fn filename_ignores_query_string() {
        assert_eq!(
            filename_from_url("https://example.com/a/b.jpg?width=600#frag"),
            "b.jpg"
        );
    }

    #[test]
    fn trailing_slash_falls_back() {
        assert_eq!(filename_from_url("https://example.com/posters/"), "image");
    }
}
