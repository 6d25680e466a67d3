//! Attachment handling — pulls image bytes off the Discord CDN and packages
//! them for the formatting API.

use serenity::model::channel::Attachment;

use dateline_core::error::Result;
use dateline_relay::request::FormatRequest;

/// Fetch an image attachment's bytes and wrap them in a [`FormatRequest`].
pub async fn fetch(attachment: &Attachment) -> Result<FormatRequest> {
    let bytes = reqwest::get(&attachment.url)
        .await?
        .error_for_status()?
        .bytes()
        .await?
        .to_vec();

    Ok(FormatRequest::Image {
        bytes,
        filename: attachment.filename.clone(),
        content_type: attachment
            .content_type
            .clone()
            .unwrap_or_else(|| "image/jpeg".to_string()),
    })
}
