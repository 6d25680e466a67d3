/// Payload for one formatting-API call. Exactly one variant per dispatch.
#[derive(Debug)]
pub enum FormatRequest {
    /// Free-form text, mention tokens already stripped.
    Text { text: String },
    /// Raw image bytes plus the metadata the multipart upload needs.
    Image {
        bytes: Vec<u8>,
        filename: String,
        content_type: String,
    },
}
