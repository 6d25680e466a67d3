//! Stateless dispatch decision — pure functions over the inbound message so
//! the Discord handler carries no classification logic of its own.

const IMAGE_EXTENSIONS: [&str; 5] = [".jpg", ".jpeg", ".png", ".gif", ".webp"];

/// Which relay path a relevant message takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    ImageAttachment,
    ImageUrl,
    Text,
}

/// Outcome of the relevance + classification checks for one inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DispatchDecision {
    /// Not addressed to us (or sent by us) — no side effect of any kind.
    Ignore,
    /// Mentioned, but nothing to work with — ask the user for input.
    AskForInput,
    Process(RequestKind),
}

/// Decide what to do with an inbound message.
///
/// `content` must already have mention tokens stripped. Classification
/// priority: image attachment, then image URL, then plain text.
pub fn decide(
    mentioned: bool,
    self_authored: bool,
    content: &str,
    has_attachment: bool,
    first_attachment_content_type: Option<&str>,
) -> DispatchDecision {
    if !mentioned || self_authored {
        return DispatchDecision::Ignore;
    }

    if content.is_empty() && !has_attachment {
        return DispatchDecision::AskForInput;
    }

    if first_attachment_content_type.is_some_and(|ct| ct.starts_with("image/")) {
        return DispatchDecision::Process(RequestKind::ImageAttachment);
    }

    if is_image_url(content) {
        return DispatchDecision::Process(RequestKind::ImageUrl);
    }

    DispatchDecision::Process(RequestKind::Text)
}

/// True when `content` is an http(s) URL whose path ends in a known image
/// extension (case-insensitive, query string ignored).
pub fn is_image_url(content: &str) -> bool {
    if !content.starts_with("http://") && !content.starts_with("https://") {
        return false;
    }
    let path = content
        .split(['?', '#'])
        .next()
        .unwrap_or(content)
        .to_lowercase();
    IMAGE_EXTENSIONS.iter().any(|ext| path.ends_with(ext))
}
