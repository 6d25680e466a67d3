use crate::chunk::split_message;

/// Fixed suffix on the first reply of every successful relay.
pub const DISCLAIMER: &str = "Please double-check all info as Dateline can make mistakes.";

/// Continuation marker inside every follow-up chunk.
pub const CONTINUED: &str = "(continued...)";

/// Render formatted text into the ordered reply messages to send.
///
/// The first chunk is wrapped in a code block and carries the disclaimer;
/// every further chunk gets its own code block with a continuation marker.
pub fn render_replies(formatted: &str) -> Vec<String> {
    let mut chunks = split_message(formatted).into_iter();
    let mut replies = Vec::new();

    if let Some(first) = chunks.next() {
        replies.push(format!("```\n{first}\n```\n\n{DISCLAIMER}"));
    }
    for chunk in chunks {
        replies.push(format!("```\n{CONTINUED}\n{chunk}\n```"));
    }

    replies
}
