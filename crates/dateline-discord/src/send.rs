use serenity::http::Http;
use serenity::model::channel::Message;
use tracing::warn;

use dateline_relay::reply::render_replies;

/// Relay formatted text back as one or more chunked replies.
///
/// If the original message vanishes mid-flight (404 Unknown Message), the
/// remaining chunks are dropped — there is nobody left to reply to.
pub async fn send_formatted(http: &Http, msg: &Message, formatted: &str) {
    for reply in render_replies(formatted) {
        if let Err(e) = msg.reply(http, reply).await {
            if reply_target_gone(&e) {
                warn!("reply target gone, dropping remaining chunks");
            } else {
                warn!(error = %e, "failed to send reply");
            }
            return;
        }
    }
}

/// Send a single plain reply (input prompt or error detail).
pub async fn send_reply(http: &Http, msg: &Message, text: &str) {
    if let Err(e) = msg.reply(http, text).await {
        if reply_target_gone(&e) {
            warn!("reply target gone, dropping reply");
        } else {
            warn!(error = %e, "failed to send reply");
        }
    }
}

fn reply_target_gone(err: &serenity::Error) -> bool {
    matches!(
        err,
        serenity::Error::Http(serenity::http::HttpError::UnsuccessfulRequest(resp))
            if resp.status_code.as_u16() == 404
    )
}
