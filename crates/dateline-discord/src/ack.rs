//! Reaction-based status markers.
//!
//! Adds emoji reactions to the user's message to show dispatch status:
//! ⏳ working → ❌ failed. A successful relay leaves the ⏳ in place; the
//! replies themselves are the success signal.

use std::sync::Arc;

use serenity::http::Http;
use serenity::model::channel::ReactionType;
use serenity::model::id::{ChannelId, MessageId};

const WORKING: &str = "\u{23f3}"; // ⏳
const FAILED: &str = "\u{274c}"; // ❌

/// Handle that manages reaction status on a single message.
pub struct AckHandle {
    http: Arc<Http>,
    channel_id: ChannelId,
    message_id: MessageId,
    current: Option<ReactionType>,
}

impl AckHandle {
    pub fn new(http: Arc<Http>, channel_id: ChannelId, message_id: MessageId) -> Self {
        Self {
            http,
            channel_id,
            message_id,
            current: None,
        }
    }

    /// Transition to a new reaction, removing the old one.
    async fn transition(&mut self, emoji: &str) {
        // Swallow errors — we may lack reaction permission, or the message
        // may already be gone.
        if let Some(ref old) = self.current {
            let _ = self
                .http
                .delete_reaction_me(self.channel_id, self.message_id, old)
                .await;
        }

        let reaction = ReactionType::Unicode(emoji.to_string());
        let _ = self
            .http
            .create_reaction(self.channel_id, self.message_id, &reaction)
            .await;
        self.current = Some(reaction);
    }

    /// Show ⏳ — the request was accepted and is in flight.
    pub async fn working(&mut self) {
        self.transition(WORKING).await;
    }

    /// Show ❌ — the dispatch failed.
    pub async fn failed(&mut self) {
        self.transition(FAILED).await;
    }
}
