use std::sync::{Arc, OnceLock};

use serenity::async_trait;
use serenity::model::channel::Message;
use serenity::model::gateway::Ready;
use serenity::model::id::UserId;
use serenity::model::permissions::Permissions;
use serenity::prelude::{Context, EventHandler};
use tracing::{info, warn};

use dateline_core::error::Result;
use dateline_relay::classify::{decide, DispatchDecision, RequestKind};
use dateline_relay::client::FormatClient;
use dateline_relay::request::FormatRequest;

use crate::ack::AckHandle;
use crate::send;

const ASK_FOR_INPUT: &str = "Please provide some tour dates, an image, or an image URL.";

/// Serenity event handler wired to the relay pipeline.
pub struct DiscordHandler {
    pub client: Arc<FormatClient>,
    pub bot_id: OnceLock<UserId>,
}

#[async_trait]
impl EventHandler for DiscordHandler {
    async fn ready(&self, _ctx: Context, ready: Ready) {
        self.bot_id.set(ready.user.id).ok();
        info!(name = %ready.user.name, "Discord bot connected");
        info!(url = %invite_url(ready.user.id), "invite link");
    }

    async fn message(&self, ctx: Context, msg: Message) {
        let Some(bot_id) = self.bot_id.get().copied() else {
            return;
        };

        let mentioned = msg.mentions_user_id(bot_id);
        let self_authored = msg.author.id == bot_id;
        let content = strip_mentions(&msg.content, bot_id);
        let has_attachment = !msg.attachments.is_empty();
        let first_content_type = msg
            .attachments
            .first()
            .and_then(|a| a.content_type.as_deref());

        let kind = match decide(
            mentioned,
            self_authored,
            &content,
            has_attachment,
            first_content_type,
        ) {
            DispatchDecision::Ignore => return,
            DispatchDecision::AskForInput => {
                send::send_reply(&ctx.http, &msg, ASK_FOR_INPUT).await;
                return;
            }
            DispatchDecision::Process(kind) => kind,
        };

        let mut ack = AckHandle::new(Arc::clone(&ctx.http), msg.channel_id, msg.id);
        ack.working().await;

        // Each dispatch owns its data outright — nothing is shared between
        // concurrently handled messages.
        let client = Arc::clone(&self.client);
        let http = Arc::clone(&ctx.http);
        tokio::spawn(async move {
            match run_pipeline(&client, kind, content, &msg).await {
                Ok(formatted) => {
                    info!(chars = formatted.len(), "relaying formatted dates");
                    send::send_formatted(&http, &msg, &formatted).await;
                }
                Err(e) => {
                    warn!(error = %e, "dispatch failed");
                    ack.failed().await;
                    send::send_reply(&http, &msg, &e.user_message()).await;
                }
            }
        });
    }
}

/// Build the request for the classified path and submit it.
async fn run_pipeline(
    client: &FormatClient,
    kind: RequestKind,
    content: String,
    msg: &Message,
) -> Result<String> {
    let request = match kind {
        RequestKind::Text => FormatRequest::Text { text: content },
        RequestKind::ImageUrl => client.download_image(&content).await?,
        RequestKind::ImageAttachment => crate::attach::fetch(&msg.attachments[0]).await?,
    };
    client.format(request).await
}

/// Remove the bot's mention tokens (both `<@id>` and `<@!id>` forms).
fn strip_mentions(content: &str, bot_id: UserId) -> String {
    content
        .replace(&format!("<@{bot_id}>"), "")
        .replace(&format!("<@!{bot_id}>"), "")
        .trim()
        .to_string()
}

/// OAuth2 invite URL with the permissions the bot needs.
fn invite_url(bot_id: UserId) -> String {
    let permissions = Permissions::VIEW_CHANNEL
        | Permissions::SEND_MESSAGES
        | Permissions::ATTACH_FILES
        | Permissions::READ_MESSAGE_HISTORY;
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={}&permissions={}&scope=bot",
        bot_id,
        permissions.bits()
    )
}
