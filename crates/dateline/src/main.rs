use std::sync::Arc;

use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dateline=info,dateline_discord=info,dateline_relay=info".into()),
        )
        .init();

    // load config: explicit path > DATELINE_CONFIG env > ~/.dateline/dateline.toml
    let config_path = std::env::var("DATELINE_CONFIG").ok();
    let config = dateline_core::config::DatelineConfig::load(config_path.as_deref())?;

    if config.discord.bot_token.is_empty() {
        anyhow::bail!(
            "no Discord bot token configured — set discord.bot_token in dateline.toml \
             or DISCORD_TOKEN in the environment"
        );
    }

    info!(api = %config.api.base_url, "starting Dateline relay");

    let client = Arc::new(dateline_relay::client::FormatClient::new(
        config.api.base_url.clone(),
        config.api.api_key.clone(),
    ));

    let adapter = dateline_discord::DiscordAdapter::new(&config.discord, client);
    adapter.run().await;

    Ok(())
}
