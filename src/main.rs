mod commands;
mod config;
mod papers;
mod server;
mod state;

use std::sync::Arc;

use poise::serenity_prelude as serenity;
use poise::{Framework, FrameworkOptions};
use tracing::{error, info, Level};

use config::BotConfig;
use papers::resolve::PaperResolver;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .init();

    // Load env; a missing token is the only fatal startup condition.
    let _ = dotenv::dotenv();
    let config = Arc::new(BotConfig::from_env()?);
    info!(
        archive_base = %config.archive_base,
        send_direct = config.send_direct,
        timeout_secs = config.fetch_timeout.as_secs(),
        "Configuration loaded"
    );

    let resolver = Arc::new(PaperResolver::new(
        config.fetch_timeout,
        config.send_direct,
    )?);

    let keepalive_port = config.keepalive_port;
    tokio::spawn(async move {
        if let Err(e) = server::run_keepalive(keepalive_port).await {
            error!("Keep-alive server error: {:#}", e);
        }
    });

    let guild_id = config.guild_id;
    let token = config.token.clone();
    let app_state = AppState { config, resolver };

    let intents =
        serenity::GatewayIntents::GUILDS | serenity::GatewayIntents::GUILD_MESSAGES;

    let framework = Framework::builder()
        .options(FrameworkOptions {
            commands: vec![commands::pyq()],
            ..Default::default()
        })
        .setup(move |ctx, ready, framework| {
            Box::pin(async move {
                info!("Bot connected as: {} ({})", ready.user.name, ready.user.id);

                let commands = &framework.options().commands;
                info!("Registering {} top-level command(s):", commands.len());
                for cmd in commands {
                    info!("  /{} ({} subcommands)", cmd.name, cmd.subcommands.len());
                    for sub in &cmd.subcommands {
                        info!("    /{} {}", cmd.name, sub.name);
                    }
                }

                if let Some(gid) = guild_id {
                    info!("Registering to guild {} (instant)", gid);
                    poise::builtins::register_in_guild(
                        ctx,
                        &framework.options().commands,
                        gid,
                    )
                    .await?;
                } else {
                    info!("Registering globally (up to 1 hour delay)");
                    poise::builtins::register_globally(
                        ctx,
                        &framework.options().commands,
                    )
                    .await?;
                }

                Ok(app_state)
            })
        })
        .build();

    info!("Starting past-paper bot...");

    let mut client = serenity::ClientBuilder::new(&token, intents)
        .framework(framework)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create client: {}", e))?;

    if let Err(e) = client.start().await {
        error!("Client error: {}", e);
    }

    Ok(())
}
