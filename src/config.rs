use std::time::Duration;

use anyhow::{Context, Result};
use poise::serenity_prelude as serenity;

/// Process-wide configuration, read once at startup and immutable afterwards.
/// Core logic receives it by parameter; nothing reads the environment later.
pub struct BotConfig {
    pub token: String,
    /// URL prefix of the official past-papers archive.
    pub archive_base: String,
    /// Landing page that wraps matched PDF links, e.g. for link tracking.
    pub redirect_base: String,
    /// Human-browsable archive index, shown in not-found guidance.
    pub archive_page: String,
    /// When true, matched PDFs are downloaded and attached to the reply
    /// instead of only being referenced by redirect link.
    pub send_direct: bool,
    /// Per-candidate fetch timeout.
    pub fetch_timeout: Duration,
    pub keepalive_port: u16,
    /// Optional guild for instant slash-command registration.
    pub guild_id: Option<serenity::GuildId>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self> {
        let token = dotenv::var("DISCORD_TOKEN")
            .context("DISCORD_TOKEN not set in environment")?;

        let archive_base = dotenv::var("ARCHIVE_BASE")
            .unwrap_or_else(|_| "https://jeeadv.ac.in/past_qps".to_string());
        let redirect_base = dotenv::var("REDIRECT_BASE").unwrap_or_else(|_| {
            "https://onlinemoneymakers123.blogspot.com".to_string()
        });
        let archive_page = dotenv::var("ARCHIVE_PAGE")
            .unwrap_or_else(|_| "https://jeeadv.ac.in/archive.html".to_string());

        let send_direct = dotenv::var("SEND_DIRECT")
            .map(|v| v.eq_ignore_ascii_case("true"))
            .unwrap_or(false);

        let fetch_timeout = dotenv::var("FETCH_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(15));

        let keepalive_port = dotenv::var("KEEPALIVE_PORT")
            .ok()
            .and_then(|s| s.parse::<u16>().ok())
            .unwrap_or(8080);

        let guild_id = dotenv::var("DISCORD_GUILD_ID")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
            .map(serenity::GuildId::new);

        Ok(Self {
            token,
            archive_base,
            redirect_base,
            archive_page,
            send_direct,
            fetch_timeout,
            keepalive_port,
            guild_id,
        })
    }
}
