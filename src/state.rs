use std::sync::Arc;

use crate::config::BotConfig;
use crate::papers::resolve::PaperResolver;

pub struct AppState {
    pub config: Arc<BotConfig>,
    pub resolver: Arc<PaperResolver>,
}

pub type Context<'a> = poise::Context<'a, AppState, anyhow::Error>;
