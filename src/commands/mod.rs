mod fetch;
mod info;
mod menu;

use crate::state::Context;

/// Past exam papers from the official archive
#[poise::command(
    slash_command,
    subcommands("fetch::fetch", "menu::menu", "info::info")
)]
pub async fn pyq(_ctx: Context<'_>) -> Result<(), anyhow::Error> {
    Ok(())
}
