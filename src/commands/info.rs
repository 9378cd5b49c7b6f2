use crate::papers::types::MIN_YEAR;
use crate::state::Context;

/// How to use the bot and where the papers come from
#[poise::command(slash_command)]
pub async fn info(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let config = &ctx.data().config;
    let delivery = if config.send_direct {
        "Matched PDFs are attached directly to the reply."
    } else {
        "Matched PDFs are linked only; set SEND_DIRECT=true to attach them directly."
    };

    ctx.say(format!(
        "✅ Past-paper bot ready.\n\
         Usage:\n\
         `/pyq fetch <year>` — Paper 1 & 2 (if available), e.g. `/pyq fetch 2014`\n\
         `/pyq fetch <year> <paper>` — a specific paper, e.g. `/pyq fetch 2019 Paper 1`\n\
         `/pyq menu` — guided year/paper picker\n\
         Available years: the official archive goes back to {MIN_YEAR}.\n\n\
         Redirect target: {}\n{delivery}",
        config.redirect_base
    ))
    .await?;
    Ok(())
}
