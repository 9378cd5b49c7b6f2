use poise::serenity_prelude as serenity;
use tracing::info;

use crate::papers::patterns::candidate_urls;
use crate::papers::types::{year_in_range, Paper, ResolutionOutcome, MIN_YEAR};
use crate::state::Context;

/// Not-found reports list at most this many attempted URLs.
const MAX_ATTEMPTS_SHOWN: usize = 6;

/// Fetch a past paper by year, optionally a specific paper
#[poise::command(slash_command)]
pub async fn fetch(
    ctx: Context<'_>,
    #[description = "Exam year (the archive goes back to 2007)"] year: u16,
    #[description = "Specific paper; omit to look for both"] paper: Option<Paper>,
) -> Result<(), anyhow::Error> {
    if !year_in_range(year) {
        ctx.say(format!(
            "Please supply a valid year (>= {MIN_YEAR}). Example: `/pyq fetch 2015`"
        ))
        .await?;
        return Ok(());
    }

    run_fetch(ctx, year, paper).await
}

/// Resolution path shared by `/pyq fetch` and the guided menu. Input is
/// already validated.
pub(super) async fn run_fetch(
    ctx: Context<'_>,
    year: u16,
    paper: Option<Paper>,
) -> Result<(), anyhow::Error> {
    let config = &ctx.data().config;

    info!(
        user = ctx.author().name,
        year,
        paper = ?paper,
        "paper lookup started"
    );
    ctx.say(format!(
        "🔎 Looking for official exam papers for {year}..."
    ))
    .await?;

    let candidates = candidate_urls(&config.archive_base, &year.to_string(), paper);

    match ctx.data().resolver.resolve(&candidates).await {
        ResolutionOutcome::Found(found) => {
            let redirect = redirect_link(&config.redirect_base, &found.url);
            info!(url = %found.url, "paper found");

            let mut reply = poise::CreateReply::default().content(format!(
                "✅ Found: **{}**\nRedirect link: {}",
                found.filename, redirect
            ));
            if let Some(payload) = found.payload {
                reply = reply.attachment(serenity::CreateAttachment::bytes(
                    payload,
                    found.filename.clone(),
                ));
            }
            ctx.send(reply).await?;
        }
        ResolutionOutcome::Exhausted { attempted } => {
            info!(attempted = attempted.len(), "no paper found");
            ctx.say(not_found_message(
                &attempted,
                &config.redirect_base,
                &config.archive_page,
            ))
            .await?;
        }
    }

    Ok(())
}

/// Wrap a matched PDF URL in the configured redirect landing page.
pub(super) fn redirect_link(redirect_base: &str, target: &str) -> String {
    format!(
        "{}/?target={}",
        redirect_base.trim_end_matches('/'),
        urlencoding::encode(target)
    )
}

fn not_found_message(
    attempted: &[String],
    redirect_base: &str,
    archive_page: &str,
) -> String {
    let tried = attempted
        .iter()
        .take(MAX_ATTEMPTS_SHOWN)
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join("\n");
    let redirect_base = redirect_base.trim_end_matches('/');

    format!(
        "⚠️ Couldn't find an official PDF using the common filenames.\n\n\
         I tried these URLs (some may exist):\n{tried}\n\n\
         What you can do:\n\
         • Check a link manually via the redirect template: \
         {redirect_base}/?target=<url-encoded-pdf-url>\n\
         • Browse the official archive: {archive_page}\n\
         • If you spot a working PDF link there, it probably uses a filename \
         pattern newer than the ones I know."
    )
}
