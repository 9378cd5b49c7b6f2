use std::time::Duration;

use chrono::Datelike;
use poise::serenity_prelude as serenity;

use super::fetch::run_fetch;
use crate::papers::types::{Paper, MAX_YEAR, MIN_YEAR};
use crate::state::Context;

const MENU_TIMEOUT: Duration = Duration::from_secs(120);
/// Discord string selects carry at most 25 options.
const MAX_YEAR_OPTIONS: usize = 25;

/// Pick year and paper from a guided menu instead of typing arguments
#[poise::command(slash_command)]
pub async fn menu(ctx: Context<'_>) -> Result<(), anyhow::Error> {
    let ctx_id = ctx.id();
    let year_id = format!("{ctx_id}_year");

    let options: Vec<serenity::CreateSelectMenuOption> =
        menu_years(chrono::Utc::now().year())
            .into_iter()
            .map(|y| serenity::CreateSelectMenuOption::new(y.to_string(), y.to_string()))
            .collect();
    let year_row = serenity::CreateActionRow::SelectMenu(
        serenity::CreateSelectMenu::new(
            year_id.clone(),
            serenity::CreateSelectMenuKind::String { options },
        )
        .placeholder("Exam year"),
    );

    ctx.send(
        poise::CreateReply::default()
            .content("Pick an exam year:")
            .components(vec![year_row]),
    )
    .await?;

    let year_filter_id = year_id.clone();
    let Some(year_pick) = serenity::ComponentInteractionCollector::new(ctx)
        .author_id(ctx.author().id)
        .filter(move |press| press.data.custom_id == year_filter_id)
        .timeout(MENU_TIMEOUT)
        .await
    else {
        ctx.say("Menu timed out. Run `/pyq menu` again when ready.")
            .await?;
        return Ok(());
    };

    let year: u16 = match &year_pick.data.kind {
        serenity::ComponentInteractionDataKind::StringSelect { values } => values
            .first()
            .and_then(|v| v.parse().ok())
            .unwrap_or(MIN_YEAR),
        _ => MIN_YEAR,
    };

    // Swap the select for paper buttons on the same message.
    let p1_id = format!("{ctx_id}_p1");
    let p2_id = format!("{ctx_id}_p2");
    let both_id = format!("{ctx_id}_both");
    let buttons = serenity::CreateActionRow::Buttons(vec![
        serenity::CreateButton::new(p1_id.clone())
            .label("Paper 1")
            .style(serenity::ButtonStyle::Primary),
        serenity::CreateButton::new(p2_id.clone())
            .label("Paper 2")
            .style(serenity::ButtonStyle::Primary),
        serenity::CreateButton::new(both_id.clone())
            .label("Both")
            .style(serenity::ButtonStyle::Secondary),
    ]);
    year_pick
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(format!("Year **{year}** — which paper?"))
                    .components(vec![buttons]),
            ),
        )
        .await?;

    let button_ids = [p1_id.clone(), p2_id.clone(), both_id];
    let Some(press) = serenity::ComponentInteractionCollector::new(ctx)
        .author_id(ctx.author().id)
        .filter(move |press| button_ids.contains(&press.data.custom_id))
        .timeout(MENU_TIMEOUT)
        .await
    else {
        ctx.say("Menu timed out. Run `/pyq menu` again when ready.")
            .await?;
        return Ok(());
    };

    let paper = if press.data.custom_id == p1_id {
        Some(Paper::One)
    } else if press.data.custom_id == p2_id {
        Some(Paper::Two)
    } else {
        None
    };

    let picked = match paper {
        Some(Paper::One) => "Paper 1",
        Some(Paper::Two) => "Paper 2",
        None => "both papers",
    };
    press
        .create_response(
            ctx.serenity_context(),
            serenity::CreateInteractionResponse::UpdateMessage(
                serenity::CreateInteractionResponseMessage::new()
                    .content(format!("Year **{year}**, {picked}."))
                    .components(vec![]),
            ),
        )
        .await?;

    run_fetch(ctx, year, paper).await
}

/// Years offered by the menu: newest first, never before the archive start,
/// bounded by Discord's select-option limit.
fn menu_years(current_year: i32) -> Vec<u16> {
    let newest = current_year.clamp(MIN_YEAR as i32, MAX_YEAR as i32) as u16;
    (MIN_YEAR..=newest)
        .rev()
        .take(MAX_YEAR_OPTIONS)
        .collect()
}
