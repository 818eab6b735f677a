//! Motivational quote lookup. Purely decorative: never touches planner state.

use anyhow::{Context, Result, bail};
use moodplan_core::MoodType;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

use crate::config::QuotesSection;

pub const FALLBACK_QUOTE: &str = "Stay positive and keep moving! — Offline mode";

#[derive(Debug, Deserialize)]
struct QuoteItem {
    q: String,
    a: String,
}

/// Parse a zenquotes-style body: `[{"q": "...", "a": "..."}]`.
fn parse_quote_body(body: &str) -> Result<String> {
    let items: Vec<QuoteItem> = serde_json::from_str(body).context("parse quote response")?;
    let Some(first) = items.into_iter().next() else {
        bail!("empty quote response");
    };
    Ok(format!("{} — {}", first.q.trim(), first.a.trim()))
}

async fn fetch_quote_inner(cfg: &QuotesSection) -> Result<String> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(cfg.timeout_secs))
        .build()
        .context("build http client")?;

    let resp = client
        .get(&cfg.url)
        .send()
        .await
        .context("quote request")?;

    let status = resp.status();
    if !status.is_success() {
        bail!("quote service error: {status}");
    }

    let body = resp.text().await.context("read quote response")?;
    parse_quote_body(&body)
}

/// Fetch a quote, or the offline fallback on any failure (or when disabled).
pub async fn fetch_quote(cfg: &QuotesSection) -> String {
    if !cfg.enabled {
        return FALLBACK_QUOTE.to_string();
    }
    match fetch_quote_inner(cfg).await {
        Ok(q) => q,
        Err(e) => {
            warn!(error = %e, "quote_fetch_failed");
            FALLBACK_QUOTE.to_string()
        }
    }
}

pub fn mood_header(mood: MoodType) -> &'static str {
    match mood {
        MoodType::Tired => "Gentle encouragement for when you're TIRED:",
        MoodType::Neutral => "A little boost for your NEUTRAL day:",
        MoodType::Energetic => "Fuel for your ENERGETIC mood:",
    }
}

pub async fn quote_for_mood(cfg: &QuotesSection, mood: Option<MoodType>) -> String {
    let quote = fetch_quote(cfg).await;
    match mood {
        Some(m) => format!("{}\n\n{}", mood_header(m), quote),
        None => quote,
    }
}
