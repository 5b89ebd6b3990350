use std::str::FromStr;

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use oratory_core::panel::PanelPosition;
use oratory_core::stage::InspectorTab;
use oratory_imagegen::gateway::GeminiGateway;
use oratory_session::{OratorySession, SessionConfig};

/// Print the resolved preview as JSON.
///
/// Usage: `oratory-preview [<position> <prompt...>]`. With a position and a
/// prompt, art is generated for that panel first.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "oratory_session=info,oratory_imagegen=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // --- Configuration ---
    let config = SessionConfig::from_env().context("Failed to load configuration")?;
    tracing::info!(
        art_generation = config.gemini.is_some(),
        "Loaded session configuration"
    );

    let mut session = OratorySession::new();

    let mut args = std::env::args().skip(1);
    if let Some(position) = args.next() {
        let position = PanelPosition::from_str(&position)?;
        let prompt = args.collect::<Vec<_>>().join(" ");

        session.select_panel(Some(position));
        session.set_tab(InspectorTab::Art);
        session.set_prompt_draft(prompt);

        match &config.gemini {
            Some(gemini) => {
                let gateway = GeminiGateway::from_config(gemini)
                    .context("Failed to build image client")?;
                if !session.generate_art(&gateway).await {
                    tracing::warn!(position = %position, "No art was applied");
                }
            }
            None => tracing::warn!("GEMINI_API_KEY not set; skipping art generation"),
        }
    }

    let preview = serde_json::to_string_pretty(&session.preview())?;
    println!("{preview}");
    Ok(())
}
