//! Signs up users, writes posts from scraped sentences, and simulates likes.
//!
//! Run with:
//! ```
//! BOT_CONFIG=crates/social-bot/config.ini cargo run -p social-bot --bin bot
//! ```
//!
//! Environment:
//! - `BOT_CONFIG`: INI file with a `[CONFIG]` section (default `config.ini`)
//! - `BOT_SEED`: seed for a reproducible run
//! - `SENTENCES_URL`: page to scrape sentences from

use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use social_bot::prelude::*;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::var("BOT_CONFIG").unwrap_or_else(|_| "config.ini".to_string());
    let config = SimulationConfig::from_ini_file(&config_path)
        .with_context(|| format!("Invalid configuration file {config_path}"))?;

    let mut sentences = WebSentenceSource::new()?;
    if let Ok(url) = std::env::var("SENTENCES_URL") {
        sentences = sentences.with_url(url);
    }

    let mut rng = match std::env::var("BOT_SEED") {
        Ok(seed) => {
            let seed: u64 = seed
                .trim()
                .parse()
                .with_context(|| format!("BOT_SEED must be an unsigned integer, got {seed:?}"))?;
            StdRng::seed_from_u64(seed) // Reproducible data
        }
        Err(_) => StdRng::from_entropy(),
    };

    tracing::info!(url = sentences.url(), "Fetching sentences");

    let simulator = ActivitySimulator::new(config, sentences);
    let config = simulator.config();
    tracing::info!(
        users = config.number_of_users(),
        max_posts = config.max_posts_per_user(),
        max_likes = config.max_likes_per_user(),
        "Starting simulation"
    );

    simulator.run(&mut rng).await;

    Ok(())
}
