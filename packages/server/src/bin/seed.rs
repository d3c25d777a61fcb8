//! Seed the verses table with fixture data
//!
//! Upserts a fixed set of verses so the API has something to serve in
//! development. Safe to run repeatedly.

use anyhow::{Context, Result};
use clap::Parser;
use sqlx::PgPool;
use verses_core::config::Config;
use verses_core::domains::verses::Verse;

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Upsert fixture verses into the database")]
struct Cli {
    /// Print the fixtures without touching the database
    #[arg(long)]
    dry_run: bool,
}

fn fixtures() -> Vec<Verse> {
    [
        (1, "Title 1", "Some Content"),
        (2, "Title 2", "Content number 2"),
        (3, "Green Day", "Is awesome"),
    ]
    .into_iter()
    .map(|(id, title, content)| Verse {
        id,
        title: title.to_string(),
        content: content.to_string(),
    })
    .collect()
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let verses = fixtures();

    if cli.dry_run {
        for verse in &verses {
            println!("{}", serde_json::to_string(verse)?);
        }
        return Ok(());
    }

    // Load config
    let config = Config::from_env()?;

    // Connect to database
    let pool = PgPool::connect(&config.database_url)
        .await
        .context("Failed to connect to database")?;

    println!("✓ Connected to database");

    for verse in &verses {
        let saved = verse
            .upsert(&pool)
            .await
            .with_context(|| format!("Failed to upsert verse {}", verse.id))?;
        println!("{}", serde_json::to_string(&saved)?);
    }

    println!("✓ Seeded {} verses", verses.len());

    pool.close().await;
    Ok(())
}
