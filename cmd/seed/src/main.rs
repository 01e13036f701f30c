//! # seed
//!
//! Operator utilities: fill the board with sample posts and produce the
//! argon2 hash that goes into `admin.password_hash`.

use anyhow::Context;
use clap::{Parser, Subcommand};
use configs::Settings;
use domains::{BoardRepository, NewBoard};
use secrecy::ExposeSecret;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "seed", version, about = "Message board operator utilities")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Insert numbered sample boards
    Boards {
        #[arg(long, default_value_t = 25)]
        count: u32,
        /// Overrides `database.url` from the settings
        #[arg(long)]
        database_url: Option<String>,
    },
    /// Print an argon2 PHC hash for `admin.password_hash`
    HashPassword { password: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Boards {
            count,
            database_url,
        } => seed_boards(count, database_url).await,
        Command::HashPassword { password } => {
            let hash = auth_adapters::hash_password(&password).context("failed to hash password")?;
            println!("{hash}");
            Ok(())
        }
    }
}

async fn seed_boards(count: u32, database_url: Option<String>) -> anyhow::Result<()> {
    let url = match database_url {
        Some(url) => url,
        None => Settings::load()?
            .database
            .url
            .expose_secret()
            .to_owned(),
    };

    let repo = storage_adapters::connect(&url, 1).await?;
    for n in 1..=count {
        let board = NewBoard::new(
            format!("Sample post {n}"),
            format!("This is sample post number {n} of {count}."),
        )?;
        let id = repo.insert(&board).await?;
        info!(board_id = %id, "seeded board");
    }

    println!("inserted {count} boards");
    Ok(())
}
