// src/bin/verify.rs
//
// Standalone check that the destination table is reachable and reports how
// many rows it currently holds. Run after a seed to confirm the count.

use anyhow::{Context, Result};
use investorseed::config::Config;
use investorseed::store::{InvestorStore, TABLE};

#[tokio::main]
async fn main() -> Result<()> {
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("set DATABASE_URL in .env.local or the environment");
            std::process::exit(1);
        }
    };

    println!("verifying database connection...");
    let store = InvestorStore::connect(&config.database_url)
        .await
        .context("connecting to database")?;

    let outcome = store.count().await;
    store.close().await;

    let count = outcome.with_context(|| format!("counting rows in '{}'", TABLE))?;
    println!("connection successful");
    println!("found {} records in '{}'", count, TABLE);
    Ok(())
}
