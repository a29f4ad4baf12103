use anyhow::{Context, Result};
use investorseed::{
    config::Config,
    ingest,
    record::Investor,
    store::{InvestorStore, TABLE},
    transform,
};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();
    info!("startup");

    // ─── 2) resolve configuration ────────────────────────────────────
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!("set DATABASE_URL in .env.local or the environment");
            eprintln!("format: postgresql://postgres:[PASSWORD]@[HOST]:5432/postgres");
            std::process::exit(1);
        }
    };

    // ─── 3) read the source file ─────────────────────────────────────
    let table = ingest::read_table(&config.csv_path)?;
    info!(
        path = %config.csv_path.display(),
        rows = table.rows.len(),
        "source file loaded"
    );

    // ─── 4) rename, clean, dedupe ────────────────────────────────────
    let records = transform::run(&table);
    info!(records = records.len(), table = TABLE, "ready to insert");

    // ─── 5) append + report ──────────────────────────────────────────
    let store = InvestorStore::connect(&config.database_url)
        .await
        .context("connecting to database")?;
    let outcome = seed(&store, &records).await;
    store.close().await;

    let total = outcome?;
    info!(total, table = TABLE, "seed complete");
    Ok(())
}

async fn seed(store: &InvestorStore, records: &[Investor]) -> Result<i64> {
    let inserted = store.append(records).await.context("bulk insert failed")?;
    info!(inserted, "bulk insert complete");
    store.count().await.context("counting destination rows")
}
