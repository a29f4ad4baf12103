// src/store/mod.rs

use crate::record::Investor;
use sqlx::postgres::{PgPool, PgPoolOptions, Postgres};
use sqlx::QueryBuilder;
use tracing::info;

/// Destination table. Its schema is managed elsewhere; this store only
/// appends and counts.
pub const TABLE: &str = "european_investors";

const INSERT_COLUMNS: &str = "firm_name, website, hq_location, investment_focus, \
     stages, investment_thesis, investor_type, min_check_size, max_check_size";

/// Append-only handle on the destination table.
pub struct InvestorStore {
    pool: PgPool,
}

impl InvestorStore {
    /// Connect with a single connection; the loader is a one-shot batch
    /// writer and never needs more.
    pub async fn connect(database_url: &str) -> Result<Self, sqlx::Error> {
        let pool = PgPoolOptions::new()
            .max_connections(1)
            .connect(database_url)
            .await?;
        Ok(Self { pool })
    }

    /// Append `records` as new rows in one bulk INSERT.
    ///
    /// Existing table content is never consulted: only intra-batch duplicates
    /// were removed upstream, so repeated runs against the same file append
    /// the batch again. Returns the number of rows inserted.
    pub async fn append(&self, records: &[Investor]) -> Result<u64, sqlx::Error> {
        if records.is_empty() {
            info!(table = TABLE, "nothing to insert");
            return Ok(0);
        }

        let mut builder: QueryBuilder<Postgres> =
            QueryBuilder::new(format!("INSERT INTO {TABLE} ({INSERT_COLUMNS}) "));
        builder.push_values(records, |mut row, investor| {
            row.push_bind(&investor.firm_name)
                .push_bind(&investor.website)
                .push_bind(&investor.hq_location)
                .push_bind(&investor.investment_focus)
                .push_bind(&investor.stages)
                .push_bind(&investor.investment_thesis)
                .push_bind(&investor.investor_type)
                .push_bind(investor.min_check_size)
                .push_bind(investor.max_check_size);
        });

        let result = builder.build().execute(&self.pool).await?;
        Ok(result.rows_affected())
    }

    /// Total rows currently in the destination table.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let sql = format!("SELECT COUNT(*) FROM {TABLE}");
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(count)
    }

    /// Release the connection. Called on success and failure paths alike.
    pub async fn close(self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn investor(firm: &str) -> Investor {
        Investor {
            firm_name: firm.to_string(),
            website: format!("{}.example", firm.to_lowercase().replace(' ', "-")),
            hq_location: "Berlin, Germany".to_string(),
            investment_focus: "DACH".to_string(),
            stages: "Seed".to_string(),
            investment_thesis: "B2B SaaS".to_string(),
            investor_type: "VC".to_string(),
            min_check_size: Some(50_000.0),
            max_check_size: None,
        }
    }

    /// Needs a reachable Postgres with the european_investors table already
    /// created; opt in with TEST_DATABASE_URL and --ignored.
    #[tokio::test]
    #[ignore]
    async fn append_then_count_round_trip() -> anyhow::Result<()> {
        let url = std::env::var("TEST_DATABASE_URL")?;
        let store = InvestorStore::connect(&url).await?;

        let before = store.count().await?;
        let inserted = store
            .append(&[investor("Acme Ventures"), investor("Beta Capital")])
            .await?;
        assert_eq!(inserted, 2);

        let after = store.count().await?;
        assert_eq!(after, before + 2);

        store.close().await;
        Ok(())
    }

    #[tokio::test]
    #[ignore]
    async fn empty_batch_inserts_nothing() -> anyhow::Result<()> {
        let url = std::env::var("TEST_DATABASE_URL")?;
        let store = InvestorStore::connect(&url).await?;

        let before = store.count().await?;
        assert_eq!(store.append(&[]).await?, 0);
        assert_eq!(store.count().await?, before);

        store.close().await;
        Ok(())
    }
}
