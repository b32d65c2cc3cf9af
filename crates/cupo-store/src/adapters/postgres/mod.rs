//! PostgreSQL Repository Implementations

use sqlx::PgPool;

mod client_directory;
mod credit_history;
mod grant_ledger;

pub use client_directory::PgClientDirectory;
pub use credit_history::PgCreditHistory;
pub use grant_ledger::PgGrantLedger;

/// Apply pending schema migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!().run(pool).await
}
