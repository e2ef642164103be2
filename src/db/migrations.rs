//! Database migrations, initialization and the startup connect-retry loop.

use sqlx::sqlite::{SqliteConnection, SqlitePool, SqlitePoolOptions};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

/// How many times startup attempts to establish the connection.
pub const MAX_CONNECT_ATTEMPTS: u32 = 10;

/// Fixed delay between connection attempts. No backoff, no jitter.
pub const CONNECT_RETRY_DELAY: Duration = Duration::from_secs(5);

/// Initialize the SQLite database with schema and pragmas.
pub async fn init_db(db_path: &str) -> Result<SqlitePool, sqlx::Error> {
    if let Some(parent) = Path::new(db_path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).ok();
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .after_connect(|conn, _meta| Box::pin(async move { configure_pragmas_conn(conn).await }))
        .connect(&format!("sqlite:{}?mode=rwc", db_path))
        .await?;

    run_migrations(&pool).await?;

    info!("Database initialized successfully at {}", db_path);
    Ok(pool)
}

/// Attempt [`init_db`] up to `max_attempts` times with a fixed `delay`
/// between attempts.
///
/// Each failure is logged with the remaining-attempt count. On exhaustion
/// the last error is returned; the caller decides whether that is fatal.
pub async fn init_db_with_retry(
    db_path: &str,
    max_attempts: u32,
    delay: Duration,
) -> Result<SqlitePool, sqlx::Error> {
    let mut last_err = sqlx::Error::PoolClosed;

    for attempt in 1..=max_attempts {
        match init_db(db_path).await {
            Ok(pool) => return Ok(pool),
            Err(e) => {
                let remaining = max_attempts - attempt;
                warn!(
                    attempt,
                    remaining,
                    error = %e,
                    "Database connection failed"
                );
                last_err = e;
                if remaining > 0 {
                    tokio::time::sleep(delay).await;
                }
            }
        }
    }

    Err(last_err)
}

/// Run all database migrations.
async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Running database migrations...");
    let schema_sql = include_str!("schema.sql");

    for statement in schema_sql.split(';') {
        let trimmed = statement.trim();
        if !trimmed.is_empty() {
            sqlx::query(trimmed).execute(pool).await?;
        }
    }

    info!("Migrations completed successfully");
    Ok(())
}

/// Configure SQLite pragmas for reliability.
///
/// `foreign_keys = ON` is load-bearing: the posts table relies on the
/// declarative `ON DELETE CASCADE` constraint, which SQLite only enforces
/// when the pragma is set on the connection.
async fn configure_pragmas_conn(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    use sqlx::Row;

    sqlx::query("PRAGMA foreign_keys = ON")
        .execute(&mut *conn)
        .await?;

    // journal_mode returns the actual mode set; must use fetch to get result
    let row = sqlx::query("PRAGMA journal_mode = WAL")
        .fetch_one(&mut *conn)
        .await?;
    let journal_mode: String = row.get(0);
    info!("SQLite journal_mode set to: {}", journal_mode);

    sqlx::query("PRAGMA busy_timeout = 5000")
        .execute(&mut *conn)
        .await?;
    sqlx::query("PRAGMA synchronous = NORMAL")
        .execute(&mut *conn)
        .await?;

    Ok(())
}
