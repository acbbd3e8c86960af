mod category_repo;
mod transaction_repo;
mod user_repo;

use crate::{HealthCheck, Repos};
use anyhow::Context;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{query_scalar, Connection, PgPool};
use std::sync::Arc;
use tracing::{error, instrument};

pub struct SQLxRepo {
    pool: PgPool,
}

impl SQLxRepo {
    pub fn new(pool: PgPool) -> SQLxRepo {
        SQLxRepo { pool }
    }
}

/// Builds a pool that connects on first use, so the server can start while the database is
/// unreachable.
///
/// Idle connections are pinged by the `before_acquire` hook instead of sqlx's own
/// `test_before_acquire` check, which would close a broken connection before the hook runs.
/// A failed ping is logged and the connection discarded; the pool then opens a new one for the
/// waiting request.
pub fn create_pool(connect_options: PgConnectOptions, max_pool_size: u32) -> PgPool {
    pool_options(max_pool_size).connect_lazy_with(connect_options)
}

fn pool_options(max_pool_size: u32) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(max_pool_size)
        .test_before_acquire(false)
        .before_acquire(|conn, meta| {
            Box::pin(async move {
                if let Err(err) = conn.ping().await {
                    error!(%err, idle_for = ?meta.idle_for, "Unexpected error on idle connection");
                    return Ok(false);
                }
                Ok(true)
            })
        })
}

pub fn create_repos(connect_options: PgConnectOptions, max_pool_size: u32) -> Repos {
    let repo = Arc::new(SQLxRepo::new(create_pool(connect_options, max_pool_size)));
    Repos {
        users: repo.clone(),
        categories: repo.clone(),
        transactions: repo.clone(),
        health: repo,
    }
}

#[async_trait]
impl HealthCheck for SQLxRepo {
    #[instrument(skip(self))]
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error> {
        let now = query_scalar::<_, DateTime<Utc>>("SELECT NOW()")
            .fetch_one(&self.pool)
            .await
            .context("Unable to query database time")?;
        Ok(now)
    }
}
