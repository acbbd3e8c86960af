use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

pub mod category_repo;
pub mod transaction_repo;
pub mod user_repo;

// implementation modules
pub mod mem_repo;
pub mod sqlx_repo;

use category_repo::CategoryRepo;
use transaction_repo::TransactionRepo;
use user_repo::UserRepo;

#[async_trait]
pub trait HealthCheck: Send + Sync {
    /// Current time as reported by the backing store
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error>;
}

/// Repositories sharing one backing store
#[derive(Clone)]
pub struct Repos {
    pub users: Arc<dyn UserRepo>,
    pub categories: Arc<dyn CategoryRepo>,
    pub transactions: Arc<dyn TransactionRepo>,
    pub health: Arc<dyn HealthCheck>,
}
