use crate::category_repo::Category;
use crate::{HealthCheck, Repos};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;

mod category_repo;
mod transaction_repo;
mod user_repo;

pub use category_repo::MemCategoryRepo;
pub use transaction_repo::MemTransactionRepo;
pub use user_repo::MemUserRepo;

pub struct MemHealthCheck;

#[async_trait]
impl HealthCheck for MemHealthCheck {
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error> {
        Ok(Utc::now())
    }
}

pub fn create_repos() -> Repos {
    create_repos_with_categories(Vec::new())
}

pub fn create_repos_with_categories(categories: Vec<Category>) -> Repos {
    Repos {
        users: Arc::new(MemUserRepo::new()),
        categories: Arc::new(MemCategoryRepo::new(categories)),
        transactions: Arc::new(MemTransactionRepo::new()),
        health: Arc::new(MemHealthCheck),
    }
}
