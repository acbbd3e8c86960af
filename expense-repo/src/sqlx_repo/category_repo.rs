use crate::category_repo::{Category, CategoryRepo, CategoryRepoError};
use crate::sqlx_repo::SQLxRepo;
use anyhow::Context;
use async_trait::async_trait;
use serde_json::Value;
use sqlx::query_scalar;
use tracing::instrument;

#[async_trait]
impl CategoryRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        // whole rows as JSON so columns this service doesn't know about are kept
        let rows = query_scalar::<_, Value>("SELECT to_jsonb(c) FROM categories c ORDER BY c.id")
            .fetch_all(&self.pool)
            .await
            .context("Unable to get categories")?;

        let categories = rows
            .into_iter()
            .map(serde_json::from_value)
            .collect::<Result<Vec<Category>, _>>()
            .context("Unable to read category row")?;
        Ok(categories)
    }
}
