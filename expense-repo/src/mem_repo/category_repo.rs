use crate::category_repo::{Category, CategoryRepo, CategoryRepoError};
use async_trait::async_trait;

/// Categories are managed outside the service, so this repo only serves what it was seeded with
pub struct MemCategoryRepo {
    categories: Vec<Category>,
}

impl MemCategoryRepo {
    pub fn new(mut categories: Vec<Category>) -> MemCategoryRepo {
        categories.sort_by_key(|c| c.id);
        MemCategoryRepo { categories }
    }
}

#[async_trait]
impl CategoryRepo for MemCategoryRepo {
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        Ok(self.categories.clone())
    }
}
