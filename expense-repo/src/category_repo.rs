use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use thiserror::Error;

#[async_trait]
pub trait CategoryRepo: Sync + Send {
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError>;
}

#[derive(Error, Debug)]
pub enum CategoryRepoError {
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// A row of `categories`. The table is managed outside this service, so `name` may be null and
/// any columns besides `id` and `name` are carried along as-is.
#[derive(Serialize, Deserialize, Clone, PartialEq, Debug)]
pub struct Category {
    pub id: i32,
    pub name: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Category {
    pub fn new(id: i32, name: &str) -> Category {
        Category {
            id,
            name: Some(name.to_owned()),
            extra: Map::new(),
        }
    }
}
