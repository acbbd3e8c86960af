use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;

use crate::user_repo::UserId;

pub type TransactionId = i32;

#[async_trait]
pub trait TransactionRepo: Sync + Send {
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError>;

    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError>;

    async fn delete_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError>;
}

#[derive(Error, Debug)]
pub enum TransactionRepoError {
    #[error("Transaction with id {0} not found")]
    TransactionNotFound(TransactionId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, sqlx::FromRow)]
pub struct Transaction {
    pub id: TransactionId,
    pub user_id: UserId,
    pub amount: Decimal,
    pub description: Option<String>,
    pub category_id: i32,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn new(id: TransactionId, new_transaction: NewTransaction) -> Transaction {
        Transaction {
            id,
            user_id: new_transaction.user_id,
            amount: new_transaction.amount,
            description: new_transaction.description,
            category_id: new_transaction.category_id,
            date: new_transaction.date,
        }
    }
}

/// Newest first, ties broken by id
impl Ord for Transaction {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .date
            .cmp(&self.date)
            .then_with(|| other.id.cmp(&self.id))
    }
}

impl PartialOrd for Transaction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct NewTransaction {
    pub user_id: UserId,
    pub amount: Decimal,
    pub description: Option<String>,
    pub category_id: i32,
    pub date: NaiveDate,
}

impl NewTransaction {
    pub const fn new(
        user_id: UserId,
        amount: Decimal,
        description: Option<String>,
        category_id: i32,
        date: NaiveDate,
    ) -> NewTransaction {
        NewTransaction {
            user_id,
            amount,
            description,
            category_id,
            date,
        }
    }
}
