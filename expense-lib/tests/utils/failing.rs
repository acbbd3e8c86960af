#![allow(dead_code)]

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use expense_repo::category_repo::{Category, CategoryRepo, CategoryRepoError};
use expense_repo::transaction_repo::{
    NewTransaction, Transaction, TransactionId, TransactionRepo, TransactionRepoError,
};
use expense_repo::user_repo::{NewUser, User, UserChanges, UserId, UserRepo, UserRepoError};
use expense_repo::{HealthCheck, Repos};
use std::sync::Arc;

pub const DRIVER_MESSAGE: &str = "connection refused";

/// Every call fails the way an unreachable database would
pub struct FailingRepo;

fn failure(context: &'static str) -> anyhow::Error {
    anyhow!(DRIVER_MESSAGE).context(context)
}

pub fn failing_repos() -> Repos {
    let repo = Arc::new(FailingRepo);
    Repos {
        users: repo.clone(),
        categories: repo.clone(),
        transactions: repo.clone(),
        health: repo,
    }
}

#[async_trait]
impl UserRepo for FailingRepo {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        Err(failure("Unable to get users").into())
    }

    async fn get_user(&self, _user_id: UserId) -> Result<User, UserRepoError> {
        Err(failure("Unable to get user").into())
    }

    async fn create_user(&self, _new_user: NewUser) -> Result<User, UserRepoError> {
        Err(failure("Unable to insert user").into())
    }

    async fn update_user(
        &self,
        _user_id: UserId,
        _changes: UserChanges,
    ) -> Result<User, UserRepoError> {
        Err(failure("Unable to update user").into())
    }

    async fn delete_user(&self, _user_id: UserId) -> Result<User, UserRepoError> {
        Err(failure("Unable to delete user").into())
    }
}

#[async_trait]
impl CategoryRepo for FailingRepo {
    async fn get_all_categories(&self) -> Result<Vec<Category>, CategoryRepoError> {
        Err(failure("Unable to get categories").into())
    }
}

#[async_trait]
impl TransactionRepo for FailingRepo {
    async fn get_transaction(
        &self,
        _transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(failure("Unable to get transaction").into())
    }

    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        Err(failure("Unable to get transactions").into())
    }

    async fn create_new_transaction(
        &self,
        _new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(failure("Unable to insert transaction").into())
    }

    async fn update_transaction(
        &self,
        _transaction_id: TransactionId,
        _updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(failure("Unable to update transaction").into())
    }

    async fn delete_transaction(
        &self,
        _transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        Err(failure("Unable to delete transaction").into())
    }
}

#[async_trait]
impl HealthCheck for FailingRepo {
    async fn check(&self) -> Result<DateTime<Utc>, anyhow::Error> {
        Err(failure("Unable to reach database"))
    }
}
