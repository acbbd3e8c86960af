use crate::sqlx_repo::SQLxRepo;
use crate::transaction_repo::TransactionRepoError::TransactionNotFound;
use crate::transaction_repo::{
    NewTransaction, Transaction, TransactionId, TransactionRepo, TransactionRepoError,
};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::query_as;
use tracing::instrument;

#[async_trait]
impl TransactionRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction = query_as::<_, Transaction>("SELECT * FROM transactions WHERE id = $1")
            .bind(transaction_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get transaction {}", transaction_id))?;
        transaction.ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn get_all_transactions(&self) -> Result<Vec<Transaction>, TransactionRepoError> {
        let transactions =
            query_as::<_, Transaction>("SELECT * FROM transactions ORDER BY date DESC, id DESC")
                .fetch_all(&self.pool)
                .await
                .context("Unable to get transactions")?;
        Ok(transactions)
    }

    #[instrument(skip(self, new_transaction))]
    async fn create_new_transaction(
        &self,
        new_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction = query_as::<_, Transaction>(
            "INSERT INTO transactions (user_id, amount, description, category_id, date) VALUES ($1, $2, $3, $4, $5) RETURNING *",
        )
        .bind(new_transaction.user_id)
        .bind(new_transaction.amount)
        .bind(new_transaction.description)
        .bind(new_transaction.category_id)
        .bind(new_transaction.date)
        .fetch_one(&self.pool)
        .await
        .context("Unable to insert transaction")?;
        Ok(transaction)
    }

    #[instrument(skip(self, updated_transaction))]
    async fn update_transaction(
        &self,
        transaction_id: TransactionId,
        updated_transaction: NewTransaction,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction = query_as::<_, Transaction>(
            "UPDATE transactions SET user_id = $1, amount = $2, description = $3, category_id = $4, date = $5 WHERE id = $6 RETURNING *",
        )
        .bind(updated_transaction.user_id)
        .bind(updated_transaction.amount)
        .bind(updated_transaction.description)
        .bind(updated_transaction.category_id)
        .bind(updated_transaction.date)
        .bind(transaction_id)
        .fetch_optional(&self.pool)
        .await
        .with_context(|| format!("Unable to update transaction {}", transaction_id))?;
        transaction.ok_or(TransactionNotFound(transaction_id))
    }

    #[instrument(skip(self))]
    async fn delete_transaction(
        &self,
        transaction_id: TransactionId,
    ) -> Result<Transaction, TransactionRepoError> {
        let transaction =
            query_as::<_, Transaction>("DELETE FROM transactions WHERE id = $1 RETURNING *")
                .bind(transaction_id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("Unable to delete transaction {}", transaction_id))?;
        transaction.ok_or(TransactionNotFound(transaction_id))
    }
}
