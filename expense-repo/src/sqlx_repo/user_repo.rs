use crate::sqlx_repo::SQLxRepo;
use crate::user_repo::UserRepoError::{NothingToUpdate, UserNotFound};
use crate::user_repo::{NewUser, User, UserChanges, UserId, UserRepo, UserRepoError};
use anyhow::Context;
use async_trait::async_trait;
use sqlx::{query_as, Postgres, QueryBuilder};
use tracing::instrument;

/// `UPDATE users SET col = $1, ... WHERE id = $n RETURNING *` for the columns present in
/// `changes`, with the id bound last. `None` if there is nothing to set.
fn build_update_query(
    user_id: UserId,
    changes: UserChanges,
) -> Option<QueryBuilder<'static, Postgres>> {
    let assignments = changes.assignments();
    if assignments.is_empty() {
        return None;
    }

    let mut query_builder = QueryBuilder::new("UPDATE users SET ");
    let mut set_clause = query_builder.separated(", ");
    for (column, value) in assignments {
        set_clause
            .push(column.as_str())
            .push_unseparated(" = ")
            .push_bind_unseparated(value);
    }
    query_builder
        .push(" WHERE id = ")
        .push_bind(user_id)
        .push(" RETURNING *");
    Some(query_builder)
}

#[async_trait]
impl UserRepo for SQLxRepo {
    #[instrument(skip(self))]
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        let users = query_as::<_, User>("SELECT * FROM users ORDER BY id")
            .fetch_all(&self.pool)
            .await
            .context("Unable to get users")?;
        Ok(users)
    }

    #[instrument(skip(self))]
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let user = query_as::<_, User>("SELECT * FROM users WHERE id = $1")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to get user {}", user_id))?;
        user.ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self, new_user))]
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let user = query_as::<_, User>(
            "INSERT INTO users (username, email, password) VALUES ($1, $2, $3) RETURNING *",
        )
        .bind(new_user.username)
        .bind(new_user.email)
        .bind(new_user.password)
        .fetch_one(&self.pool)
        .await
        .context("Unable to create user")?;
        Ok(user)
    }

    #[instrument(skip(self, changes))]
    async fn update_user(
        &self,
        user_id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserRepoError> {
        let mut query_builder =
            build_update_query(user_id, changes).ok_or(NothingToUpdate(user_id))?;
        let user = query_builder
            .build_query_as::<User>()
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to update user {}", user_id))?;
        user.ok_or(UserNotFound(user_id))
    }

    #[instrument(skip(self))]
    async fn delete_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let user = query_as::<_, User>("DELETE FROM users WHERE id = $1 RETURNING *")
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("Unable to delete user {}", user_id))?;
        user.ok_or(UserNotFound(user_id))
    }
}
