use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub type UserId = i32;

#[async_trait]
pub trait UserRepo: Sync + Send {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError>;
    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError>;
    async fn update_user(
        &self,
        user_id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserRepoError>;
    async fn delete_user(&self, user_id: UserId) -> Result<User, UserRepoError>;
}

#[derive(Error, Debug)]
pub enum UserRepoError {
    #[error("User {0} not found")]
    UserNotFound(UserId),
    #[error("No fields to update for user {0}")]
    NothingToUpdate(UserId),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, sqlx::FromRow)]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub password: String,
}

impl User {
    pub fn new(id: UserId, new_user: NewUser) -> User {
        User {
            id,
            username: new_user.username,
            email: new_user.email,
            password: new_user.password,
        }
    }

    /// Applies `changes` in place, leaving unchanged columns as they are
    pub fn apply(&mut self, changes: UserChanges) {
        for (column, value) in changes.assignments() {
            match column {
                UserColumn::Username => self.username = value,
                UserColumn::Email => self.email = value,
                UserColumn::Password => self.password = value,
            }
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: &str, email: &str, password: &str) -> NewUser {
        NewUser {
            username: username.to_owned(),
            email: email.to_owned(),
            password: password.to_owned(),
        }
    }
}

/// The columns of `users` that may be changed after creation.
///
/// Column names in generated SQL come only from this enum, never from a request body.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum UserColumn {
    Username,
    Email,
    Password,
}

impl UserColumn {
    pub const ALL: [UserColumn; 3] = [
        UserColumn::Username,
        UserColumn::Email,
        UserColumn::Password,
    ];

    pub const fn as_str(self) -> &'static str {
        match self {
            UserColumn::Username => "username",
            UserColumn::Email => "email",
            UserColumn::Password => "password",
        }
    }
}

/// A partial update of a user. Absent (or null) fields are left untouched, unknown fields in a
/// request body are dropped during deserialization.
#[derive(Serialize, Deserialize, Clone, Default, Debug)]
pub struct UserChanges {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UserChanges {
    pub fn is_empty(&self) -> bool {
        self.username.is_none() && self.email.is_none() && self.password.is_none()
    }

    /// Column/value pairs to set, in `UserColumn::ALL` order
    pub fn assignments(self) -> Vec<(UserColumn, String)> {
        let UserChanges {
            username,
            email,
            password,
        } = self;
        let mut values = [username, email, password];
        UserColumn::ALL
            .into_iter()
            .zip(values.iter_mut())
            .filter_map(|(column, value)| value.take().map(|v| (column, v)))
            .collect()
    }
}
