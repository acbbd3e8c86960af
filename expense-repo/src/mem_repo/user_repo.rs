use crate::user_repo::UserRepoError::{NothingToUpdate, UserNotFound};
use crate::user_repo::{NewUser, User, UserChanges, UserId, UserRepo, UserRepoError};
use anyhow::anyhow;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

struct State {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

pub struct MemUserRepo {
    state: RwLock<State>,
}

impl MemUserRepo {
    pub fn new() -> MemUserRepo {
        let state = State {
            users: BTreeMap::new(),
            next_id: 1,
        };
        MemUserRepo {
            state: RwLock::new(state),
        }
    }

    fn read_lock(&self) -> Result<RwLockReadGuard<State>, anyhow::Error> {
        self.state
            .read()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }

    fn write_lock(&self) -> Result<RwLockWriteGuard<State>, anyhow::Error> {
        self.state
            .write()
            .map_err(|_| anyhow!("Unable to acquire lock"))
    }
}

impl Default for MemUserRepo {
    fn default() -> Self {
        MemUserRepo::new()
    }
}

#[async_trait]
impl UserRepo for MemUserRepo {
    async fn get_all_users(&self) -> Result<Vec<User>, UserRepoError> {
        let read_guard = self.read_lock()?;
        Ok(read_guard.users.values().cloned().collect())
    }

    async fn get_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let read_guard = self.read_lock()?;
        read_guard
            .users
            .get(&user_id)
            .cloned()
            .ok_or(UserNotFound(user_id))
    }

    async fn create_user(&self, new_user: NewUser) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;

        let id = write_guard.next_id;
        write_guard.next_id += 1;

        let user = User::new(id, new_user);
        write_guard.users.insert(id, user.clone());
        Ok(user)
    }

    async fn update_user(
        &self,
        user_id: UserId,
        changes: UserChanges,
    ) -> Result<User, UserRepoError> {
        if changes.is_empty() {
            return Err(NothingToUpdate(user_id));
        }

        let mut write_guard = self.write_lock()?;
        let Some(user) = write_guard.users.get_mut(&user_id) else {
            return Err(UserNotFound(user_id));
        };
        user.apply(changes);
        Ok(user.clone())
    }

    async fn delete_user(&self, user_id: UserId) -> Result<User, UserRepoError> {
        let mut write_guard = self.write_lock()?;
        write_guard
            .users
            .remove(&user_id)
            .ok_or(UserNotFound(user_id))
    }
}
