use async_trait::async_trait;

use crate::domain::models::account::{Account, AccountData};

use super::repository::RepositoryResult;

#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Inserts a new account and assigns its id in the same operation.
    async fn create(&self, data: AccountData) -> RepositoryResult<Account>;
    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>>;
    /// All accounts in id order.
    async fn all(&self) -> RepositoryResult<Vec<Account>>;
    /// Replaces every field but the id. `None` when no account has `id`.
    async fn update(&self, id: i64, data: AccountData) -> RepositoryResult<Option<Account>>;
    /// Returns whether a record was removed.
    async fn delete(&self, id: i64) -> RepositoryResult<bool>;
}
