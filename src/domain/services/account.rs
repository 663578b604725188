use async_trait::async_trait;

use crate::domain::error::AppResult;
use crate::domain::models::account::{Account, AccountData};

#[async_trait]
pub trait AccountService: 'static + Sync + Send {
    async fn create(&self, data: AccountData) -> AppResult<Account>;
    async fn find(&self, id: i64) -> AppResult<Option<Account>>;
    async fn all(&self) -> AppResult<Vec<Account>>;
    async fn update(&self, id: i64, data: AccountData) -> AppResult<Option<Account>>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}
