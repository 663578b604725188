use std::sync::Arc;

use crate::domain::{
    error::AppResult,
    models::account::{Account, AccountData},
    repositories::account::AccountRepository,
    services::account::AccountService,
};

use async_trait::async_trait;

pub struct AccountServiceImpl {
    repository: Arc<dyn AccountRepository>,
}

impl AccountServiceImpl {
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl AccountService for AccountServiceImpl {
    async fn create(&self, data: AccountData) -> AppResult<Account> {
        let account = self.repository.create(data).await?;

        tracing::debug!(account_id = account.id, "Account created");

        Ok(account)
    }

    async fn find(&self, id: i64) -> AppResult<Option<Account>> {
        Ok(self.repository.find(id).await?)
    }

    async fn all(&self) -> AppResult<Vec<Account>> {
        Ok(self.repository.all().await?)
    }

    async fn update(&self, id: i64, data: AccountData) -> AppResult<Option<Account>> {
        Ok(self.repository.update(id, data).await?)
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        if !self.repository.delete(id).await? {
            tracing::debug!(account_id = id, "Account to delete does not exist");
        }

        Ok(())
    }
}
