use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::domain::models::account::{Account, AccountData};
use crate::domain::repositories::account::AccountRepository;
use crate::domain::repositories::repository::{RepositoryError, RepositoryResult};
use crate::infrastructure::models::account::{SurrealAccount, SurrealAccountContent};

pub struct AccountRepositoryImpl {
    db: Arc<Surreal<Any>>,
}

impl AccountRepositoryImpl {
    pub fn new(db: Arc<Surreal<Any>>) -> Self {
        Self { db }
    }
}

const ACCOUNT: &str = "account";
const SEQUENCE: &str = "sequence";

// Bumps `sequence:account` and creates `account:<n>` in one statement, so the
// id allocation and the insert commit or fail together.
const CREATE_WITH_NEXT_ID: &str = "CREATE ONLY type::thing($table, \
    (UPSERT ONLY type::thing($sequence, $table) SET counter = (counter OR 0) + 1).counter) \
    CONTENT $content";

#[async_trait]
impl AccountRepository for AccountRepositoryImpl {
    async fn create(&self, data: AccountData) -> RepositoryResult<Account> {
        let account: Option<SurrealAccount> = self
            .db
            .query(CREATE_WITH_NEXT_ID)
            .bind(("table", ACCOUNT))
            .bind(("sequence", SEQUENCE))
            .bind(("content", SurrealAccountContent::from(data)))
            .await?
            .take(0)?;

        account.ok_or(RepositoryError::NoRecord("CREATE"))?.try_into()
    }

    async fn find(&self, id: i64) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self.db.select((ACCOUNT, id)).await?;

        account.map(Account::try_from).transpose()
    }

    async fn all(&self) -> RepositoryResult<Vec<Account>> {
        let accounts: Vec<SurrealAccount> = self
            .db
            .query("SELECT * FROM type::table($table) ORDER BY id ASC")
            .bind(("table", ACCOUNT))
            .await?
            .take(0)?;

        accounts.into_iter().map(Account::try_from).collect()
    }

    async fn update(&self, id: i64, data: AccountData) -> RepositoryResult<Option<Account>> {
        let account: Option<SurrealAccount> = self
            .db
            .update((ACCOUNT, id))
            .content(SurrealAccountContent::from(data))
            .await?;

        account.map(Account::try_from).transpose()
    }

    async fn delete(&self, id: i64) -> RepositoryResult<bool> {
        let account: Option<SurrealAccount> = self.db.delete((ACCOUNT, id)).await?;

        Ok(account.is_some())
    }
}
