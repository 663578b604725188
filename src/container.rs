use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::any::Any;

use crate::domain::repositories::account::AccountRepository;
use crate::domain::services::account::AccountService;

use crate::services::account::AccountServiceImpl;

use crate::infrastructure::repositories::account::AccountRepositoryImpl;

pub struct Container {
    pub account_service: Arc<dyn AccountService>,
}

impl Container {
    pub fn new(conn: Surreal<Any>) -> Self {
        let db = Arc::new(conn);

        Container {
            account_service: account_service(db),
        }
    }
}

fn account_service(db: Arc<Surreal<Any>>) -> Arc<dyn AccountService> {
    let account_repository: Arc<dyn AccountRepository> = Arc::new(AccountRepositoryImpl::new(db));

    Arc::new(AccountServiceImpl::new(account_repository))
}
