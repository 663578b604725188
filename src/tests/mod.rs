
use ::surrealdb::{Surreal, engine::any::Any};

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use surrealdb_migrations::MigrationRunner;

use crate::config::SurrealDbConfig;
use crate::container::Container;
use crate::{MIGRATIONS_DIR, infrastructure::databases::surrealdb};

use actix_http::Request;
use actix_web::{
    body::MessageBody,
    dev::{Service, ServiceResponse},
    http::StatusCode,
    test::{self, TestRequest},
};

use rstest::*;

pub struct TestContext {
    pub db: Surreal<Any>,
    pub container: Arc<Container>,
}

// Every test gets its own embedded in-memory database.
#[fixture]
async fn context() -> TestContext {
    let config = SurrealDbConfig {
        endpoint: "mem://".to_string(),
        username: None,
        password: None,
        namespace: "test".to_string(),
        database: "test".to_string(),
        migration: true,
    };

    let db = surrealdb::connect(&config).await.unwrap();

    MigrationRunner::new(&db)
        .load_files(&MIGRATIONS_DIR)
        .up()
        .await
        .unwrap();

    let container = Arc::new(Container::new(db.clone()));

    TestContext { db, container }
}

/// Posts `payload` and returns the created account together with its
/// `Location` header.
async fn create_account<S, B>(app: &S, payload: &Value) -> (Value, String)
where
    S: Service<Request, Response = ServiceResponse<B>, Error = actix_web::Error>,
    B: MessageBody,
{
    let res = TestRequest::post()
        .uri("/accounts")
        .set_json(payload)
        .send_request(app)
        .await;

    assert_eq!(res.status(), StatusCode::CREATED, "Could not create test Account");

    let location = res
        .headers()
        .get("location")
        .unwrap()
        .to_str()
        .unwrap()
        .to_owned();

    (test::read_body_json(res).await, location)
}

#[derive(Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
struct Error {
    code: u16,
    message: String,
}
