use crate::config::SurrealDbConfig;

use surrealdb::{
    Error, Surreal,
    engine::any::{self, Any},
    opt::auth::Root,
};

/// Opens a connection to `endpoint`. Root sign-in is skipped when no
/// credentials are configured, as for the embedded `mem://` engine.
pub async fn connect(db_config: &SurrealDbConfig) -> Result<Surreal<Any>, Error> {
    let db = any::connect(db_config.endpoint.as_str()).await?;

    if let (Some(username), Some(password)) = (&db_config.username, &db_config.password) {
        db.signin(Root {
            username: username.as_str(),
            password: password.as_str(),
        })
        .await?;
    }

    db.use_ns(db_config.namespace.as_str())
        .use_db(db_config.database.as_str())
        .await?;

    Ok(db)
}
