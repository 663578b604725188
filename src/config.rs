use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: ServiceConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub surrealdb: SurrealDbConfig,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServiceConfig {
    pub name: String,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct LoggingConfig {
    pub level: String,
    /// Export spans to an OTLP collector in addition to stdout.
    pub otlp: bool,
}

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct SurrealDbConfig {
    /// `ws://host:port` for a remote server, `mem://` for the embedded engine.
    pub endpoint: String,
    pub username: Option<String>,
    pub password: Option<String>,
    pub namespace: String,
    pub database: String,
    pub migration: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            service: ServiceConfig {
                name: "account-service".to_string(),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                otlp: false,
            },
            surrealdb: SurrealDbConfig {
                endpoint: "ws://localhost:8000".to_string(),
                username: Some("root".to_string()),
                password: Some("root".to_string()),
                namespace: "accounts".to_string(),
                database: "accounts".to_string(),
                migration: true,
            },
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, figment::Error> {
        Self::figment().extract()
    }

    fn figment() -> Figment {
        Figment::new()
            .merge(Serialized::defaults(AppConfig::default()))
            .merge(Toml::file("config/default.toml"))
            .merge(Toml::file(format!(
                "config/{}.toml",
                std::env::var("RUST_ENV").unwrap_or("development".to_string())
            )))
            .merge(Env::prefixed("APP_").split("__"))
    }
}
