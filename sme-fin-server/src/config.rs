//! Process configuration read from the environment

use anyhow::{anyhow, Context, Result};
use sqlx::postgres::{PgConnectOptions, PgSslMode};
use std::str::FromStr;

const DEFAULT_JWT_SECRET: &str = "default-secret-key-change-in-production";
const DEFAULT_BUCKET: &str = "vercel_bucket";

/// Where the database lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
        ssl_mode: String,
    },
}

impl DatabaseTarget {
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        match self {
            DatabaseTarget::Url(url) => {
                PgConnectOptions::from_str(url).context("invalid database URL")
            }
            DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                database,
                ssl_mode,
            } => {
                let ssl_mode = PgSslMode::from_str(ssl_mode)
                    .with_context(|| format!("invalid sslmode '{ssl_mode}'"))?;
                Ok(PgConnectOptions::new()
                    .host(host)
                    .port(*port)
                    .username(user)
                    .password(password)
                    .database(database)
                    .ssl_mode(ssl_mode))
            }
        }
    }
}

/// Supabase-style object storage for uploaded documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub url: String,
    pub api_key: String,
    pub bucket: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub log_level: String,
    pub database: DatabaseTarget,
    pub db_max_connections: u32,
    pub run_migrations: bool,
    pub jwt_secret: String,
    pub jwt_expiry_hours: i64,
    /// Fixed passcode, or `None` when codes are random
    pub otp_code: Option<String>,
    pub storage: Option<StorageConfig>,
}

impl AppConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from any key lookup. Blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let get = |keys: &[&str]| -> Option<String> {
            keys.iter()
                .filter_map(|key| lookup(key))
                .map(|value| value.trim().to_string())
                .find(|value| !value.is_empty())
        };

        let port = match get(&["PORT"]) {
            Some(port) => port.parse().with_context(|| format!("invalid PORT '{port}'"))?,
            None => 8080,
        };
        let db_max_connections = match get(&["DB_MAX_CONNECTIONS"]) {
            Some(n) => n.parse().with_context(|| format!("invalid DB_MAX_CONNECTIONS '{n}'"))?,
            None => 5,
        };
        let jwt_expiry_hours = match get(&["JWT_EXPIRY_HOURS"]) {
            Some(h) => h.parse().with_context(|| format!("invalid JWT_EXPIRY_HOURS '{h}'"))?,
            None => 24,
        };

        let otp_code = match get(&["OTP_MODE"]).as_deref() {
            Some("random") => None,
            _ => Some(get(&["DEFAULT_OTP"]).unwrap_or_else(|| "123456".to_string())),
        };

        let storage = get(&["SUPABASE_URL"]).and_then(|url| {
            get(&["SUPABASE_SERVICE_ROLE_KEY", "SUPABASE_ANON_KEY"]).map(|api_key| StorageConfig {
                url: url.trim_end_matches('/').to_string(),
                api_key,
                bucket: get(&["SUPABASE_BUCKET_NAME"]).unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            })
        });

        Ok(Self {
            host: get(&["HOST"]).unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: get(&["LOG_LEVEL"]).unwrap_or_else(|| "info".to_string()),
            database: database_target(&get)?,
            db_max_connections,
            run_migrations: get(&["RUN_MIGRATIONS"]).is_some_and(|v| v == "true" || v == "1"),
            jwt_secret: get(&["JWT_SECRET"]).unwrap_or_else(|| DEFAULT_JWT_SECRET.to_string()),
            jwt_expiry_hours,
            otp_code,
            storage,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn uses_default_jwt_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}

fn database_target(get: &impl Fn(&[&str]) -> Option<String>) -> Result<DatabaseTarget> {
    if let Some(url) = get(&[
        "DATABASE_URL",
        "POSTGRES_URL",
        "POSTGRES_PRISMA_URL",
        "POSTGRES_URL_NON_POOLING",
    ]) {
        return Ok(DatabaseTarget::Url(with_ssl_mode(url)));
    }

    let host = get(&["DB_HOST", "POSTGRES_HOST", "PGHOST"]);
    let user = get(&["DB_USER", "POSTGRES_USER", "PGUSER"]);
    let password = get(&["DB_PASSWORD", "POSTGRES_PASSWORD", "PGPASSWORD"]);
    let database = get(&["DB_NAME", "POSTGRES_DATABASE", "POSTGRES_DB", "PGDATABASE"]);

    match (host, user, password, database) {
        (Some(host), Some(user), Some(password), Some(database)) => {
            let port = match get(&["DB_PORT", "POSTGRES_PORT", "PGPORT"]) {
                Some(port) => port.parse().with_context(|| format!("invalid database port '{port}'"))?,
                None => 5432,
            };
            Ok(DatabaseTarget::Parts {
                host,
                port,
                user,
                password,
                database,
                ssl_mode: get(&["DB_SSLMODE", "POSTGRES_SSLMODE", "PGSSLMODE"])
                    .unwrap_or_else(|| "require".to_string()),
            })
        }
        (host, user, password, database) => {
            let found: Vec<&str> = [
                ("host", host.is_some()),
                ("user", user.is_some()),
                ("password", password.is_some()),
                ("database", database.is_some()),
            ]
            .into_iter()
            .filter_map(|(name, present)| present.then_some(name))
            .collect();
            Err(anyhow!(
                "database configuration missing: set DATABASE_URL, or DB_HOST, DB_USER, DB_PASSWORD and DB_NAME (found: {})",
                if found.is_empty() { "none".to_string() } else { found.join(", ") }
            ))
        }
    }
}

/// Appends `sslmode=require` to a URL that does not choose one.
fn with_ssl_mode(url: String) -> String {
    if url.contains("sslmode=") {
        url
    } else if url.contains('?') {
        format!("{url}&sslmode=require")
    } else {
        format!("{url}?sslmode=require")
    }
}
