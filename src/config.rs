use std::str::FromStr;

use anyhow::{bail, Context};
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;

/// One year.
pub const MAX_SESSION_TTL_MINUTES: i64 = 60 * 24 * 365;

#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
    pub ttl_minutes: i64,
    pub secure_cookie: bool,
}

/// Where the pool connects. A full URL wins over the discrete settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseConfig {
    Url(String),
    Parts {
        host: String,
        port: u16,
        user: String,
        password: String,
        database: String,
    },
}

impl DatabaseConfig {
    pub fn connect_options(&self) -> anyhow::Result<PgConnectOptions> {
        match self {
            DatabaseConfig::Url(url) => {
                PgConnectOptions::from_str(url).context("parse DATABASE_URL")
            }
            DatabaseConfig::Parts {
                host,
                port,
                user,
                password,
                database,
            } => Ok(PgConnectOptions::new()
                .host(host)
                .port(*port)
                .username(user)
                .password(password)
                .database(database)),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DemoAccountConfig {
    pub email: String,
    pub password: String,
    pub password_hash: Option<String>,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database: DatabaseConfig,
    pub max_connections: u32,
    pub session: SessionConfig,
    pub demo: DemoAccountConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // blank values count as unset
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let database = resolve_database(&get)?;
        let session = SessionConfig {
            secret: get("SESSION_SECRET").context("SESSION_SECRET must be set")?,
            issuer: get("SESSION_ISSUER").unwrap_or_else(|| "admin-starter".into()),
            audience: get("SESSION_AUDIENCE")
                .unwrap_or_else(|| "admin-starter-dashboard".into()),
            ttl_minutes: get("SESSION_TTL_MINUTES")
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60 * 24)
                .clamp(1, MAX_SESSION_TTL_MINUTES),
            secure_cookie: get("APP_ENV").is_some_and(|v| v == "production"),
        };
        let demo = DemoAccountConfig {
            email: get("DEMO_EMAIL").unwrap_or_else(|| "admin@starter.com".into()),
            password: get("DEMO_PASSWORD").unwrap_or_else(|| "Admin@123".into()),
            password_hash: get("DEMO_PASSWORD_HASH"),
        };

        Ok(Self {
            host: get("APP_HOST").unwrap_or_else(|| "0.0.0.0".into()),
            port: get("APP_PORT")
                .map(|v| v.parse::<u16>())
                .transpose()
                .context("APP_PORT must be a port number")?
                .unwrap_or(8080),
            database,
            max_connections: get("DB_MAX_CONNECTIONS")
                .and_then(|v| v.parse::<u32>().ok())
                .unwrap_or(10),
            session,
            demo,
        })
    }

    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn resolve_database<F>(get: &F) -> anyhow::Result<DatabaseConfig>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = get("DATABASE_URL") {
        return Ok(DatabaseConfig::Url(url));
    }

    let host = get("DB_HOST");
    let user = get("DB_USER");
    let password = get("DB_PASSWORD");
    let database = get("DB_NAME");
    let (Some(host), Some(user), Some(password), Some(database)) = (host, user, password, database)
    else {
        bail!("Missing PostgreSQL configuration: set DATABASE_URL or DB_HOST, DB_USER, DB_PASSWORD and DB_NAME");
    };
    let port = get("DB_PORT")
        .map(|v| v.parse::<u16>())
        .transpose()
        .context("DB_PORT must be a port number")?
        .unwrap_or(5432);

    Ok(DatabaseConfig::Parts {
        host,
        port,
        user,
        password,
        database,
    })
}
