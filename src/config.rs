use std::env;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Which store implementation backs the services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    MongoDB,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(StoreBackend::MongoDB),
            "memory" => Ok(StoreBackend::Memory),
            _ => Err(()),
        }
    }
}

/// How the `password` field of a user record is written and checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordStorage {
    /// Salted bcrypt hash, verified after a username lookup
    Bcrypt { cost: u32 },
    /// Stored verbatim and matched inside the query predicate
    Plaintext,
}

/// Longest session lifetime accepted from SESSION_TTL_HOURS (one year).
pub const MAX_SESSION_TTL_HOURS: i64 = 24 * 365;

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub secret: String,
    pub ttl_hours: i64,
    pub issuer: String,
    pub audience: String,
    /// Marks the session cookie `Secure` (service behind TLS)
    pub cookie_secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            secret: "default-secret-change-me".to_string(),
            ttl_hours: 24,
            issuer: "wanttogo-service".to_string(),
            audience: "wanttogo-web".to_string(),
            cookie_secure: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub store_backend: StoreBackend,
    pub password_storage: PasswordStorage,
    pub session: SessionConfig,
    pub seed_catalog: bool,
    pub allowed_origin: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 3000,
            database_url: "mongodb://127.0.0.1:27017/myDB".to_string(),
            store_backend: StoreBackend::MongoDB,
            password_storage: PasswordStorage::Bcrypt { cost: bcrypt::DEFAULT_COST },
            session: SessionConfig::default(),
            seed_catalog: true,
            allowed_origin: None,
        }
    }
}

impl AppConfig {
    /// Reads configuration from the process environment (after `dotenv`).
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => parse(&v, "PORT")?,
            None => defaults.port,
        };

        let store_backend = match lookup("STORE_BACKEND") {
            Some(v) => v
                .parse::<StoreBackend>()
                .map_err(|_| ConfigError::Invalid { key: "STORE_BACKEND", value: v.clone() })?,
            None => defaults.store_backend,
        };

        let cost = match lookup("BCRYPT_COST") {
            Some(v) => {
                let cost: u32 = parse(&v, "BCRYPT_COST")?;
                // bcrypt aceita custo entre 4 e 31
                if !(4..=31).contains(&cost) {
                    return Err(ConfigError::Invalid { key: "BCRYPT_COST", value: v });
                }
                cost
            }
            None => bcrypt::DEFAULT_COST,
        };

        let password_storage = match lookup("PASSWORD_STORAGE").as_deref().map(str::to_ascii_lowercase) {
            None => PasswordStorage::Bcrypt { cost },
            Some(ref v) if v == "bcrypt" => PasswordStorage::Bcrypt { cost },
            Some(ref v) if v == "plaintext" => PasswordStorage::Plaintext,
            Some(v) => return Err(ConfigError::Invalid { key: "PASSWORD_STORAGE", value: v }),
        };

        let session = SessionConfig {
            secret: lookup("SESSION_SECRET").unwrap_or(defaults.session.secret),
            ttl_hours: match lookup("SESSION_TTL_HOURS") {
                Some(v) => {
                    let hours: i64 = parse(&v, "SESSION_TTL_HOURS")?;
                    if !(1..=MAX_SESSION_TTL_HOURS).contains(&hours) {
                        return Err(ConfigError::Invalid { key: "SESSION_TTL_HOURS", value: v });
                    }
                    hours
                }
                None => defaults.session.ttl_hours,
            },
            issuer: lookup("SESSION_ISSUER").unwrap_or(defaults.session.issuer),
            audience: lookup("SESSION_AUDIENCE").unwrap_or(defaults.session.audience),
            cookie_secure: match lookup("SESSION_COOKIE_SECURE") {
                Some(v) => parse_bool(&v)
                    .ok_or(ConfigError::Invalid { key: "SESSION_COOKIE_SECURE", value: v })?,
                None => defaults.session.cookie_secure,
            },
        };

        let seed_catalog = match lookup("SEED_CATALOG") {
            Some(v) => parse_bool(&v).ok_or(ConfigError::Invalid { key: "SEED_CATALOG", value: v })?,
            None => defaults.seed_catalog,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            store_backend,
            password_storage,
            session,
            seed_catalog,
            allowed_origin: lookup("ALLOWED_ORIGIN").filter(|v| !v.is_empty()),
        })
    }
}

fn parse<T: FromStr>(value: &str, key: &'static str) -> Result<T, ConfigError> {
    value
        .trim()
        .parse()
        .map_err(|_| ConfigError::Invalid { key, value: value.to_string() })
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
