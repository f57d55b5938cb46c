use secrecy::SecretString;
use serde::Deserialize;
use std::num::{NonZeroU32, NonZeroU64};

/// Configuration for connecting to the hosted Postgres backend.
///
/// The backend owns all of the data; every connection this service
/// opens is strictly for reading.
#[derive(Debug, Deserialize)]
pub struct Database {
    /// Connection URL pointing to the hosted backend.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_URL` or `DATABASE_URL`
    pub url: SecretString,
    /// Access key for the backend. When set, it overrides any password
    /// embedded in the connection URL.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_PASSWORD`
    #[serde(default)]
    pub password: Option<SecretString>,
    /// Minimum idle database connections just to avoid wasting
    /// hardware resources from the database server.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_MIN_IDLE`
    #[serde(default)]
    pub min_idle: Option<NonZeroU32>,
    /// Maximum amount of pool size that database can handle.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_POOL_SIZE`
    #[serde(default = "Database::default_pool_size")]
    pub pool_size: NonZeroU32,
    /// How long this server can wait until its time limit where the
    /// database connection takes a while to acknowledge or
    /// successfully established.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_TIMEOUT_SECS`
    #[serde(default = "Database::default_timeout_secs")]
    pub timeout_secs: NonZeroU64,
    /// Forces all database connections to be encrypted with TLS
    /// (if possible).
    ///
    /// **Environment variables**:
    /// - `PAINEL_DB_ENFORCE_TLS`
    #[serde(default = "Database::default_enforce_tls")]
    pub enforce_tls: bool,
}

impl Database {
    const DEFAULT_POOL_SIZE: u32 = 5;
    const DEFAULT_TIMEOUT_SECS: u64 = 5;

    // Required by serde
    const fn default_pool_size() -> NonZeroU32 {
        match NonZeroU32::new(Self::DEFAULT_POOL_SIZE) {
            Some(n) => n,
            None => panic!("DEFAULT_POOL_SIZE is accidentally set to 0"),
        }
    }

    const fn default_timeout_secs() -> NonZeroU64 {
        match NonZeroU64::new(Self::DEFAULT_TIMEOUT_SECS) {
            Some(n) => n,
            None => panic!("DEFAULT_TIMEOUT_SECS is accidentally set to 0"),
        }
    }

    const fn default_enforce_tls() -> bool {
        true
    }
}
