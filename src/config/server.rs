use error_stack::{Report, Result};
use secrecy::SecretString;
use serde::Deserialize;
use std::net::{IpAddr, Ipv4Addr};

use super::ParseError;
use crate::util::figment::DescribeFigmentError;

#[derive(Debug, Deserialize)]
pub struct Server {
    pub db: super::Database,
    /// The shared secret gating the whole dashboard. There are no
    /// per-user accounts; everyone who knows it sees everything.
    ///
    /// **Environment variables**:
    /// - `PAINEL_DASHBOARD_SECRET`
    pub dashboard_secret: SecretString,
    /// **Environment variables**:
    /// - `PAINEL_IP`
    #[serde(default = "Server::default_ip")]
    pub ip: IpAddr,
    /// **Environment variables**:
    /// - `PAINEL_PORT`
    #[serde(default = "Server::default_port")]
    pub port: u16,
    /// **Environment variables**:
    /// - `PAINEL_WORKERS`
    #[serde(default = "Server::default_workers")]
    pub workers: usize,
}

impl Server {
    pub fn load() -> Result<Self, ParseError> {
        dotenvy::dotenv().ok();

        Self::figment()
            .extract::<Self>()
            .map_err(|e| Report::new(ParseError).describe_figment_error(e))
    }
}

impl Server {
    /// Creates the default [`figment::Figment`] used to load server
    /// configuration. Split out from [`Server::load`] for testing.
    pub(crate) fn figment() -> figment::Figment {
        use figment::{providers::Env, Figment};

        Figment::new()
            // The env provider splits on every underscore, so multi-word
            // keys have to be mapped by hand.
            .merge(Env::prefixed("PAINEL_").map(|v| match v.as_str() {
                "DB_URL" => "db.url".into(),
                "DB_PASSWORD" => "db.password".into(),
                "DB_MIN_IDLE" => "db.min_idle".into(),
                "DB_POOL_SIZE" => "db.pool_size".into(),
                "DB_TIMEOUT_SECS" => "db.timeout_secs".into(),
                "DB_ENFORCE_TLS" => "db.enforce_tls".into(),
                "DASHBOARD_SECRET" => "dashboard_secret".into(),
                _ => v.as_str().replace('_', ".").into(),
            }))
            // Environment variable aliases
            .merge(Env::raw().map(|v| match v.as_str() {
                "DATABASE_URL" => "db.url".into(),
                _ => v.into(),
            }))
    }

    const fn default_ip() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    const fn default_port() -> u16 {
        3000
    }

    const fn default_workers() -> usize {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use secrecy::ExposeSecret;
    use std::num::{NonZeroU32, NonZeroU64};

    #[test]
    fn env_aliases() {
        Jail::expect_with(|jail| {
            jail.set_env("DATABASE_URL", "postgres://painel.example.net/painel");
            jail.set_env("PAINEL_DASHBOARD_SECRET", "segredo-do-painel");
            jail.set_env("PAINEL_DB_PASSWORD", "service-role-key");

            jail.set_env("PAINEL_DB_MIN_IDLE", "2");
            jail.set_env("PAINEL_DB_POOL_SIZE", "8");
            jail.set_env("PAINEL_DB_TIMEOUT_SECS", "10");
            jail.set_env("PAINEL_DB_ENFORCE_TLS", "false");

            jail.set_env("PAINEL_PORT", "8300");

            let config: Server = Server::figment().extract()?;
            assert_eq!(
                config.db.url.expose_secret(),
                "postgres://painel.example.net/painel"
            );
            assert_eq!(
                config.db.password.as_ref().unwrap().expose_secret(),
                "service-role-key"
            );
            assert_eq!(
                config.dashboard_secret.expose_secret(),
                "segredo-do-painel"
            );

            assert_eq!(config.db.min_idle, NonZeroU32::new(2));
            assert_eq!(config.db.pool_size, NonZeroU32::new(8).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(10).unwrap());
            assert_eq!(config.db.enforce_tls, false);

            assert_eq!(config.port, 8300);
            Ok(())
        });
    }

    #[test]
    fn missing_required_values_fail() {
        Jail::expect_with(|jail| {
            // No url, no secret: extraction must not succeed.
            jail.set_env("PAINEL_DB_POOL_SIZE", "8");

            assert!(Server::figment().extract::<Server>().is_err());
            Ok(())
        });
    }

    #[test]
    fn defaults_apply() {
        Jail::expect_with(|jail| {
            jail.set_env("PAINEL_DB_URL", "postgres://painel.example.net/painel");
            jail.set_env("PAINEL_DASHBOARD_SECRET", "segredo-do-painel");

            let config: Server = Server::figment().extract()?;
            assert_eq!(config.db.pool_size, NonZeroU32::new(5).unwrap());
            assert_eq!(config.db.timeout_secs, NonZeroU64::new(5).unwrap());
            assert!(config.db.enforce_tls);
            assert!(config.db.password.is_none());

            assert_eq!(config.ip, Server::default_ip());
            assert_eq!(config.port, 3000);
            assert_eq!(config.workers, 1);
            Ok(())
        });
    }
}
