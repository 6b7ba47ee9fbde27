//! Service configuration loaded via OrthoConfig.
//!
//! Values layer from defaults, a config file, `TWITTOR_*` environment
//! variables and command-line flags.

use std::net::SocketAddr;

use ortho_config::OrthoConfig;
use serde::Deserialize;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 10;

/// Configuration errors detected after loading.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr { value: String, message: String },
}

/// Runtime settings for the HTTP service.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "TWITTOR")]
pub struct AppSettings {
    /// Socket address to listen on.
    pub bind_addr: Option<String>,
    /// PostgreSQL connection URL. Without one the service keeps its data in
    /// memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    pub db_max_connections: Option<u32>,
    /// Apply embedded migrations before serving.
    pub run_migrations: Option<bool>,
}

impl AppSettings {
    /// Parsed listen address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value is not a
    /// socket address.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse()
            .map_err(|err: std::net::AddrParseError| SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: err.to_string(),
            })
    }

    /// Configured database URL, ignoring blank values.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    pub fn db_max_connections(&self) -> u32 {
        self.db_max_connections.unwrap_or(DEFAULT_DB_MAX_CONNECTIONS)
    }

    /// Whether to apply pending migrations at startup; on unless disabled.
    pub fn run_migrations(&self) -> bool {
        self.run_migrations.unwrap_or(true)
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for settings parsing.

    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "TWITTOR_BIND_ADDR",
        "TWITTOR_DATABASE_URL",
        "TWITTOR_DB_MAX_CONNECTIONS",
        "TWITTOR_RUN_MIGRATIONS",
    ];

    fn load_from_empty_args() -> AppSettings {
        AppSettings::load_from_iter([OsString::from("backend")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_nothing_is_set() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("default address"),
            "0.0.0.0:8080".parse::<SocketAddr>().expect("literal")
        );
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections(), 10);
        assert!(settings.run_migrations());
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("TWITTOR_BIND_ADDR", Some("127.0.0.1:9000".to_owned())),
            (
                "TWITTOR_DATABASE_URL",
                Some("postgres://twittor@localhost/twittor".to_owned()),
            ),
            ("TWITTOR_DB_MAX_CONNECTIONS", Some("3".to_owned())),
            ("TWITTOR_RUN_MIGRATIONS", Some("false".to_owned())),
        ]);

        let settings = load_from_empty_args();
        assert_eq!(
            settings.bind_addr().expect("address"),
            "127.0.0.1:9000".parse::<SocketAddr>().expect("literal")
        );
        assert_eq!(
            settings.database_url(),
            Some("postgres://twittor@localhost/twittor")
        );
        assert_eq!(settings.db_max_connections(), 3);
        assert!(!settings.run_migrations());
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("TWITTOR_BIND_ADDR", None::<String>),
            ("TWITTOR_DATABASE_URL", Some("   ".to_owned())),
            ("TWITTOR_DB_MAX_CONNECTIONS", None),
            ("TWITTOR_RUN_MIGRATIONS", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }

    #[rstest]
    fn invalid_bind_addr_is_reported() {
        let _guard = lock_env([
            ("TWITTOR_BIND_ADDR", Some("not-an-address".to_owned())),
            ("TWITTOR_DATABASE_URL", None::<String>),
            ("TWITTOR_DB_MAX_CONNECTIONS", None),
            ("TWITTOR_RUN_MIGRATIONS", None),
        ]);

        let err = load_from_empty_args().bind_addr().expect_err("invalid");
        assert!(matches!(err, SettingsError::InvalidBindAddr { .. }));
    }
}
