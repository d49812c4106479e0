//! Server settings and the builder handed to [`super::create_server`].

use ortho_config::OrthoConfig;
use serde::Deserialize;

use holocron::outbound::persistence::DbPool;

/// Settings layered from CLI flags, `HOLOCRON_*` environment variables and
/// an optional configuration file.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "HOLOCRON")]
pub struct ServerSettings {
    /// Interface to bind.
    #[ortho_config(default = "0.0.0.0".to_owned())]
    pub host: String,
    /// TCP port to bind.
    #[ortho_config(default = 3000)]
    pub port: u16,
    /// PostgreSQL URL. Without it the service keeps its data in memory.
    pub database_url: Option<String>,
    /// Upper bound on pooled database connections.
    #[ortho_config(default = 10)]
    pub db_max_connections: u32,
}

impl ServerSettings {
    /// Database URL, when persistence is configured.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.trim().is_empty())
    }
}

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) host: String,
    pub(crate) port: u16,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    /// Configuration binding `host:port` with the in-memory store.
    #[must_use]
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            db_pool: None,
        }
    }

    /// Use PostgreSQL-backed repositories drawing from `pool`.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    use env_lock::lock_env;
    use rstest::rstest;

    const VARS: [&str; 4] = [
        "HOLOCRON_HOST",
        "HOLOCRON_PORT",
        "HOLOCRON_DATABASE_URL",
        "HOLOCRON_DB_MAX_CONNECTIONS",
    ];

    fn load_from_empty_args() -> ServerSettings {
        ServerSettings::load_from_iter([OsString::from("holocron")]).expect("config should load")
    }

    #[rstest]
    fn defaults_apply_when_unset() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = load_from_empty_args();

        assert_eq!(settings.host, "0.0.0.0");
        assert_eq!(settings.port, 3000);
        assert!(settings.database_url().is_none());
        assert_eq!(settings.db_max_connections, 10);
    }

    #[rstest]
    fn environment_overrides_are_respected() {
        let _guard = lock_env([
            ("HOLOCRON_HOST", Some("127.0.0.1".to_owned())),
            ("HOLOCRON_PORT", Some("8080".to_owned())),
            (
                "HOLOCRON_DATABASE_URL",
                Some("postgres://localhost/holocron".to_owned()),
            ),
            ("HOLOCRON_DB_MAX_CONNECTIONS", Some("4".to_owned())),
        ]);

        let settings = load_from_empty_args();

        assert_eq!(settings.host, "127.0.0.1");
        assert_eq!(settings.port, 8080);
        assert_eq!(settings.database_url(), Some("postgres://localhost/holocron"));
        assert_eq!(settings.db_max_connections, 4);
    }

    #[rstest]
    fn cli_flags_override_defaults() {
        let _guard = lock_env(VARS.map(|name| (name, None::<String>)));

        let settings = ServerSettings::load_from_iter(
            ["holocron", "--port", "8081"].map(OsString::from),
        )
        .expect("config should load");

        assert_eq!(settings.port, 8081);
        assert_eq!(settings.host, "0.0.0.0");
    }

    #[rstest]
    fn blank_database_url_means_in_memory() {
        let _guard = lock_env([
            ("HOLOCRON_HOST", None),
            ("HOLOCRON_PORT", None),
            ("HOLOCRON_DATABASE_URL", Some("  ".to_owned())),
            ("HOLOCRON_DB_MAX_CONNECTIONS", None),
        ]);

        assert!(load_from_empty_args().database_url().is_none());
    }
}
