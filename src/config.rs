//! Service configuration and base-URL construction
//!
//! The base URL is a process-wide constant: callers resolve a [`ServiceConfig`]
//! once at startup, build the base URL from it, and pass that string to every
//! [`crate::PageBuilder`]. Recomputing it per request is harmless (the
//! underlying configuration never changes during process lifetime) but
//! unnecessary.

use std::path::Path;
use tracing::debug;

/// Conventional HTTP port; omitted from the base URL when configured.
pub const DEFAULT_PORT: u16 = 8080;

/// Environment variable consulted for the service host.
pub const HOST_ENV_VAR: &str = "SERVICE_HOST";

/// Environment variable consulted for the service port.
pub const PORT_ENV_VAR: &str = "SERVICE_PORT";

/// Host and port the service is reachable on, used to build navigation URLs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: DEFAULT_PORT,
        }
    }
}

impl ServiceConfig {
    /// Build the base URL for navigation links.
    ///
    /// `http://{host}`, with `:{port}` appended unless the port is the
    /// conventional default (8080).
    ///
    /// # Examples
    ///
    /// ```
    /// use page_envelope::ServiceConfig;
    ///
    /// let config = ServiceConfig { host: "localhost".to_string(), port: 3333 };
    /// assert_eq!(config.base_url(), "http://localhost:3333");
    ///
    /// let config = ServiceConfig { host: "localhost".to_string(), port: 8080 };
    /// assert_eq!(config.base_url(), "http://localhost");
    /// ```
    pub fn base_url(&self) -> String {
        if self.port == DEFAULT_PORT {
            format!("http://{}", self.host)
        } else {
            format!("http://{}:{}", self.host, self.port)
        }
    }

    /// Resolve host and port following the standard priority order:
    /// 1. Command-line arguments (highest priority)
    /// 2. Environment variables (`SERVICE_HOST` / `SERVICE_PORT`)
    /// 3. TOML config file (`host` / `port` keys)
    /// 4. Compiled default (`localhost:8080`, fallback)
    ///
    /// Each field resolves independently, so the host may come from the
    /// environment while the port comes from the config file. Unreadable or
    /// malformed config files are skipped silently; resolution never fails.
    pub fn resolve(
        cli_host: Option<&str>,
        cli_port: Option<u16>,
        config_file: Option<&Path>,
    ) -> Self {
        let file_config = config_file.and_then(load_config_file);

        let host = if let Some(host) = cli_host {
            debug!("Using host from command line: {}", host);
            host.to_string()
        } else if let Ok(host) = std::env::var(HOST_ENV_VAR) {
            debug!("Using host from {}: {}", HOST_ENV_VAR, host);
            host
        } else if let Some(host) = file_config.as_ref().and_then(|c| config_host(c)) {
            debug!("Using host from config file: {}", host);
            host
        } else {
            Self::default().host
        };

        let port = if let Some(port) = cli_port {
            debug!("Using port from command line: {}", port);
            port
        } else if let Some(port) = std::env::var(PORT_ENV_VAR)
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
        {
            debug!("Using port from {}: {}", PORT_ENV_VAR, port);
            port
        } else if let Some(port) = file_config.as_ref().and_then(config_port) {
            debug!("Using port from config file: {}", port);
            port
        } else {
            DEFAULT_PORT
        };

        Self { host, port }
    }
}

/// Read and parse a TOML config file, skipping it on any failure.
fn load_config_file(path: &Path) -> Option<toml::Value> {
    let content = std::fs::read_to_string(path).ok()?;
    toml::from_str::<toml::Value>(&content).ok()
}

fn config_host(config: &toml::Value) -> Option<String> {
    config
        .get("host")
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

fn config_port(config: &toml::Value) -> Option<u16> {
    config
        .get("port")
        .and_then(|v| v.as_integer())
        .and_then(|p| u16::try_from(p).ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::io::Write;

    #[test]
    fn test_base_url_with_port() {
        let config = ServiceConfig {
            host: "localhost".to_string(),
            port: 3333,
        };
        assert_eq!(config.base_url(), "http://localhost:3333");
    }

    #[test]
    fn test_base_url_omits_default_port() {
        let config = ServiceConfig {
            host: "example.com".to_string(),
            port: DEFAULT_PORT,
        };
        assert_eq!(config.base_url(), "http://example.com");
    }

    #[test]
    #[serial]
    fn test_resolve_defaults() {
        std::env::remove_var(HOST_ENV_VAR);
        std::env::remove_var(PORT_ENV_VAR);

        let config = ServiceConfig::resolve(None, None, None);
        assert_eq!(config.host, "localhost");
        assert_eq!(config.port, DEFAULT_PORT);
    }

    #[test]
    #[serial]
    fn test_resolve_cli_wins_over_env() {
        std::env::set_var(HOST_ENV_VAR, "env-host");
        std::env::set_var(PORT_ENV_VAR, "4444");

        let config = ServiceConfig::resolve(Some("cli-host"), Some(5555), None);
        assert_eq!(config.host, "cli-host");
        assert_eq!(config.port, 5555);

        std::env::remove_var(HOST_ENV_VAR);
        std::env::remove_var(PORT_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_resolve_env() {
        std::env::set_var(HOST_ENV_VAR, "env-host");
        std::env::set_var(PORT_ENV_VAR, "4444");

        let config = ServiceConfig::resolve(None, None, None);
        assert_eq!(config.host, "env-host");
        assert_eq!(config.port, 4444);

        std::env::remove_var(HOST_ENV_VAR);
        std::env::remove_var(PORT_ENV_VAR);
    }

    #[test]
    #[serial]
    fn test_resolve_config_file() {
        std::env::remove_var(HOST_ENV_VAR);
        std::env::remove_var(PORT_ENV_VAR);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "host = \"file-host\"\nport = 3333").unwrap();

        let config = ServiceConfig::resolve(None, None, Some(file.path()));
        assert_eq!(config.host, "file-host");
        assert_eq!(config.port, 3333);
    }

    #[test]
    #[serial]
    fn test_resolve_malformed_config_file_skipped() {
        std::env::remove_var(HOST_ENV_VAR);
        std::env::remove_var(PORT_ENV_VAR);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        let config = ServiceConfig::resolve(None, None, Some(file.path()));
        assert_eq!(config, ServiceConfig::default());
    }

    #[test]
    #[serial]
    fn test_resolve_fields_independent() {
        // Host from env, port from config file
        std::env::set_var(HOST_ENV_VAR, "env-host");
        std::env::remove_var(PORT_ENV_VAR);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 9000").unwrap();

        let config = ServiceConfig::resolve(None, None, Some(file.path()));
        assert_eq!(config.host, "env-host");
        assert_eq!(config.port, 9000);

        std::env::remove_var(HOST_ENV_VAR);
    }
}
