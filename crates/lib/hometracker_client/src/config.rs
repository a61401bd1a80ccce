//! Client configuration.

use std::time::Duration;

const DEFAULT_API_URL: &str = "http://localhost:3001";
const DEFAULT_ENVIRONMENT: &str = "development";
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Configuration for the API client.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the backend API (e.g. "https://api.hometracker.pro/api/v1").
    pub api_base_url: String,
    /// Deployment environment name, informational only.
    pub environment: String,
    /// Timeout applied to every request.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Reads configuration from environment variables with sensible defaults.
    ///
    /// | Variable                  | Default                 |
    /// |---------------------------|-------------------------|
    /// | `HOMETRACKER_API_URL`     | `http://localhost:3001` |
    /// | `HOMETRACKER_ENVIRONMENT` | `development`           |
    ///
    /// Values are taken as-is; nothing is validated here.
    pub fn from_env() -> Self {
        Self {
            api_base_url: std::env::var("HOMETRACKER_API_URL")
                .unwrap_or_else(|_| DEFAULT_API_URL.into()),
            environment: std::env::var("HOMETRACKER_ENVIRONMENT")
                .unwrap_or_else(|_| DEFAULT_ENVIRONMENT.into()),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Server root for the diagnostic endpoints (`/health`, `/metrics`).
    ///
    /// Deployments point the base URL either at the server root or at the
    /// versioned `/api/v1` prefix; diagnostics always live at the root, so
    /// a trailing `/api/v1` is stripped.
    pub fn server_root_url(&self) -> String {
        let trimmed = self.api_base_url.trim_end_matches('/');
        trimmed.strip_suffix("/api/v1").unwrap_or(trimmed).to_string()
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.into(),
            environment: DEFAULT_ENVIRONMENT.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = ClientConfig::default();
        assert_eq!(config.api_base_url, "http://localhost:3001");
        assert_eq!(config.environment, "development");
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn server_root_strips_version_prefix() {
        let config = ClientConfig {
            api_base_url: "https://api.hometracker.pro/api/v1".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.server_root_url(), "https://api.hometracker.pro");
    }

    #[test]
    fn server_root_strips_trailing_slash() {
        let config = ClientConfig {
            api_base_url: "https://api.hometracker.pro/api/v1/".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.server_root_url(), "https://api.hometracker.pro");
    }

    #[test]
    fn server_root_keeps_unversioned_base() {
        let config = ClientConfig {
            api_base_url: "http://localhost:3001".into(),
            ..ClientConfig::default()
        };
        assert_eq!(config.server_root_url(), "http://localhost:3001");
    }
}
