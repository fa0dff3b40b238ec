use std::str::FromStr;

/// Log output format selected by `LOG_FORMAT`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LogFormat {
    /// Human-readable lines (default).
    #[default]
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "pretty" | "text" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Invalid {
                var: "LOG_FORMAT",
                value: other.to_string(),
            }),
        }
    }
}

/// A malformed environment variable.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} has an invalid value: {value:?}")]
    Invalid { var: &'static str, value: String },
}

/// Server configuration loaded from environment variables.
///
/// All fields have defaults suitable for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    pub log_format: LogFormat,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".into(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            log_format: LogFormat::Pretty,
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `LOG_FORMAT`           | `pretty` (or `json`)       |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = lookup("HOST").unwrap_or(defaults.host);
        let port = parse_var(&lookup, "PORT", defaults.port)?;

        let cors_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            None => defaults.cors_origins,
        };

        let request_timeout_secs =
            parse_var(&lookup, "REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs)?;

        let log_format = match lookup("LOG_FORMAT") {
            Some(raw) => raw.parse()?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            log_format,
        })
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(var) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { var, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| map.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_unset() {
        let config = load(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:5173"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = load(&[
            ("PORT", "8080"),
            ("CORS_ORIGINS", "https://a.example, https://b.example,"),
            ("LOG_FORMAT", "JSON"),
        ])
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.cors_origins, vec!["https://a.example", "https://b.example"]);
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn invalid_port_is_an_error() {
        assert_matches!(load(&[("PORT", "eighty")]), Err(ConfigError::Invalid { var: "PORT", .. }));
    }

    #[test]
    fn unknown_log_format_is_an_error() {
        assert_matches!(
            load(&[("LOG_FORMAT", "xml")]),
            Err(ConfigError::Invalid { var: "LOG_FORMAT", .. })
        );
    }
}
