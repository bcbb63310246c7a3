//! Host configuration parsed from environment variables.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// Origin of the video backend, without a trailing slash.
    pub backend_url: String,
}

impl HostConfig {
    /// Build typed host config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: listen port, default 3000
    /// - `BACKEND_URL`: `http(s)://` origin that `/api/*` is forwarded to,
    ///   default `http://127.0.0.1:8080`
    ///
    /// # Errors
    ///
    /// `ConfigError::Invalid` for an unparseable port or a non-HTTP backend URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|_| ConfigError::Invalid { var: "PORT", value: raw.clone() })?,
            None => DEFAULT_PORT,
        };
        let backend_url = parse_backend_url(lookup("BACKEND_URL").as_deref())?;
        Ok(Self { port, backend_url })
    }
}

fn parse_backend_url(raw: Option<&str>) -> Result<String, ConfigError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_BACKEND_URL.to_owned());
    };
    let url = raw.trim().trim_end_matches('/');
    let has_host = url
        .strip_prefix("http://")
        .or_else(|| url.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if !has_host {
        return Err(ConfigError::Invalid { var: "BACKEND_URL", value: raw.to_owned() });
    }
    Ok(url.to_owned())
}
