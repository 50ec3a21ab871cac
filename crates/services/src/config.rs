use std::env;
use std::time::Duration;

use reqwest::Client;
use url::Url;
use wrapped_core::model::Category;

use crate::error::ConfigError;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

pub const BASE_URL_ENV: &str = "WRAPPED_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "WRAPPED_API_TIMEOUT_SECS";

#[derive(Clone, Debug, PartialEq, Eq)]
struct Endpoints {
    artists: Url,
    genres: Url,
    tracks: Url,
    history: Url,
    delete: Url,
}

/// Where the backend lives and how patient to be with it.
///
/// All endpoint URLs are resolved up front so request paths cannot fail later.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    timeout: Option<Duration>,
    endpoints: Endpoints,
}

impl ApiConfig {
    /// Parse a base URL such as `http://localhost:8000` or `https://host/api`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidBaseUrl` for unparsable or non-http(s) URLs.
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let invalid = |reason: String| ConfigError::InvalidBaseUrl {
            raw: raw.to_owned(),
            reason,
        };

        let mut base_url = Url::parse(raw.trim()).map_err(|err| invalid(err.to_string()))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme {}", base_url.scheme())));
        }
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let root = base_url
            .join("category/")
            .map_err(|err| invalid(err.to_string()))?;
        let join = |name: &str| root.join(name).map_err(|err| invalid(err.to_string()));
        let endpoints = Endpoints {
            artists: join(Category::Artists.endpoint())?,
            genres: join(Category::Genres.endpoint())?,
            tracks: join(Category::Tracks.endpoint())?,
            history: join("displayhistory")?,
            delete: join("delete")?,
        };

        Ok(Self {
            base_url,
            timeout: None,
            endpoints,
        })
    }

    /// Read `WRAPPED_API_BASE_URL` and `WRAPPED_API_TIMEOUT_SECS`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` when either variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        let timeout = env::var(TIMEOUT_ENV)
            .ok()
            .map(|raw| parse_timeout_secs(&raw))
            .transpose()?
            .flatten();
        Ok(Self::new(&base)?.with_timeout(timeout))
    }

    /// Requests hang indefinitely unless a timeout is set.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    #[must_use]
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    #[must_use]
    pub fn category_url(&self, category: Category) -> &Url {
        match category {
            Category::Artists => &self.endpoints.artists,
            Category::Genres => &self.endpoints.genres,
            Category::Tracks => &self.endpoints.tracks,
        }
    }

    #[must_use]
    pub fn history_url(&self) -> &Url {
        &self.endpoints.history
    }

    #[must_use]
    pub fn delete_url(&self) -> &Url {
        &self.endpoints.delete
    }

    pub(crate) fn http_client(&self) -> Result<Client, ConfigError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        Ok(builder.build()?)
    }
}

/// Parse a timeout in whole seconds; `0` disables the timeout.
///
/// # Errors
///
/// Returns `ConfigError::InvalidTimeout` for non-numeric input.
pub fn parse_timeout_secs(raw: &str) -> Result<Option<Duration>, ConfigError> {
    let secs: u64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidTimeout {
            raw: raw.to_owned(),
        })?;
    Ok((secs > 0).then(|| Duration::from_secs(secs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn endpoints_hang_off_category_prefix() {
        let config = ApiConfig::new("http://localhost:8000").unwrap();
        assert_eq!(
            config.category_url(Category::Tracks).as_str(),
            "http://localhost:8000/category/displaytracks"
        );
        assert_eq!(
            config.history_url().as_str(),
            "http://localhost:8000/category/displayhistory"
        );
        assert_eq!(
            config.delete_url().as_str(),
            "http://localhost:8000/category/delete"
        );
    }

    #[test]
    fn base_path_is_preserved() {
        let config = ApiConfig::new("https://example.com/api").unwrap();
        assert_eq!(
            config.category_url(Category::Genres).as_str(),
            "https://example.com/api/category/displaygenres"
        );
    }

    #[test]
    fn rejects_non_http_urls() {
        assert!(matches!(
            ApiConfig::new("ftp://example.com"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            ApiConfig::new("not a url"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout_secs("5").unwrap(), Some(Duration::from_secs(5)));
        assert_eq!(parse_timeout_secs("0").unwrap(), None);
        assert!(parse_timeout_secs("soon").is_err());
    }

    #[test]
    fn default_config_has_no_timeout() {
        let config = ApiConfig::new(DEFAULT_BASE_URL).unwrap();
        assert_eq!(config.timeout(), None);
        assert_eq!(config.base_url().as_str(), "http://localhost:8000/");
    }
}
