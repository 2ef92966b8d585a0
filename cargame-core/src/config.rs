//! Backend endpoint configuration.
//!
//! The base URL is taken from `API_BASE_URL` at compile time, which is the
//! only form of environment a WebAssembly bundle has. A relative (or missing)
//! base is resolved against the page origin once at startup; the resulting
//! [`ApiConfig`] is then shared read-only by every outbound call.

use crate::endpoints::Endpoint;
use thiserror::Error;
use url::Url;

/// Headers attached to every request.
pub const DEFAULT_HEADERS: &[(&str, &str)] = &[("Accept", "application/json")];

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid API base URL `{value}`: {reason}")]
    InvalidBaseUrl { value: String, reason: String },
    #[error("API base URL `{0}` cannot carry endpoint paths")]
    CannotBeBase(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: Url,
    headers: Vec<(String, String)>,
}

impl ApiConfig {
    /// Build a configuration from an absolute base URL.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when the value is not an absolute URL that can
    /// be extended with path segments.
    pub fn new(base_url: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let url = Url::parse(trimmed).map_err(|err| invalid(trimmed, &err))?;
        Self::from_url(url)
    }

    /// Build a configuration, resolving a relative or empty base against `origin`.
    ///
    /// # Errors
    /// Returns [`ConfigError`] when neither the base nor the origin yield a
    /// usable absolute URL.
    pub fn with_origin(base_url: &str, origin: &str) -> Result<Self, ConfigError> {
        let trimmed = base_url.trim();
        let url = match Url::parse(trimmed) {
            Ok(url) => url,
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                let origin_url = Url::parse(origin.trim()).map_err(|err| invalid(origin, &err))?;
                origin_url
                    .join(trimmed)
                    .map_err(|err| invalid(trimmed, &err))?
            }
            Err(err) => return Err(invalid(trimmed, &err)),
        };
        Self::from_url(url)
    }

    /// Configuration for this build: `API_BASE_URL` resolved against `origin`.
    ///
    /// # Errors
    /// See [`ApiConfig::with_origin`].
    pub fn from_build_env(origin: &str) -> Result<Self, ConfigError> {
        Self::with_origin(configured_base_url().unwrap_or(""), origin)
    }

    fn from_url(mut url: Url) -> Result<Self, ConfigError> {
        if url.cannot_be_a_base() {
            return Err(ConfigError::CannotBeBase(url.to_string()));
        }
        url.set_query(None);
        url.set_fragment(None);
        Ok(Self {
            base_url: url,
            headers: DEFAULT_HEADERS
                .iter()
                .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
                .collect(),
        })
    }

    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }


    pub fn headers(&self) -> impl Iterator<Item = (&str, &str)> {
        self.headers
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Absolute URL of `endpoint` below the configured base.
    #[must_use]
    pub fn url_for(&self, endpoint: &Endpoint) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend(endpoint.segments());
        }
        let query = endpoint.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        url
    }
}

fn invalid(value: &str, err: &url::ParseError) -> ConfigError {
    ConfigError::InvalidBaseUrl {
        value: value.to_string(),
        reason: err.to_string(),
    }
}

/// Base URL baked in through `API_BASE_URL`, if one was set.
#[must_use]
pub fn configured_base_url() -> Option<&'static str> {
    base_url_from_env(option_env!("API_BASE_URL"))
}

fn base_url_from_env(value: Option<&'static str>) -> Option<&'static str> {
    value.map(str::trim).filter(|value| !value.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_base_is_kept() {
        let config = ApiConfig::new("http://localhost:8080").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/");
    }

    #[test]
    fn relative_base_requires_origin() {
        assert!(matches!(
            ApiConfig::new("/backend"),
            Err(ConfigError::InvalidBaseUrl { .. })
        ));
        let config = ApiConfig::with_origin("/backend", "https://cars.example").unwrap();
        assert_eq!(config.base_url().as_str(), "https://cars.example/backend");
    }

    #[test]
    fn empty_base_falls_back_to_origin() {
        let config = ApiConfig::with_origin("", "http://127.0.0.1:8081").unwrap();
        assert_eq!(config.base_url().as_str(), "http://127.0.0.1:8081/");
    }

    #[test]
    fn absolute_base_ignores_origin() {
        let config =
            ApiConfig::with_origin("http://api.example:9000/", "http://ui.example").unwrap();
        assert_eq!(config.base_url().host_str(), Some("api.example"));
    }

    #[test]
    fn unusable_bases_are_rejected() {
        assert!(matches!(
            ApiConfig::new("mailto:someone@example.com"),
            Err(ConfigError::CannotBeBase(_))
        ));
        assert!(ApiConfig::with_origin("", "not an origin").is_err());
    }

    #[test]
    fn base_query_and_fragment_are_dropped() {
        let config = ApiConfig::new("http://localhost:8080/app?x=1#top").unwrap();
        assert_eq!(config.base_url().as_str(), "http://localhost:8080/app");
    }

    #[test]
    fn default_headers_do_not_include_cors_response_headers() {
        let config = ApiConfig::new("http://localhost:8080").unwrap();
        let headers: Vec<_> = config.headers().collect();
        assert_eq!(headers, vec![("Accept", "application/json")]);
        assert!(
            !headers
                .iter()
                .any(|(name, _)| name.eq_ignore_ascii_case("Access-Control-Allow-Origin"))
        );
    }

    #[test]
    fn url_for_appends_segments_below_base_path() {
        let config = ApiConfig::new("http://localhost:8080/app/").unwrap();
        assert_eq!(
            config.url_for(&Endpoint::Cars).as_str(),
            "http://localhost:8080/app/api/cars"
        );
        let config = ApiConfig::new("http://localhost:8080/app").unwrap();
        assert_eq!(
            config.url_for(&Endpoint::Maps).as_str(),
            "http://localhost:8080/app/api/gamemaps"
        );
    }

    #[test]
    fn env_value_is_trimmed_and_blank_is_none() {
        assert_eq!(base_url_from_env(None), None);
        assert_eq!(base_url_from_env(Some("   ")), None);
        assert_eq!(
            base_url_from_env(Some(" http://localhost:8080 ")),
            Some("http://localhost:8080")
        );
    }
}
