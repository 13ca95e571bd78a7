use std::env::vars;

use log::{info, warn};
use serde::Deserialize;
use ustr::Ustr;

use crate::locale::Locale;

/// Public demo API the screen reads its users from by default.
pub const DEFAULT_API_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessConfig {
    pub api_base_url: String,
    pub locale: Locale,
}

// Environment variables, all optional.
#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    roster_api_base_url: Option<String>,
    roster_locale: Option<String>,
}

impl BusinessConfig {
    pub fn new(base_url: String) -> Self {
        Self {
            api_base_url: base_url,
            locale: Locale::default(),
        }
    }

    #[must_use]
    pub fn with_locale(mut self, locale: Locale) -> Self {
        self.locale = locale;
        self
    }

    /// Full URL of the users collection.
    pub fn users_url(&self) -> Ustr {
        let base = self.api_base_url.trim_end_matches('/');
        Ustr::from(&format!("{base}/users"))
    }

    /// Reads `ROSTER_API_BASE_URL` and `ROSTER_LOCALE`, falling back to the
    /// defaults for anything unset.
    pub fn from_env() -> anyhow::Result<Self> {
        info!("Loading configuration from environment variables");
        let raw: RawConfig = serde_env::from_iter(vars())?;
        Ok(Self::from_raw(raw))
    }

    fn from_raw(raw: RawConfig) -> Self {
        let RawConfig {
            roster_api_base_url,
            roster_locale,
        } = raw;

        let api_base_url = match roster_api_base_url {
            Some(url) if !url.trim().is_empty() => {
                info!("Using provided ROSTER_API_BASE_URL: {url}");
                url
            }
            _ => DEFAULT_API_BASE_URL.to_owned(),
        };

        let locale = match roster_locale.as_deref().map(str::parse::<Locale>) {
            Some(Ok(locale)) => locale,
            Some(Err(err)) => {
                warn!("{err}, falling back to the default locale");
                Locale::default()
            }
            None => Locale::default(),
        };

        Self {
            api_base_url,
            locale,
        }
    }
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_BASE_URL.to_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_env::from_iter;

    #[test]
    fn test_default_config() {
        let config = BusinessConfig::default();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.locale, Locale::En);
        assert_eq!(
            config.users_url(),
            Ustr::from("https://jsonplaceholder.typicode.com/users")
        );
    }

    #[test]
    fn test_users_url_tolerates_trailing_slash() {
        let config = BusinessConfig::new("http://127.0.0.1:8080/".to_owned());
        assert_eq!(config.users_url(), Ustr::from("http://127.0.0.1:8080/users"));
    }

    #[test]
    fn test_from_env_vars() {
        let raw: RawConfig = from_iter(vec![
            ("ROSTER_API_BASE_URL", "http://localhost:3000"),
            ("ROSTER_LOCALE", "es"),
        ])
        .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw);
        assert_eq!(config.api_base_url, "http://localhost:3000");
        assert_eq!(config.locale, Locale::Es);
    }

    #[test]
    fn test_from_env_falls_back_to_defaults() {
        let raw: RawConfig = from_iter(vec![("ROSTER_LOCALE", "klingon")])
            .expect("RawConfig should deserialize");

        let config = BusinessConfig::from_raw(raw);
        assert_eq!(config, BusinessConfig::default());
    }
}
