//! API credentials and site resolution.

use crate::error::{ClientError, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "DD_API_KEY";

/// Environment variable holding the application key.
pub const APP_KEY_VAR: &str = "DD_APP_KEY";

/// Environment variable holding the site domain.
pub const SITE_VAR: &str = "DD_SITE";

/// Default site when none is configured.
pub const DEFAULT_SITE: &str = "datadoghq.com";

/// Datadog API credentials plus the site they authenticate against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    api_key: String,
    app_key: String,
    site: String,
}

impl Credentials {
    /// Creates credentials from explicit values.
    #[must_use]
    pub fn new(
        api_key: impl Into<String>,
        app_key: impl Into<String>,
        site: impl Into<String>,
    ) -> Self {
        Self {
            api_key: api_key.into(),
            app_key: app_key.into(),
            site: site.into(),
        }
    }

    /// Resolves credentials from optional values, failing fast on a
    /// missing key. The site falls back to [`DEFAULT_SITE`].
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` naming the absent
    /// variable.
    pub fn resolve(
        api_key: Option<String>,
        app_key: Option<String>,
        site: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ClientError::MissingCredentials {
                reason: format!("{API_KEY_VAR} is not set"),
            }
        })?;
        let app_key = app_key.filter(|k| !k.is_empty()).ok_or_else(|| {
            ClientError::MissingCredentials {
                reason: format!("{APP_KEY_VAR} is not set"),
            }
        })?;
        let site = site
            .filter(|s| !s.is_empty())
            .unwrap_or_else(|| DEFAULT_SITE.to_string());
        Ok(Self {
            api_key,
            app_key,
            site,
        })
    }

    /// Resolves credentials from the environment
    /// (`DD_API_KEY` / `DD_APP_KEY` / `DD_SITE`).
    ///
    /// # Errors
    ///
    /// Returns `ClientError::MissingCredentials` if a key variable is
    /// absent.
    pub fn from_env() -> Result<Self> {
        Self::resolve(
            std::env::var(API_KEY_VAR).ok(),
            std::env::var(APP_KEY_VAR).ok(),
            std::env::var(SITE_VAR).ok(),
        )
    }

    /// Returns the API key.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Returns the application key.
    #[must_use]
    pub fn app_key(&self) -> &str {
        &self.app_key
    }

    /// Returns the site domain.
    #[must_use]
    pub fn site(&self) -> &str {
        &self.site
    }

    /// Returns the API base URL for this site.
    #[must_use]
    pub fn base_url(&self) -> String {
        format!("https://api.{}/api", self.site)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_credentials() {
        let creds = Credentials::new("api", "app", "datadoghq.com");
        assert_eq!(creds.api_key(), "api");
        assert_eq!(creds.app_key(), "app");
        assert_eq!(creds.site(), "datadoghq.com");
    }

    #[test]
    fn resolve_defaults_the_site() {
        let creds =
            Credentials::resolve(Some("api".into()), Some("app".into()), None).unwrap();
        assert_eq!(creds.site(), "datadoghq.com");
    }

    #[test]
    fn resolve_missing_api_key_fails() {
        let result = Credentials::resolve(None, Some("app".into()), None);
        match result {
            Err(ClientError::MissingCredentials { reason }) => {
                assert!(reason.contains("DD_API_KEY"));
            }
            _ => panic!("expected MissingCredentials error"),
        }
    }

    #[test]
    fn resolve_missing_app_key_fails() {
        let result = Credentials::resolve(Some("api".into()), None, None);
        match result {
            Err(ClientError::MissingCredentials { reason }) => {
                assert!(reason.contains("DD_APP_KEY"));
            }
            _ => panic!("expected MissingCredentials error"),
        }
    }

    #[test]
    fn empty_key_counts_as_missing() {
        let result = Credentials::resolve(Some(String::new()), Some("app".into()), None);
        assert!(result.is_err());
    }

    #[test]
    fn base_url_follows_the_site() {
        let us = Credentials::new("api", "app", "datadoghq.com");
        assert_eq!(us.base_url(), "https://api.datadoghq.com/api");

        let eu = Credentials::new("api", "app", "datadoghq.eu");
        assert_eq!(eu.base_url(), "https://api.datadoghq.eu/api");
    }
}
