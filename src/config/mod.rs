// Configuration module
//
// Loaded by the embedding application. Core types never read files or the
// environment themselves; `${VAR}` substitution happens here only.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::auth::{HeaderValue, HmacAuthHandler, HmacKeys};
use crate::constants::DEFAULT_AUTH_SERVICE;
use crate::error::MediaError;
use crate::image::TransformBuilder;
use crate::logging::LoggingConfig;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credentials: Option<CredentialsConfig>,

    /// Service name in the Authorization header (default: WIX)
    #[serde(default = "default_auth_service")]
    pub auth_service: String,

    #[serde(default)]
    pub images: ImageDefaults,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CredentialsConfig {
    pub access_key: String,
    pub secret_key: String,
}

impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("access_key", &self.access_key)
            .field("secret_key", &"<redacted>")
            .finish()
    }
}

/// Defaults applied to every builder created from this config
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ImageDefaults {
    /// Quality for commands that don't specify one (omitted when unset)
    #[serde(default)]
    pub default_quality: Option<u8>,

    /// Reject unknown adjustment/filter names in `checked_rest_url`
    #[serde(default)]
    pub strict_names: bool,
}

fn default_auth_service() -> String {
    DEFAULT_AUTH_SERVICE.to_string()
}

impl Default for MediaConfig {
    fn default() -> Self {
        Self {
            credentials: None,
            auth_service: default_auth_service(),
            images: ImageDefaults::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl MediaConfig {
    pub fn from_yaml_with_env(yaml: &str) -> Result<Self, MediaError> {
        // Replace ${VAR_NAME} with environment variable values
        let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}")
            .map_err(|e| MediaError::config(e.to_string()))?;

        // First, check that all referenced environment variables exist
        for caps in re.captures_iter(yaml) {
            let var_name = &caps[1];
            std::env::var(var_name).map_err(|_| {
                MediaError::config(format!(
                    "Environment variable '{}' is referenced but not set",
                    var_name
                ))
            })?;
        }

        let substituted = re.replace_all(yaml, |caps: &regex::Captures| {
            std::env::var(&caps[1]).unwrap_or_default()
        });

        let config: MediaConfig =
            serde_yaml::from_str(&substituted).map_err(|e| MediaError::config(e.to_string()))?;
        config.validate()?;

        tracing::debug!(
            has_credentials = config.credentials.is_some(),
            auth_service = %config.auth_service,
            "Media configuration loaded"
        );
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MediaError> {
        let yaml = std::fs::read_to_string(path)
            .map_err(|e| MediaError::config(format!("Failed to read config file: {}", e)))?;
        Self::from_yaml_with_env(&yaml)
    }

    pub fn validate(&self) -> Result<(), MediaError> {
        if self.auth_service.trim().is_empty() {
            return Err(MediaError::config("auth_service cannot be empty"));
        }

        if let Some(quality) = self.images.default_quality {
            if !(1..=100).contains(&quality) {
                return Err(MediaError::config(format!(
                    "images.default_quality {} must be 1-100",
                    quality
                )));
            }
        }

        if let Some(creds) = &self.credentials {
            if creds.access_key.is_empty() {
                return Err(MediaError::config("credentials.access_key cannot be empty"));
            }
            if creds.secret_key.is_empty() {
                return Err(MediaError::config("credentials.secret_key cannot be empty"));
            }
        }

        Ok(())
    }

    /// New builder for `file_uri` carrying the configured image defaults
    pub fn image(&self, file_uri: impl Into<String>) -> TransformBuilder {
        TransformBuilder::new(file_uri)
            .default_quality(self.images.default_quality)
            .strict_names(self.images.strict_names)
    }

    pub fn auth_handler(&self) -> Result<HmacAuthHandler, MediaError> {
        let keys = HmacKeys::from_parts(
            self.credentials.as_ref().map(|c| c.access_key.clone()),
            self.credentials
                .as_ref()
                .map(|c| c.secret_key.clone().into_bytes()),
        )?;
        Ok(HmacAuthHandler::from_keys(keys))
    }

    /// Authorization header value using the configured credentials and service
    pub fn authorization_header<I, K, V>(
        &self,
        method: &str,
        path: &str,
        headers: I,
    ) -> Result<String, MediaError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: HeaderValue,
    {
        let handler = self.auth_handler()?;
        Ok(handler.create_authorization_header(method, path, headers, Some(&self.auth_service)))
    }
}
