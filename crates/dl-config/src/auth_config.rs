use crate::{ConfigError, ConfigErrorResult, DEFAULT_TOKEN_TTL_HOURS, MIN_JWT_SECRET_BYTES};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// HS256 signing secret for session tokens. Required.
    pub jwt_secret: Option<String>,
    /// Fixed expiry horizon for issued tokens.
    pub token_ttl_hours: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_hours: DEFAULT_TOKEN_TTL_HOURS,
        }
    }
}

impl AuthConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        match self.jwt_secret {
            None => Err(ConfigError::config(
                "auth.jwt_secret is required (config.toml or DEVLINK_JWT_SECRET)",
            )),
            Some(ref secret) if secret.len() < MIN_JWT_SECRET_BYTES => Err(ConfigError::config(
                format!("auth.jwt_secret must be at least {MIN_JWT_SECRET_BYTES} bytes"),
            )),
            Some(_) => Ok(()),
        }?;

        if self.token_ttl_hours == 0 {
            return Err(ConfigError::config("auth.token_ttl_hours must be positive"));
        }

        Ok(())
    }
}
