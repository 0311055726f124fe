//! Environment-sourced application configuration.

use crate::errors::{AppError, AppResult};

/// Name of the variable holding the database endpoint URL.
pub const DATABASE_URL_VAR: &str = "DATABASE_URL";

/// Name of the variable holding the database auth token.
pub const AUTH_TOKEN_VAR: &str = "DATABASE_AUTH_TOKEN";

/// Connection credentials for the remote database.
///
/// Both values are required and carried verbatim to the client; no shape
/// validation happens before use. A bad URL or token surfaces later as a
/// connection failure.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Database endpoint URL.
    pub database_url: String,
    /// Bearer auth token for the endpoint.
    pub auth_token: String,
}

impl AppConfig {
    /// Loads the configuration from the process environment.
    ///
    /// # Errors
    /// Returns `AppError::Config` naming the first missing variable.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let database_url = lookup(DATABASE_URL_VAR)
            .ok_or_else(|| AppError::Config(format!("{} is not set", DATABASE_URL_VAR)))?;
        let auth_token = lookup(AUTH_TOKEN_VAR)
            .ok_or_else(|| AppError::Config(format!("{} is not set", AUTH_TOKEN_VAR)))?;

        Ok(Self {
            database_url,
            auth_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn loads_when_both_variables_present() {
        let vars = env(&[
            (DATABASE_URL_VAR, "libsql://example.turso.io"),
            (AUTH_TOKEN_VAR, "tok"),
        ]);
        let config = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap();
        assert_eq!(config.database_url, "libsql://example.turso.io");
        assert_eq!(config.auth_token, "tok");
    }

    #[test]
    fn missing_url_is_a_config_error() {
        let vars = env(&[(AUTH_TOKEN_VAR, "tok")]);
        let err = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(DATABASE_URL_VAR));
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let vars = env(&[(DATABASE_URL_VAR, "libsql://example.turso.io")]);
        let err = AppConfig::from_lookup(|k| vars.get(k).cloned()).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
        assert!(err.to_string().contains(AUTH_TOKEN_VAR));
    }
}
