use crate::server::error::{config::ConfigError, AppError};

/// Minimum accepted length of the session signing secret, in bytes.
pub const MIN_SECRET_LEN: usize = 32;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

pub struct Config {
    pub database_url: String,

    /// HS256 key used to sign and verify session tokens.
    pub jwt_secret: String,
    /// Adds the `Secure` attribute to the session cookie.
    pub secure_cookies: bool,

    pub bind_addr: String,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// `JWT_SECRET` takes precedence over `SESSION_SECRET`. There is no built-in
    /// fallback secret: startup fails when neither is set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let jwt_secret = lookup("JWT_SECRET")
            .or_else(|| lookup("SESSION_SECRET"))
            .ok_or_else(|| ConfigError::MissingEnvVar("JWT_SECRET".to_string()))?;
        if jwt_secret.len() < MIN_SECRET_LEN {
            return Err(ConfigError::InvalidEnvVar {
                name: "JWT_SECRET".to_string(),
                reason: format!("must be at least {} bytes", MIN_SECRET_LEN),
            }
            .into());
        }

        let secure_cookies = lookup("APP_ENV").is_some_and(|env| env == "production");
        let bind_addr = lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());

        Ok(Self {
            database_url,
            jwt_secret,
            secure_cookies,
            bind_addr,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| vars.get(name).cloned()
    }

    const SECRET: &str = "0123456789abcdef0123456789abcdef";

    #[test]
    fn reads_required_and_default_values() {
        let config =
            Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:"), ("JWT_SECRET", SECRET)]))
                .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.jwt_secret, SECRET);
        assert!(!config.secure_cookies);
        assert_eq!(config.bind_addr, "0.0.0.0:3000");
    }

    #[test]
    fn falls_back_to_session_secret() {
        let config = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("SESSION_SECRET", SECRET),
            ("APP_ENV", "production"),
        ]))
        .unwrap();

        assert_eq!(config.jwt_secret, SECRET);
        assert!(config.secure_cookies);
    }

    #[test]
    fn fails_without_secret() {
        let result = Config::from_lookup(lookup(&[("DATABASE_URL", "sqlite::memory:")]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::MissingEnvVar(_)))
        ));
    }

    #[test]
    fn rejects_short_secret() {
        let result = Config::from_lookup(lookup(&[
            ("DATABASE_URL", "sqlite::memory:"),
            ("JWT_SECRET", "short"),
        ]));

        assert!(matches!(
            result,
            Err(AppError::ConfigErr(ConfigError::InvalidEnvVar { .. }))
        ));
    }
}
