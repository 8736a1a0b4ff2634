use std::env;

use crate::error::SentimentError;

/// Environment variable holding the Onclusive API token.
pub const TOKEN_ENV_VAR: &str = "ALTHUB_API_TOKEN";

/// Source of the token sent in the `Authorization` header.
///
/// Injected into [`SentimentClient`](crate::SentimentClient) so callers can
/// plug in an environment lookup, a session store, or a fixed string in tests.
pub trait CredentialProvider: Send + Sync {
    fn token(&self) -> Result<String, SentimentError>;
}

/// Reads the token from `ALTHUB_API_TOKEN`, loading a local `.env` first.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials;

impl EnvCredentials {
    pub fn new() -> Self {
        Self
    }
}

impl CredentialProvider for EnvCredentials {
    fn token(&self) -> Result<String, SentimentError> {
        // Loaded here rather than at construction so every way of building
        // the provider behaves the same. Idempotent; a missing .env file is
        // fine, the variable may be set directly.
        dotenvy::dotenv().ok();
        match env::var(TOKEN_ENV_VAR) {
            Ok(token) if !token.is_empty() => Ok(token),
            _ => Err(SentimentError::Auth(format!(
                "{} must be set",
                TOKEN_ENV_VAR
            ))),
        }
    }
}

/// Fixed token, for tests and callers that manage credentials themselves.
#[derive(Debug, Clone)]
pub struct StaticCredentials(pub String);

impl CredentialProvider for StaticCredentials {
    fn token(&self) -> Result<String, SentimentError> {
        Ok(self.0.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_credentials_return_the_given_token() {
        let provider = StaticCredentials("secret".to_string());
        assert_eq!(provider.token().unwrap(), "secret");
    }

    #[test]
    fn env_credentials_require_the_variable() {
        // Defaulted construction must behave exactly like `new()`.
        env::remove_var(TOKEN_ENV_VAR);
        let defaulted = EnvCredentials::default();
        assert!(matches!(defaulted.token(), Err(SentimentError::Auth(_))));
        assert!(matches!(
            EnvCredentials::new().token(),
            Err(SentimentError::Auth(_))
        ));

        env::set_var(TOKEN_ENV_VAR, "from-env");
        assert_eq!(defaulted.token().unwrap(), "from-env");
        assert_eq!(EnvCredentials::new().token().unwrap(), "from-env");
        env::remove_var(TOKEN_ENV_VAR);
    }
}
