//! Access-token verification.
//!
//! The auth provider issues HS256-signed JWTs with the project JWT secret.
//! This service never mints tokens for real users; it only verifies them and
//! forwards them to the platform. [`generate_access_token`] exists for local
//! tooling and tests.

use avolve_core::types::UserId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Audience the auth provider stamps on signed-in users' tokens.
const DEFAULT_AUDIENCE: &str = "authenticated";

/// Claims carried in an access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the user's UUID.
    pub sub: UserId,
    /// The user's email address, when the account has one.
    #[serde(default)]
    pub email: Option<String>,
    /// Database role the platform evaluates policies as.
    #[serde(default = "default_role")]
    pub role: String,
    pub aud: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
}

fn default_role() -> String {
    DEFAULT_AUDIENCE.to_string()
}

/// Configuration for access-token verification.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret shared with the auth provider.
    pub secret: String,
    /// Required `aud` claim.
    pub audience: String,
}

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var               | Required | Default         |
    /// |-----------------------|----------|-----------------|
    /// | `PLATFORM_JWT_SECRET` | **yes**  | --              |
    /// | `JWT_AUDIENCE`        | no       | `authenticated` |
    ///
    /// # Panics
    ///
    /// Panics if `PLATFORM_JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret = std::env::var("PLATFORM_JWT_SECRET")
            .expect("PLATFORM_JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "PLATFORM_JWT_SECRET must not be empty");

        let audience =
            std::env::var("JWT_AUDIENCE").unwrap_or_else(|_| DEFAULT_AUDIENCE.to_string());

        Self { secret, audience }
    }
}

/// Sign an access token the way the auth provider does.
pub fn generate_access_token(
    user_id: UserId,
    email: Option<&str>,
    config: &JwtConfig,
    ttl_secs: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        email: email.map(str::to_string),
        role: default_role(),
        aud: config.audience.clone(),
        exp: now + ttl_secs,
        iat: now,
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature, expiration and audience.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[config.audience.as_str()]);

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &validation,
    )?;
    Ok(token_data.claims)
}
