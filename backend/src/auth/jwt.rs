//! Token issuing and verification.
//!
//! Identity travels as a compact HS256 JWT carrying the user's id and
//! username. Verification is stateless: there is no revocation list and
//! no persisted session, so a token stays valid until its `exp` passes.

use anyhow::{Context, Result};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use uuid::Uuid;

/// Claim set carried by every token
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Username at issue time
    pub username: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiry (Unix timestamp)
    pub exp: i64,
}

/// Issues and verifies signed tokens.
///
/// Deriving the HMAC keys from the secret is not free, so both keys are
/// built once at startup and shared behind `Arc`s; cloning the service
/// is two reference-count bumps.
#[derive(Clone)]
pub struct JwtService {
    encoding: Arc<EncodingKey>,
    decoding: Arc<DecodingKey>,
    ttl_secs: i64,
}

impl JwtService {
    /// Derive the keys from the shared secret; call once at startup.
    pub fn new(secret: &str, ttl_secs: i64) -> Self {
        Self {
            encoding: Arc::new(EncodingKey::from_secret(secret.as_bytes())),
            decoding: Arc::new(DecodingKey::from_secret(secret.as_bytes())),
            ttl_secs,
        }
    }

    /// Sign a token for the given user.
    pub fn issue(&self, user_id: Uuid, username: &str) -> Result<String> {
        let now = Utc::now();
        let claims = Claims {
            sub: user_id.to_string(),
            username: username.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::seconds(self.ttl_secs)).timestamp(),
        };

        encode(&Header::default(), &claims, &self.encoding).context("failed to sign token")
    }

    /// Check a token's signature and expiry and return its claims.
    pub fn verify(&self, token: &str) -> Result<Claims> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .context("token rejected")?;

        Ok(data.claims)
    }
}
