use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use uuid::Uuid;

use crate::config::SessionConfig;

pub const SESSION_COOKIE: &str = "wanttogo_session";

// Session claims carried in the cookie
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionClaims {
    pub sub: String,           // username
    pub iat: usize,            // issued at
    pub exp: usize,            // expiration
    pub jti: String,           // JWT ID
    pub aud: String,           // audience
    pub iss: String,           // issuer
}

// Generate session token
pub fn issue_session_token(cfg: &SessionConfig, username: &str) -> Result<String, String> {
    let now = Utc::now();
    let expires_at = Duration::try_hours(cfg.ttl_hours)
        .and_then(|ttl| now.checked_add_signed(ttl))
        .ok_or_else(|| format!("Session lifetime out of range: {} hours", cfg.ttl_hours))?;

    let claims = SessionClaims {
        sub: username.to_string(),
        iat: now.timestamp() as usize,
        exp: expires_at.timestamp() as usize,
        jti: Uuid::new_v4().to_string(),
        aud: cfg.audience.clone(),
        iss: cfg.issuer.clone(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(cfg.secret.as_ref()),
    )
    .map_err(|e| format!("Failed to generate session token: {}", e))
}

// Verify session token
pub fn verify_session_token(cfg: &SessionConfig, token: &str) -> Result<SessionClaims, String> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_audience(&[cfg.audience.as_str()]);

    let mut issuers = HashSet::new();
    issuers.insert(cfg.issuer.clone());
    validation.iss = Some(issuers);

    decode::<SessionClaims>(
        token,
        &DecodingKey::from_secret(cfg.secret.as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| format!("Invalid session: {}", e))
}
