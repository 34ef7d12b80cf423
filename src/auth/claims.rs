use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Payload of the signed `session_token` cookie.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SessionClaims {
    pub sub: String,  // account email
    pub role: String, // drives the navigation permission map
    pub jti: Uuid,    // random per login
    pub iat: usize,
    pub exp: usize,
    pub iss: String,
    pub aud: String,
}
