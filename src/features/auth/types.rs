//! Request and response types for auth API calls. Credentials and tokens in
//! these payloads must never be logged.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
pub struct CredentialsRequest<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// Session body returned by login and signup.
#[derive(Deserialize)]
pub struct SessionResponse {
    pub email: String,
    #[serde(rename = "authToken", alias = "access_token")]
    pub auth_token: String,
}

/// Authenticated user's identity and token pair. `Debug` redacts the token.
#[derive(Clone, Debug)]
pub struct Session {
    pub email: String,
    pub auth_token: SecretString,
}

impl Session {
    #[must_use]
    pub fn new(email: impl Into<String>, auth_token: SecretString) -> Self {
        Self {
            email: email.into(),
            auth_token,
        }
    }
}

impl From<SessionResponse> for Session {
    fn from(response: SessionResponse) -> Self {
        Self {
            email: response.email,
            auth_token: SecretString::from(response.auth_token),
        }
    }
}
