//! Client wrappers for the auth endpoints.

use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::types::{CredentialsRequest, Session, SessionResponse},
};
use secrecy::{ExposeSecret, SecretString};

pub const LOGIN_PATH: &str = "/api/login";
pub const SIGNUP_PATH: &str = "/api/signup";

/// Exchanges credentials for a session.
///
/// # Errors
/// Returns an `AppError` for transport failures, non-2xx statuses, and
/// undecodable bodies.
pub async fn login(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<Session, AppError> {
    post_credentials(api, LOGIN_PATH, email, password).await
}

/// Creates an account and returns its first session.
///
/// # Errors
/// Returns an `AppError` for transport failures, non-2xx statuses, and
/// undecodable bodies.
pub async fn signup(
    api: &ApiClient,
    email: &str,
    password: &SecretString,
) -> Result<Session, AppError> {
    post_credentials(api, SIGNUP_PATH, email, password).await
}

async fn post_credentials(
    api: &ApiClient,
    path: &str,
    email: &str,
    password: &SecretString,
) -> Result<Session, AppError> {
    let request = CredentialsRequest {
        email,
        password: password.expose_secret(),
    };
    let response: SessionResponse = api.post_json(path, &request).await?;
    Ok(response.into())
}
