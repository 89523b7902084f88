//! Client wrappers for the profile endpoints. All calls are keyed by the
//! session token.

use crate::{
    app_lib::{ApiClient, AppError},
    features::profile::types::{PasswordUpdateRequest, Profile},
};
use secrecy::{ExposeSecret, SecretString};

pub const PROFILE_PATH: &str = "/api/profile";
pub const PASSWORD_PATH: &str = "/api/password";

/// Fetches the profile of the session owner.
///
/// # Errors
/// Returns an `AppError` for transport failures, non-2xx statuses, and
/// undecodable bodies.
pub async fn fetch_profile(api: &ApiClient, token: &SecretString) -> Result<Profile, AppError> {
    api.get_json_with_token(PROFILE_PATH, token).await
}

/// Replaces the whole profile. Returns the stored profile when the server
/// echoes it back.
///
/// # Errors
/// Returns an `AppError` for transport failures, non-2xx statuses, and
/// undecodable bodies.
pub async fn update_profile(
    api: &ApiClient,
    token: &SecretString,
    profile: &Profile,
) -> Result<Option<Profile>, AppError> {
    api.put_json_with_token(PROFILE_PATH, token, profile).await
}

/// Sets a new password for the session owner.
///
/// # Errors
/// Returns an `AppError` for transport failures and non-2xx statuses.
pub async fn update_password(
    api: &ApiClient,
    token: &SecretString,
    password: &SecretString,
) -> Result<(), AppError> {
    let request = PasswordUpdateRequest {
        password: password.expose_secret(),
    };
    api.put_json_with_token_empty(PASSWORD_PATH, token, &request)
        .await
}
