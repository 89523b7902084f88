use crate::{
    app_lib::ApiClient,
    features::profile::{
        client,
        types::{PasswordForm, Profile},
    },
    store::{Action, Alert, Dispatch},
};
use secrecy::SecretString;
use tracing::{debug, instrument, warn};

pub const UPDATE_FAILED_MESSAGE: &str = "Unable to update profile, please try again";
pub const PASSWORD_UPDATED_MESSAGE: &str = "Your password has been updated";
pub const PASSWORD_FAILED_MESSAGE: &str = "Unable to update password, please try again";

/// Loads the profile of the session owner.
///
/// Dispatches `ProfileRequested`, then `ProfileLoaded` or `ProfileFailed`.
#[instrument(skip_all)]
pub async fn get_profile<D: Dispatch + ?Sized>(api: &ApiClient, dispatch: &D, token: &SecretString) {
    dispatch.dispatch(Action::ProfileRequested);

    match client::fetch_profile(api, token).await {
        Ok(profile) => {
            debug!(addresses = profile.addresses.len(), "profile loaded");
            dispatch.dispatch(Action::ProfileLoaded(profile));
        }
        Err(err) => {
            warn!(error = %err, "profile fetch failed");
            dispatch.dispatch(Action::ProfileFailed(err));
        }
    }
}

/// Replaces the whole profile.
///
/// On success the stored profile (or `profile` itself when the server sends
/// no body) becomes the loaded state. On failure an error alert is shown and
/// the previous state is kept. Returns whether the update was stored.
#[instrument(skip_all)]
pub async fn update_profile<D: Dispatch + ?Sized>(
    api: &ApiClient,
    dispatch: &D,
    token: &SecretString,
    profile: Profile,
) -> bool {
    match client::update_profile(api, token, &profile).await {
        Ok(stored) => {
            dispatch.dispatch(Action::ProfileLoaded(stored.unwrap_or(profile)));
            true
        }
        Err(err) => {
            warn!(error = %err, "profile update failed");
            dispatch.dispatch(Action::DisplayAlert(Alert::error(UPDATE_FAILED_MESSAGE)));
            false
        }
    }
}

/// Validates `form` and sets the new password.
///
/// Validation failures show their own message; request failures show a
/// generic one. Returns whether the password was changed.
#[instrument(skip_all)]
pub async fn update_password<D: Dispatch + ?Sized>(
    api: &ApiClient,
    dispatch: &D,
    token: &SecretString,
    form: &PasswordForm,
) -> bool {
    if let Err(err) = form.validate() {
        dispatch.dispatch(Action::DisplayAlert(Alert::error(err.to_string())));
        return false;
    }

    match client::update_password(api, token, &form.password).await {
        Ok(()) => {
            dispatch.dispatch(Action::DisplayAlert(Alert::success(PASSWORD_UPDATED_MESSAGE)));
            true
        }
        Err(err) => {
            warn!(error = %err, "password update failed");
            dispatch.dispatch(Action::DisplayAlert(Alert::error(PASSWORD_FAILED_MESSAGE)));
            false
        }
    }
}
