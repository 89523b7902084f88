use crate::{
    app_lib::{ApiClient, AppError},
    features::auth::{client, types::Session},
    store::{Action, Alert, Dispatch, Route},
};
use secrecy::SecretString;
use tracing::{info, instrument, warn};

pub const LOGIN_FAILED_MESSAGE: &str = "Unable to log in, please try again";
pub const SIGNUP_FAILED_MESSAGE: &str = "Unable to create account, please try again later";

/// Logs out locally; no request is made.
#[must_use]
pub const fn log_out_user() -> Action {
    Action::UserLogout
}

#[must_use]
pub fn save_user(session: Session) -> Action {
    Action::SaveUser(session)
}

/// Logs in with `email` and `password`.
///
/// Dispatches `SaveUser` then `Navigate(Profile)` on success, or exactly one
/// error alert on any failure.
#[instrument(skip(api, dispatch, password))]
pub async fn authenticate_user<D: Dispatch + ?Sized>(
    api: &ApiClient,
    dispatch: &D,
    email: &str,
    password: &SecretString,
) {
    let result = client::login(api, email, password).await;
    complete(dispatch, result, LOGIN_FAILED_MESSAGE);
}

/// Creates an account, then behaves like [`authenticate_user`].
#[instrument(skip(api, dispatch, password))]
pub async fn sign_up_user<D: Dispatch + ?Sized>(
    api: &ApiClient,
    dispatch: &D,
    email: &str,
    password: &SecretString,
) {
    let result = client::signup(api, email, password).await;
    complete(dispatch, result, SIGNUP_FAILED_MESSAGE);
}

fn complete<D: Dispatch + ?Sized>(
    dispatch: &D,
    result: Result<Session, AppError>,
    failure_message: &str,
) {
    match result {
        Ok(session) => {
            info!(email = %session.email, "session established");
            dispatch.dispatch(save_user(session));
            dispatch.dispatch(Action::Navigate(Route::Profile));
        }
        Err(err) => {
            // Detail stays in local logs; the user only sees the generic message.
            warn!(error = %err, "authentication request failed");
            dispatch.dispatch(Action::DisplayAlert(Alert::error(failure_message)));
        }
    }
}
