//! `auth` slice: the session of the logged-in user, if any.

use crate::{features::auth::types::Session, store::Action};
use secrecy::SecretString;

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    user: Option<Session>,
}

impl AuthState {
    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.user.as_ref().map(|session| session.email.as_str())
    }

    #[must_use]
    pub fn token(&self) -> Option<&SecretString> {
        self.user.as_ref().map(|session| &session.auth_token)
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.user.is_some()
    }

    pub(crate) fn reduce(&mut self, action: &Action) {
        match action {
            Action::SaveUser(session) => self.user = Some(session.clone()),
            Action::UserLogout => self.user = None,
            _ => {}
        }
    }
}
