//! Application store: typed slices, the [`Action`] enum, and the [`Dispatch`]
//! seam action creators write through.
//!
//! `Store::dispatch` applies one action at a time under the channel lock, so
//! reducers never observe a half-applied state. Views subscribe to snapshots
//! through a `tokio::sync::watch` receiver.

mod action;
pub mod alert;
pub mod auth;
pub mod profile;
pub mod router;

pub use action::Action;
pub use alert::{Alert, AlertKind, AlertState};
pub use auth::AuthState;
pub use profile::ProfileState;
pub use router::{Route, RouterState};

use tokio::sync::watch;
use tracing::debug;

/// Accepts actions produced by action creators.
pub trait Dispatch {
    fn dispatch(&self, action: Action);
}

impl<D: Dispatch + ?Sized> Dispatch for &D {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

impl<D: Dispatch + ?Sized> Dispatch for std::sync::Arc<D> {
    fn dispatch(&self, action: Action) {
        (**self).dispatch(action);
    }
}

/// Whole application state, one field per slice.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub auth: AuthState,
    pub profile: ProfileState,
    pub alert: AlertState,
    pub router: RouterState,
}

impl AppState {
    /// Applies `action` to every slice.
    pub fn reduce(&mut self, action: &Action) {
        self.auth.reduce(action);
        self.profile.reduce(action);
        self.alert.reduce(action);
        self.router.reduce(action);
    }
}

/// Single shared store.
#[derive(Debug)]
pub struct Store {
    state: watch::Sender<AppState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    #[must_use]
    pub fn new() -> Self {
        Self::with_state(AppState::default())
    }

    #[must_use]
    pub fn with_state(state: AppState) -> Self {
        let (sender, _) = watch::channel(state);
        Self { state: sender }
    }

    /// Clones the current state.
    #[must_use]
    pub fn snapshot(&self) -> AppState {
        self.state.borrow().clone()
    }

    /// Reads the current state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&AppState) -> R) -> R {
        f(&self.state.borrow())
    }

    /// Receiver notified after every dispatched action.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<AppState> {
        self.state.subscribe()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        debug!(action = action.name(), "dispatch");
        self.state.send_modify(|state| state.reduce(&action));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::auth::types::Session;
    use secrecy::SecretString;

    #[test]
    fn dispatch_updates_snapshot() {
        let store = Store::new();
        store.dispatch(Action::SaveUser(Session::new(
            "ana@example.gov",
            SecretString::from("tok".to_string()),
        )));
        store.dispatch(Action::Navigate(Route::Profile));

        let state = store.snapshot();
        assert!(state.auth.is_logged_in());
        assert_eq!(state.router.location(), Route::Profile);
    }

    #[tokio::test]
    async fn subscribers_see_changes() {
        let store = Store::new();
        let mut receiver = store.subscribe();

        store.dispatch(Action::DisplayAlert(Alert::error("boom")));

        receiver.changed().await.unwrap();
        let message = receiver
            .borrow()
            .alert
            .current()
            .map(|alert| alert.message.clone());
        assert_eq!(message.as_deref(), Some("boom"));
    }

    #[test]
    fn logout_clears_session_and_profile() {
        let store = Store::new();
        store.dispatch(Action::SaveUser(Session::new(
            "ana@example.gov",
            SecretString::from("tok".to_string()),
        )));
        store.dispatch(Action::ProfileRequested);
        store.dispatch(Action::UserLogout);

        store.read(|state| {
            assert!(!state.auth.is_logged_in());
            assert_eq!(state.profile, ProfileState::Idle);
        });
    }
}
