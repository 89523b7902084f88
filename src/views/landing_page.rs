//! Landing page. Redirects already authenticated users to their profile.

use crate::store::{Action, AppState, Dispatch, Route};
use std::fmt;

pub const HEADLINE: &str =
    "Sign up for our alert service and never miss another emergency notification.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LandingView {
    pub headline: &'static str,
}

impl fmt::Display for LandingView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.headline)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LandingPage {
    is_logged_in: bool,
}

impl LandingPage {
    /// Binds the page to the store state it reads.
    #[must_use]
    pub fn connect(state: &AppState) -> Self {
        Self {
            is_logged_in: state.auth.is_logged_in(),
        }
    }

    /// Runs once when the page is shown.
    pub fn mount<D: Dispatch + ?Sized>(&self, dispatch: &D) {
        if self.is_logged_in {
            dispatch.dispatch(Action::Navigate(Route::Profile));
        }
    }

    #[must_use]
    pub const fn render(&self) -> LandingView {
        LandingView { headline: HEADLINE }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{features::auth::types::Session, store::Store};
    use secrecy::SecretString;

    #[test]
    fn mount_redirects_when_logged_in() {
        let store = Store::new();
        store.dispatch(Action::SaveUser(Session::new(
            "ana@example.gov",
            SecretString::from("tok".to_string()),
        )));

        let page = store.read(LandingPage::connect);
        page.mount(&store);

        let state = store.snapshot();
        assert_eq!(state.router.location(), Route::Profile);
        assert_eq!(state.router.history(), &[Route::Landing]);
    }

    #[test]
    fn mount_stays_when_logged_out() {
        let store = Store::new();
        let page = store.read(LandingPage::connect);
        page.mount(&store);

        let state = store.snapshot();
        assert_eq!(state.router.location(), Route::Landing);
        assert!(state.router.history().is_empty());
        assert_eq!(page.render().headline, HEADLINE);
    }

    #[test]
    fn mount_uses_state_at_connect_time() {
        let store = Store::new();
        let page = store.read(LandingPage::connect);
        store.dispatch(Action::SaveUser(Session::new(
            "ana@example.gov",
            SecretString::from("tok".to_string()),
        )));

        page.mount(&store);
        assert_eq!(store.snapshot().router.location(), Route::Landing);
    }
}
