//! `router` slice: client-side location and navigation history.

use crate::store::Action;
use std::fmt;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Route {
    #[default]
    Landing,
    Profile,
    Admin,
    AdminNotifications,
}

impl Route {
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Landing => "/",
            Self::Profile => "/profile",
            Self::Admin => "/admin",
            Self::AdminNotifications => "/admin/notifications",
        }
    }

    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path.trim_end_matches('/') {
            "" => Some(Self::Landing),
            "/profile" => Some(Self::Profile),
            "/admin" => Some(Self::Admin),
            "/admin/notifications" => Some(Self::AdminNotifications),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Number of previous routes kept in the router history.
pub const HISTORY_LIMIT: usize = 32;

#[derive(Clone, Debug, Default)]
pub struct RouterState {
    location: Route,
    history: Vec<Route>,
}

impl RouterState {
    #[must_use]
    pub const fn location(&self) -> Route {
        self.location
    }

    /// Previously visited routes, oldest first, at most `HISTORY_LIMIT`.
    #[must_use]
    pub fn history(&self) -> &[Route] {
        &self.history
    }

    pub(crate) fn reduce(&mut self, action: &Action) {
        if let Action::Navigate(route) = action {
            if self.history.len() == HISTORY_LIMIT {
                self.history.remove(0);
            }
            self.history.push(self.location);
            self.location = *route;
        }
    }
}
