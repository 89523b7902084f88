//! Operator links to the alert pages, hidden unless a user is logged in.

use crate::store::{Action, Dispatch, Route};
use std::fmt;

pub const HIDDEN_CLASS: &str = "hide";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MenuLink {
    pub label: &'static str,
    pub route: Route,
}

impl MenuLink {
    /// Closes the surrounding menu, then navigates to the link target.
    pub fn follow<D: Dispatch + ?Sized>(&self, dispatch: &D, close_menu: impl FnOnce()) {
        close_menu();
        dispatch.dispatch(Action::Navigate(self.route));
    }
}

const LINKS: [MenuLink; 2] = [
    MenuLink {
        label: "Send Alert",
        route: Route::Admin,
    },
    MenuLink {
        label: "Alert Monitoring",
        route: Route::AdminNotifications,
    },
];

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminMenuView {
    pub class: Option<&'static str>,
    pub links: Vec<MenuLink>,
}

impl AdminMenuView {
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.class == Some(HIDDEN_CLASS)
    }
}

pub struct AdminMenu;

impl AdminMenu {
    #[must_use]
    pub fn render(logged_in: bool) -> AdminMenuView {
        AdminMenuView {
            class: (!logged_in).then_some(HIDDEN_CLASS),
            links: LINKS.to_vec(),
        }
    }
}

impl fmt::Display for AdminMenuView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_hidden() {
            return Ok(());
        }
        for link in &self.links {
            writeln!(f, "  {:<18} {}", link.label, link.route)?;
        }
        Ok(())
    }
}
