//! Dismissible alert banner for the current alert.

use crate::store::{Action, AlertState, Dispatch};
use std::fmt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AlertView {
    pub class: &'static str,
    pub heading: String,
    pub message: String,
}

impl fmt::Display for AlertView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.class, self.heading, self.message)
    }
}

pub struct AlertBanner;

impl AlertBanner {
    #[must_use]
    pub fn render(state: &AlertState) -> Option<AlertView> {
        state.current().map(|alert| AlertView {
            class: alert.kind.class(),
            heading: alert.heading.clone(),
            message: alert.message.clone(),
        })
    }

    pub fn dismiss<D: Dispatch + ?Sized>(dispatch: &D) {
        dispatch.dispatch(Action::DismissAlert);
    }
}
