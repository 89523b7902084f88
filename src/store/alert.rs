//! `alert` slice: the dismissible banner shown after a failed or notable action.

use crate::store::Action;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl AlertKind {
    #[must_use]
    pub const fn class(self) -> &'static str {
        match self {
            Self::Error => "usa-alert-error",
            Self::Success => "usa-alert-success",
            Self::Info => "usa-alert-info",
        }
    }
}

/// User-facing alert. Messages must be safe to render and never include
/// tokens or passwords.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Alert {
    pub kind: AlertKind,
    pub heading: String,
    pub message: String,
}

impl Alert {
    #[must_use]
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Error,
            heading: "Error".to_string(),
            message: message.into(),
        }
    }

    #[must_use]
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: AlertKind::Success,
            heading: "Success".to_string(),
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AlertState {
    current: Option<Alert>,
}

impl AlertState {
    #[must_use]
    pub fn current(&self) -> Option<&Alert> {
        self.current.as_ref()
    }

    pub(crate) fn reduce(&mut self, action: &Action) {
        match action {
            Action::DisplayAlert(alert) => self.current = Some(alert.clone()),
            Action::DismissAlert => self.current = None,
            _ => {}
        }
    }
}
