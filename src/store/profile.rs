//! `profile` slice with an explicit loading state.

use crate::{app_lib::AppError, features::profile::types::Profile, store::Action};

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ProfileState {
    #[default]
    Idle,
    Loading,
    Loaded(Profile),
    Failed(AppError),
}

impl ProfileState {
    #[must_use]
    pub const fn profile(&self) -> Option<&Profile> {
        match self {
            Self::Loaded(profile) => Some(profile),
            _ => None,
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub(crate) fn reduce(&mut self, action: &Action) {
        match action {
            Action::ProfileRequested => *self = Self::Loading,
            Action::ProfileLoaded(profile) => *self = Self::Loaded(profile.clone()),
            Action::ProfileFailed(err) => *self = Self::Failed(err.clone()),
            Action::UserLogout => *self = Self::Idle,
            _ => {}
        }
    }
}
