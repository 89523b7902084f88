use crate::{
    app_lib::AppError,
    features::{auth::types::Session, profile::types::Profile},
    store::{alert::Alert, router::Route},
};

/// Every state change the store accepts.
#[derive(Clone, Debug)]
pub enum Action {
    SaveUser(Session),
    UserLogout,
    Navigate(Route),
    DisplayAlert(Alert),
    DismissAlert,
    ProfileRequested,
    ProfileLoaded(Profile),
    ProfileFailed(AppError),
}

impl Action {
    /// Stable name used in logs; never includes payload data.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::SaveUser(_) => "SAVE_USER",
            Self::UserLogout => "USER_LOGOUT",
            Self::Navigate(_) => "NAVIGATE",
            Self::DisplayAlert(_) => "DISPLAY_ALERT",
            Self::DismissAlert => "DISMISS_ALERT",
            Self::ProfileRequested => "PROFILE_REQUESTED",
            Self::ProfileLoaded(_) => "PROFILE_LOADED",
            Self::ProfileFailed(_) => "PROFILE_FAILED",
        }
    }
}
