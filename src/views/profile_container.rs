//! Profile page: the signed-in user's addresses, profile fields, and password
//! form.
//!
//! The profile is loaded on mount and every edit resubmits the whole document.
//! Local UI state (the password form toggle and the in-progress address field)
//! is ephemeral and never sent to the server.

use crate::{
    app_lib::ApiClient,
    features::profile::{
        actions,
        types::{Address, GeocodedFeature, PasswordForm, Profile},
    },
    store::{Action, Alert, Dispatch, ProfileState, Route, Store},
};
use secrecy::SecretString;
use serde_json::{Map, Value};
use std::fmt;
use tracing::{error, warn};

pub const LOADING_MESSAGE: &str = "loading profile...";

#[derive(Clone, Debug, PartialEq)]
pub enum ProfileBody {
    Loading,
    Failed(String),
    Loaded {
        profile: Profile,
        address_field: String,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProfileView {
    pub user_email: Option<String>,
    pub updating_password: bool,
    pub body: ProfileBody,
}

pub struct ProfileContainer<'a> {
    store: &'a Store,
    api: &'a ApiClient,
    updating_password: bool,
    new_address_state: String,
}

impl<'a> ProfileContainer<'a> {
    #[must_use]
    pub fn new(store: &'a Store, api: &'a ApiClient) -> Self {
        Self {
            store,
            api,
            updating_password: false,
            new_address_state: String::new(),
        }
    }

    /// Fetches the profile for the current session. Without a session the
    /// user is sent back to the landing page.
    pub async fn mount(&self) {
        let Some(token) = self.token() else {
            warn!("profile page opened without a session");
            self.store.dispatch(Action::Navigate(Route::Landing));
            return;
        };
        actions::get_profile(self.api, self.store, &token).await;
    }

    #[must_use]
    pub const fn updating_password(&self) -> bool {
        self.updating_password
    }

    #[must_use]
    pub fn new_address_state(&self) -> &str {
        &self.new_address_state
    }

    pub fn toggle_password_form(&mut self) {
        self.updating_password = !self.updating_password;
    }

    pub fn update_address_state(&mut self, value: impl Into<String>) {
        self.new_address_state = value.into();
    }

    /// Merges form `values` over the loaded profile and resubmits it.
    pub async fn submit_update(&self, values: Map<String, Value>) -> bool {
        let Some((token, profile)) = self.editable() else {
            return false;
        };
        match profile.merged(values) {
            Ok(updated) => actions::update_profile(self.api, self.store, &token, updated).await,
            Err(err) => {
                error!(error = %err, "rejected profile update");
                self.store
                    .dispatch(Action::DisplayAlert(Alert::error(actions::UPDATE_FAILED_MESSAGE)));
                false
            }
        }
    }

    /// Removes `address` and resubmits the profile. An address that is not in
    /// the loaded list is logged and ignored.
    pub async fn remove_address(&self, address: &Address) -> bool {
        let Some((token, mut profile)) = self.editable() else {
            return false;
        };
        let Some(index) = profile.address_position(address) else {
            error!("Attempting to remove an address that is not in the list");
            return false;
        };
        profile.addresses.remove(index);
        actions::update_profile(self.api, self.store, &token, profile).await
    }

    /// Appends the address picked in the geocoder and resubmits the profile,
    /// then clears the address field.
    pub async fn save_new_address(&mut self, feature: &GeocodedFeature) -> bool {
        let Some((token, mut profile)) = self.editable() else {
            return false;
        };
        profile.addresses.push(Address::from(feature));
        let stored = actions::update_profile(self.api, self.store, &token, profile).await;
        self.new_address_state.clear();
        stored
    }

    /// Submits the password form and closes it on success.
    pub async fn update_password(&mut self, form: &PasswordForm) -> bool {
        let Some(token) = self.token() else {
            warn!("password update without a session");
            return false;
        };
        let updated = actions::update_password(self.api, self.store, &token, form).await;
        if updated {
            self.updating_password = false;
        }
        updated
    }

    #[must_use]
    pub fn render(&self) -> ProfileView {
        self.store.read(|state| {
            let body = match &state.profile {
                ProfileState::Idle | ProfileState::Loading => ProfileBody::Loading,
                ProfileState::Failed(err) => ProfileBody::Failed(err.to_string()),
                ProfileState::Loaded(profile) => ProfileBody::Loaded {
                    profile: profile.clone(),
                    address_field: self.new_address_state.clone(),
                },
            };
            ProfileView {
                user_email: state.auth.email().map(str::to_string),
                updating_password: self.updating_password,
                body,
            }
        })
    }

    fn token(&self) -> Option<SecretString> {
        self.store.read(|state| state.auth.token().cloned())
    }

    /// Session token and a copy of the loaded profile, the inputs of every
    /// read-modify-write edit.
    fn editable(&self) -> Option<(SecretString, Profile)> {
        let (token, profile) = self.store.read(|state| {
            (
                state.auth.token().cloned(),
                state.profile.profile().cloned(),
            )
        });
        match (token, profile) {
            (Some(token), Some(profile)) => Some((token, profile)),
            (None, _) => {
                error!("profile edit without a session");
                None
            }
            (_, None) => {
                error!("profile edit before the profile was loaded");
                None
            }
        }
    }
}

impl fmt::Display for ProfileView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(email) = &self.user_email {
            writeln!(f, "Email: {email}")?;
        }
        if self.updating_password {
            writeln!(f, "Password: (editing)")?;
        }
        match &self.body {
            ProfileBody::Loading => writeln!(f, "{LOADING_MESSAGE}"),
            ProfileBody::Failed(message) => writeln!(f, "Unable to load profile: {message}"),
            ProfileBody::Loaded {
                profile,
                address_field,
            } => {
                let mut fields: Vec<_> = profile.fields.iter().collect();
                fields.sort_by(|a, b| a.0.cmp(b.0));
                for (key, value) in fields {
                    writeln!(f, "{key}: {value}")?;
                }
                writeln!(f, "Addresses:")?;
                if profile.addresses.is_empty() {
                    writeln!(f, "  (none)")?;
                }
                for (index, address) in profile.addresses.iter().enumerate() {
                    writeln!(
                        f,
                        "  {}. {} ({:.6}, {:.6})",
                        index + 1,
                        address.address,
                        address.latitude,
                        address.longitude
                    )?;
                }
                if !address_field.is_empty() {
                    writeln!(f, "New address: {address_field}")?;
                }
                Ok(())
            }
        }
    }
}
