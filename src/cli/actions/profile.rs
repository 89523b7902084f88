use crate::{
    cli::{
        actions::{report_alert, SessionArgs},
        globals::GlobalArgs,
    },
    features::{
        auth::save_user,
        profile::types::{GeocodedFeature, PasswordForm},
    },
    store::{Dispatch, Store},
    views::{profile_container::ProfileBody, ProfileContainer},
};
use anyhow::{anyhow, bail, Result};
use serde_json::{Map, Value};

#[derive(Debug)]
pub enum Command {
    Show,
    Set(Map<String, Value>),
    AddAddress(GeocodedFeature),
    RemoveAddress(String),
    Password(PasswordForm),
}

#[derive(Debug)]
pub struct Args {
    pub session: SessionArgs,
    pub command: Command,
}

/// Handle the profile actions
/// # Errors
/// Returns an error if the profile cannot be loaded or the edit is rejected.
pub async fn execute(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api_client()?;
    let store = Store::new();
    store.dispatch(save_user(args.session.into()));

    let mut container = ProfileContainer::new(&store, &api);

    let command = match args.command {
        Command::Password(form) => {
            container.toggle_password_form();
            container.update_password(&form).await;
            return report_alert(&store.snapshot());
        }
        other => other,
    };

    container.mount().await;
    if let ProfileBody::Failed(message) = container.render().body {
        bail!("Unable to load profile: {message}");
    }

    match command {
        Command::Show | Command::Password(_) => {}
        Command::Set(values) => {
            container.submit_update(values).await;
        }
        Command::AddAddress(feature) => {
            container.update_address_state(feature.properties.label.clone());
            container.save_new_address(&feature).await;
        }
        Command::RemoveAddress(label) => {
            let address = store
                .read(|state| {
                    state.profile.profile().and_then(|profile| {
                        profile
                            .addresses
                            .iter()
                            .find(|address| address.address == label)
                            .cloned()
                    })
                })
                .ok_or_else(|| anyhow!("No address labelled {label:?} in the profile"))?;
            container.remove_address(&address).await;
        }
    }

    report_alert(&store.snapshot())?;
    print!("{}", container.render());
    Ok(())
}
