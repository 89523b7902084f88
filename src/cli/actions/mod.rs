pub mod auth;
pub mod home;
pub mod profile;

use crate::{
    cli::globals::GlobalArgs,
    features::auth::types::Session,
    store::{AlertKind, AppState},
    views::AlertBanner,
};
use anyhow::{bail, Result};
use secrecy::SecretString;

#[derive(Debug)]
pub enum Action {
    Login(auth::Args),
    Signup(auth::Args),
    Home(home::Args),
    Profile(profile::Args),
}

impl Action {
    /// Runs the action against the configured API.
    ///
    /// # Errors
    /// Returns an error when the flow ends with an error alert or the API
    /// configuration is unusable.
    pub async fn execute(self, globals: &GlobalArgs) -> Result<()> {
        match self {
            Self::Login(args) => auth::login(args, globals).await,
            Self::Signup(args) => auth::signup(args, globals).await,
            Self::Home(args) => {
                home::execute(args);
                Ok(())
            }
            Self::Profile(args) => profile::execute(args, globals).await,
        }
    }
}

/// Session supplied on the command line.
#[derive(Debug)]
pub struct SessionArgs {
    pub email: String,
    pub token: SecretString,
}

impl From<SessionArgs> for Session {
    fn from(args: SessionArgs) -> Self {
        Self::new(args.email, args.token)
    }
}

/// Prints the current alert; an error alert fails the command.
fn report_alert(state: &AppState) -> Result<()> {
    let Some(view) = AlertBanner::render(&state.alert) else {
        return Ok(());
    };
    if state.alert.current().map(|alert| alert.kind) == Some(AlertKind::Error) {
        bail!("{}", view.message);
    }
    println!("{view}");
    Ok(())
}
