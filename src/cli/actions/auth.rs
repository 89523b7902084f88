use crate::{
    cli::{actions::report_alert, globals::GlobalArgs},
    features::auth::{authenticate_user, sign_up_user},
    store::Store,
};
use anyhow::{bail, Result};
use secrecy::{ExposeSecret, SecretString};

#[derive(Debug)]
pub struct Args {
    pub email: String,
    pub password: SecretString,
}

/// Handle the login action
/// # Errors
/// Returns an error if the login is rejected or the API is unreachable.
pub async fn login(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api_client()?;
    let store = Store::new();
    authenticate_user(&api, &store, &args.email, &args.password).await;
    print_session(&store)
}

/// Handle the signup action
/// # Errors
/// Returns an error if the signup is rejected or the API is unreachable.
pub async fn signup(args: Args, globals: &GlobalArgs) -> Result<()> {
    let api = globals.api_client()?;
    let store = Store::new();
    sign_up_user(&api, &store, &args.email, &args.password).await;
    print_session(&store)
}

fn print_session(store: &Store) -> Result<()> {
    let state = store.snapshot();
    report_alert(&state)?;

    let Some(session) = state.auth.session() else {
        bail!("no session was established");
    };
    println!("Logged in as {}", session.email);
    println!("ALERTSUB_TOKEN={}", session.auth_token.expose_secret());
    println!("Next: {}", state.router.location());
    Ok(())
}
