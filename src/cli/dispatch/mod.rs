//! Maps validated CLI matches to an [`Action`] and the global arguments.

use crate::{
    app_lib::{config::Overrides, AppConfig},
    cli::{
        actions::{auth, home, profile, Action, SessionArgs},
        commands::{
            self,
            auth::{ARG_EMAIL, ARG_PASSWORD, ARG_TOKEN},
            profile::{
                ARG_CONFIRM_PASSWORD, ARG_FIELD, ARG_LABEL, ARG_LATITUDE, ARG_LONGITUDE,
                ARG_NEW_PASSWORD,
            },
        },
        globals::GlobalArgs,
    },
    features::profile::types::{GeocodedFeature, PasswordForm},
};
use anyhow::{anyhow, Context, Result};
use clap::ArgMatches;
use secrecy::SecretString;
use serde_json::{Map, Value};

/// Map validated CLI matches to an action.
///
/// # Errors
/// Returns an error if a required argument is missing.
pub fn handler(matches: &ArgMatches) -> Result<(Action, GlobalArgs)> {
    let mut config = AppConfig::load();
    config.apply_overrides(Overrides {
        api_base_url: matches.get_one::<String>(commands::ARG_API_URL).cloned(),
        timeout_ms: matches.get_one::<u64>(commands::ARG_TIMEOUT_MS).copied(),
    });
    let globals = GlobalArgs::new(config);

    let action = match matches.subcommand() {
        Some(("login", sub_m)) => Action::Login(credentials(sub_m)?),
        Some(("signup", sub_m)) => Action::Signup(credentials(sub_m)?),
        Some(("home", sub_m)) => Action::Home(home::Args {
            session: optional_session(sub_m),
        }),
        Some(("profile", sub_m)) => Action::Profile(profile::Args {
            session: session(sub_m)?,
            command: profile_command(sub_m)?,
        }),
        Some(("password", sub_m)) => Action::Profile(profile::Args {
            session: session(sub_m)?,
            command: profile::Command::Password(PasswordForm {
                password: secret(sub_m, ARG_NEW_PASSWORD)?,
                confirmation: secret(sub_m, ARG_CONFIRM_PASSWORD)?,
            }),
        }),
        _ => return Err(anyhow!("no subcommand given, see --help")),
    };

    Ok((action, globals))
}

fn string(matches: &ArgMatches, name: &str) -> Result<String> {
    matches
        .get_one::<String>(name)
        .cloned()
        .with_context(|| format!("missing required argument: --{name}"))
}

fn secret(matches: &ArgMatches, name: &str) -> Result<SecretString> {
    string(matches, name).map(SecretString::from)
}

fn credentials(matches: &ArgMatches) -> Result<auth::Args> {
    Ok(auth::Args {
        email: string(matches, ARG_EMAIL)?,
        password: secret(matches, ARG_PASSWORD)?,
    })
}

fn session(matches: &ArgMatches) -> Result<SessionArgs> {
    Ok(SessionArgs {
        email: string(matches, ARG_EMAIL)?,
        token: secret(matches, ARG_TOKEN)?,
    })
}

fn optional_session(matches: &ArgMatches) -> Option<SessionArgs> {
    session(matches).ok()
}

fn profile_command(matches: &ArgMatches) -> Result<profile::Command> {
    let command = match matches.subcommand() {
        Some(("show", _)) => profile::Command::Show,
        Some(("set", sub_m)) => {
            let values: Map<String, Value> = sub_m
                .get_many::<(String, Value)>(ARG_FIELD)
                .context("missing required argument: --field")?
                .cloned()
                .collect();
            profile::Command::Set(values)
        }
        Some(("add-address", sub_m)) => {
            let latitude = sub_m
                .get_one::<f64>(ARG_LATITUDE)
                .copied()
                .context("missing required argument: --latitude")?;
            let longitude = sub_m
                .get_one::<f64>(ARG_LONGITUDE)
                .copied()
                .context("missing required argument: --longitude")?;
            profile::Command::AddAddress(GeocodedFeature::new(
                string(sub_m, ARG_LABEL)?,
                longitude,
                latitude,
            ))
        }
        Some(("remove-address", sub_m)) => profile::Command::RemoveAddress(string(sub_m, ARG_LABEL)?),
        _ => return Err(anyhow!("no profile subcommand given, see --help")),
    };
    Ok(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn handle(args: &[&str]) -> Result<(Action, GlobalArgs)> {
        temp_env::with_vars(
            [
                ("ALERTSUB_API_BASE_URL", None::<&str>),
                ("ALERTSUB_TIMEOUT_MS", None),
                ("ALERTSUB_EMAIL", None),
                ("ALERTSUB_TOKEN", None),
                ("ALERTSUB_PASSWORD", None),
            ],
            || handler(&commands::new().get_matches_from(args)),
        )
    }

    #[test]
    fn login_action_carries_credentials_and_overrides() -> Result<()> {
        let (action, globals) = handle(&[
            "alertsub",
            "--api-url",
            "https://alerts.example.gov",
            "--timeout-ms",
            "1500",
            "login",
            "--email",
            "ana@example.gov",
            "--password",
            "hunter2",
        ])?;

        assert_eq!(globals.config.api_base_url, "https://alerts.example.gov");
        assert_eq!(globals.config.request_timeout.as_millis(), 1500);
        match action {
            Action::Login(args) => {
                assert_eq!(args.email, "ana@example.gov");
                assert_eq!(args.password.expose_secret(), "hunter2");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn remove_address_maps_label() -> Result<()> {
        let (action, _) = handle(&[
            "alertsub",
            "profile",
            "--email",
            "ana@example.gov",
            "--token",
            "tok",
            "remove-address",
            "--label",
            "1 Main St",
        ])?;

        match action {
            Action::Profile(args) => {
                assert_eq!(args.session.email, "ana@example.gov");
                assert!(matches!(args.command, profile::Command::RemoveAddress(ref label) if label == "1 Main St"));
            }
            other => panic!("unexpected action: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn add_address_builds_feature() -> Result<()> {
        let (action, _) = handle(&[
            "alertsub",
            "profile",
            "--email",
            "ana@example.gov",
            "--token",
            "tok",
            "add-address",
            "--label",
            "2 Oak Ave",
            "--latitude",
            "40.7",
            "--longitude",
            "-74.0",
        ])?;

        match action {
            Action::Profile(profile::Args {
                command: profile::Command::AddAddress(feature),
                ..
            }) => {
                assert_eq!(feature, GeocodedFeature::new("2 Oak Ave", -74.0, 40.7));
            }
            other => panic!("unexpected action: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn password_maps_to_profile_command() -> Result<()> {
        let (action, _) = handle(&[
            "alertsub",
            "password",
            "--email",
            "ana@example.gov",
            "--token",
            "tok",
            "--new-password",
            "a",
            "--confirm-password",
            "b",
        ])?;

        match action {
            Action::Profile(profile::Args {
                command: profile::Command::Password(form),
                ..
            }) => {
                assert_eq!(form.password.expose_secret(), "a");
                assert_eq!(form.confirmation.expose_secret(), "b");
            }
            other => panic!("unexpected action: {other:?}"),
        }
        Ok(())
    }

    #[test]
    fn home_without_session() -> Result<()> {
        let (action, _) = handle(&["alertsub", "home"])?;
        assert!(matches!(action, Action::Home(home::Args { session: None })));
        Ok(())
    }
}
