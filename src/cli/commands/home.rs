use super::auth::{ARG_EMAIL, ARG_TOKEN};
use clap::{Arg, Command};

#[must_use]
pub fn home() -> Command {
    Command::new("home")
        .about("Show the landing page and the alert menu")
        .arg(
            Arg::new(ARG_EMAIL)
                .short('e')
                .long("email")
                .help("Account email address")
                .env("ALERTSUB_EMAIL")
                .requires(ARG_TOKEN)
                .value_parser(super::auth::validator_email()),
        )
        .arg(
            Arg::new(ARG_TOKEN)
                .short('t')
                .long("token")
                .help("Session token printed by login or signup")
                .env("ALERTSUB_TOKEN")
                .hide_env_values(true)
                .requires(ARG_EMAIL),
        )
}
