use clap::{builder::ValueParser, Arg, Command};
use regex::Regex;

pub const ARG_EMAIL: &str = "email";
pub const ARG_PASSWORD: &str = "password";
pub const ARG_TOKEN: &str = "token";

#[must_use]
pub fn valid_email(email: &str) -> bool {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").is_ok_and(|re| re.is_match(email))
}

#[must_use]
pub fn validator_email() -> ValueParser {
    ValueParser::from(move |email: &str| -> std::result::Result<String, String> {
        let email = email.trim();
        if valid_email(email) {
            Ok(email.to_string())
        } else {
            Err("invalid email address".to_string())
        }
    })
}

fn email_arg() -> Arg {
    Arg::new(ARG_EMAIL)
        .short('e')
        .long("email")
        .help("Account email address")
        .env("ALERTSUB_EMAIL")
        .required(true)
        .value_parser(validator_email())
}

/// Arguments identifying an existing session.
#[must_use]
pub fn with_session_args(command: Command) -> Command {
    command.arg(email_arg()).arg(
        Arg::new(ARG_TOKEN)
            .short('t')
            .long("token")
            .help("Session token printed by login or signup")
            .env("ALERTSUB_TOKEN")
            .hide_env_values(true)
            .required(true),
    )
}

fn with_credentials(command: Command) -> Command {
    command.arg(email_arg()).arg(
        Arg::new(ARG_PASSWORD)
            .short('p')
            .long("password")
            .help("Account password")
            .env("ALERTSUB_PASSWORD")
            .hide_env_values(true)
            .required(true),
    )
}

#[must_use]
pub fn login() -> Command {
    with_credentials(Command::new("login").about("Log in and print the session token"))
}

#[must_use]
pub fn signup() -> Command {
    with_credentials(Command::new("signup").about("Create an account and print the session token"))
}
