use super::auth::with_session_args;
use clap::{builder::ValueParser, Arg, ArgAction, Command};
use serde_json::Value;

pub const ARG_FIELD: &str = "field";
pub const ARG_LABEL: &str = "label";
pub const ARG_LATITUDE: &str = "latitude";
pub const ARG_LONGITUDE: &str = "longitude";
pub const ARG_NEW_PASSWORD: &str = "new-password";
pub const ARG_CONFIRM_PASSWORD: &str = "confirm-password";

/// Parses `key=value`; the value is JSON when it parses as JSON, otherwise a
/// plain string.
#[must_use]
pub fn validator_field() -> ValueParser {
    ValueParser::from(
        move |field: &str| -> std::result::Result<(String, Value), String> {
            let (key, raw) = field
                .split_once('=')
                .ok_or_else(|| "expected key=value".to_string())?;
            let key = key.trim();
            if key.is_empty() {
                return Err("field name must not be empty".to_string());
            }
            let value = serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string()));
            Ok((key.to_string(), value))
        },
    )
}

fn label_arg() -> Arg {
    Arg::new(ARG_LABEL)
        .long("label")
        .help("Address as displayed, e.g. \"1 Main St, Springfield\"")
        .required(true)
}

#[must_use]
pub fn profile() -> Command {
    with_session_args(
        Command::new("profile")
            .about("Show or edit the subscriber profile")
            .subcommand_required(true)
            .subcommand(Command::new("show").about("Show the profile"))
            .subcommand(
                Command::new("set").about("Update profile fields").arg(
                    Arg::new(ARG_FIELD)
                        .long("field")
                        .help("Field to set as key=value (repeatable)")
                        .action(ArgAction::Append)
                        .required(true)
                        .value_parser(validator_field()),
                ),
            )
            .subcommand(
                Command::new("add-address")
                    .about("Add an alert address")
                    .arg(label_arg())
                    .arg(
                        Arg::new(ARG_LATITUDE)
                            .long("latitude")
                            .help("Latitude in decimal degrees")
                            .required(true)
                            .allow_negative_numbers(true)
                            .value_parser(clap::value_parser!(f64)),
                    )
                    .arg(
                        Arg::new(ARG_LONGITUDE)
                            .long("longitude")
                            .help("Longitude in decimal degrees")
                            .required(true)
                            .allow_negative_numbers(true)
                            .value_parser(clap::value_parser!(f64)),
                    ),
            )
            .subcommand(
                Command::new("remove-address")
                    .about("Remove an alert address")
                    .arg(label_arg()),
            ),
    )
}

#[must_use]
pub fn password() -> Command {
    with_session_args(
        Command::new("password")
            .about("Change the account password")
            .arg(
                Arg::new(ARG_NEW_PASSWORD)
                    .long("new-password")
                    .help("New password")
                    .env("ALERTSUB_NEW_PASSWORD")
                    .hide_env_values(true)
                    .required(true),
            )
            .arg(
                Arg::new(ARG_CONFIRM_PASSWORD)
                    .long("confirm-password")
                    .help("New password, again")
                    .env("ALERTSUB_CONFIRM_PASSWORD")
                    .hide_env_values(true)
                    .required(true),
            ),
    )
}
