pub mod auth;
pub mod home;
pub mod logging;
pub mod profile;

use clap::{
    builder::styling::{AnsiColor, Effects, Styles},
    Arg, ColorChoice, Command,
};

pub const ARG_API_URL: &str = "api-url";
pub const ARG_TIMEOUT_MS: &str = "timeout-ms";

#[must_use]
pub fn new() -> Command {
    let styles = Styles::styled()
        .header(AnsiColor::Yellow.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Blue.on_default() | Effects::BOLD)
        .placeholder(AnsiColor::Green.on_default());

    let long_version: &'static str = Box::leak(
        format!("{} - {}", env!("CARGO_PKG_VERSION"), crate::GIT_COMMIT_HASH).into_boxed_str(),
    );

    let command = Command::new("alertsub")
        .about("Emergency alert subscription client")
        .version(env!("CARGO_PKG_VERSION"))
        .long_version(long_version)
        .color(ColorChoice::Auto)
        .styles(styles)
        .subcommand_required(true)
        .arg(
            Arg::new(ARG_API_URL)
                .long("api-url")
                .help("Base URL of the alert service API (default: $ALERTSUB_API_BASE_URL or http://localhost:8080)")
                .global(true),
        )
        .arg(
            Arg::new(ARG_TIMEOUT_MS)
                .long("timeout-ms")
                .help("Request timeout in milliseconds (default: $ALERTSUB_TIMEOUT_MS or 10000)")
                .global(true)
                .value_parser(clap::value_parser!(u64).range(1..)),
        )
        .subcommand(auth::login())
        .subcommand(auth::signup())
        .subcommand(home::home())
        .subcommand(profile::profile())
        .subcommand(profile::password());

    logging::with_args(command)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    #[test]
    fn test_new() {
        let command = new();

        assert_eq!(command.get_name(), "alertsub");
        assert_eq!(
            command.get_about().unwrap().to_string(),
            "Emergency alert subscription client"
        );
        assert_eq!(
            command.get_version().unwrap().to_string(),
            env!("CARGO_PKG_VERSION")
        );
    }

    #[test]
    fn test_login_args() {
        temp_env::with_vars(
            [
                ("ALERTSUB_EMAIL", None::<&str>),
                ("ALERTSUB_PASSWORD", None),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "alertsub",
                    "--api-url",
                    "https://alerts.example.gov",
                    "login",
                    "--email",
                    "ana@example.gov",
                    "--password",
                    "hunter2",
                ]);

                assert_eq!(
                    matches.get_one::<String>(ARG_API_URL).cloned(),
                    Some("https://alerts.example.gov".to_string())
                );
                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, "login");
                assert_eq!(
                    sub.get_one::<String>(auth::ARG_EMAIL).cloned(),
                    Some("ana@example.gov".to_string())
                );
            },
        );
    }

    #[test]
    fn test_login_rejects_invalid_email() {
        temp_env::with_vars([("ALERTSUB_PASSWORD", Some("pw"))], || {
            let result = new().try_get_matches_from(vec![
                "alertsub",
                "login",
                "--email",
                "not-an-email",
            ]);
            assert!(result.is_err());
        });
    }

    #[test]
    fn test_credentials_from_env() {
        temp_env::with_vars(
            [
                ("ALERTSUB_EMAIL", Some("ana@example.gov")),
                ("ALERTSUB_PASSWORD", Some("hunter2")),
            ],
            || {
                let matches = new().get_matches_from(vec!["alertsub", "signup"]);
                let (name, sub) = matches.subcommand().unwrap();
                assert_eq!(name, "signup");
                assert_eq!(
                    sub.get_one::<String>(auth::ARG_PASSWORD).cloned(),
                    Some("hunter2".to_string())
                );
            },
        );
    }

    #[test]
    fn test_profile_set_fields() {
        temp_env::with_vars(
            [
                ("ALERTSUB_EMAIL", Some("ana@example.gov")),
                ("ALERTSUB_TOKEN", Some("tok")),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "alertsub",
                    "profile",
                    "set",
                    "--field",
                    "phone=555-0100",
                    "--field",
                    "sms=true",
                ]);
                let (_, profile) = matches.subcommand().unwrap();
                let (name, set) = profile.subcommand().unwrap();
                assert_eq!(name, "set");
                let fields: Vec<(String, Value)> = set
                    .get_many::<(String, Value)>(profile::ARG_FIELD)
                    .unwrap()
                    .cloned()
                    .collect();
                assert_eq!(
                    fields,
                    vec![
                        ("phone".to_string(), json!("555-0100")),
                        ("sms".to_string(), json!(true)),
                    ]
                );
            },
        );
    }

    #[test]
    fn test_add_address_accepts_negative_coordinates() {
        temp_env::with_vars(
            [
                ("ALERTSUB_EMAIL", Some("ana@example.gov")),
                ("ALERTSUB_TOKEN", Some("tok")),
            ],
            || {
                let matches = new().get_matches_from(vec![
                    "alertsub",
                    "profile",
                    "add-address",
                    "--label",
                    "1 Main St",
                    "--latitude",
                    "38.9",
                    "--longitude",
                    "-77.03",
                ]);
                let (_, profile) = matches.subcommand().unwrap();
                let (_, add) = profile.subcommand().unwrap();
                assert_eq!(
                    add.get_one::<f64>(profile::ARG_LONGITUDE).copied(),
                    Some(-77.03)
                );
            },
        );
    }

    #[test]
    fn test_check_log_level_env() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, &level) in levels.iter().enumerate() {
            temp_env::with_vars([("ALERTSUB_LOG_LEVEL", Some(level))], || {
                let matches = new().get_matches_from(vec!["alertsub", "home"]);
                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }

    #[test]
    fn test_check_log_level_verbosity() {
        // loop cover all possible value_parse
        let levels = vec!["error", "warn", "info", "debug", "trace"];
        for (index, _) in levels.iter().enumerate() {
            temp_env::with_vars([("ALERTSUB_LOG_LEVEL", None::<String>)], || {
                let mut args = vec!["alertsub".to_string()];

                // Add the appropriate number of "-v" flags based on the index
                if index > 0 {
                    let v = format!("-{}", "v".repeat(index));
                    args.push(v);
                }
                args.push("home".to_string());

                let matches = new().get_matches_from(args);

                assert_eq!(
                    matches
                        .get_one::<u8>(logging::ARG_VERBOSITY)
                        .map(|s| *s),
                    Some(index as u8)
                );
            });
        }
    }
}
