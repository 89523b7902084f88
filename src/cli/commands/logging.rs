use clap::{builder::ValueParser, Arg, Command};

pub const ARG_VERBOSITY: &str = "verbosity";
pub const MAX_LOG_LEVEL: u8 = 4;

#[must_use]
pub fn validator_log_level() -> ValueParser {
    ValueParser::from(move |level: &str| -> std::result::Result<u8, String> {
        // Numbers and names share one scale: 0 = error .. 4 = trace
        match level.parse::<u8>() {
            Ok(parsed) if parsed <= MAX_LOG_LEVEL => return Ok(parsed),
            Ok(_) => return Err(format!("log level must be between 0 and {MAX_LOG_LEVEL}")),
            Err(_) => {}
        }

        match level.to_ascii_lowercase().as_str() {
            "error" => Ok(0),
            "warn" => Ok(1),
            "info" => Ok(2),
            "debug" => Ok(3),
            "trace" => Ok(MAX_LOG_LEVEL),
            _ => Err("invalid log level".to_string()),
        }
    })
}

#[must_use]
pub fn with_args(command: Command) -> Command {
    command.arg(
        Arg::new(ARG_VERBOSITY)
            .short('v')
            .long("verbose")
            .help("Verbosity level: ERROR, WARN, INFO, DEBUG, TRACE or 0-4 (default: ERROR)")
            .env("ALERTSUB_LOG_LEVEL")
            .global(true)
            .action(clap::ArgAction::Count)
            .value_parser(validator_log_level()),
    )
}
