//! # alertsub
//!
//! Client for the emergency alert subscription service. Users sign up, log in,
//! and manage a profile (addresses, password); operators reach the alert
//! sending and monitoring pages.
//!
//! ## Data flow
//!
//! User interaction → view handler → action creator → HTTP request →
//! response normalization → reducer applies the resulting [`store::Action`] to
//! the [`store::Store`] → subscribers observe the new state.
//!
//! Action creators never surface transport detail to the user: every failure
//! of the login and signup flows becomes one generic alert. The detail is kept
//! in local logs only and must never include passwords or session tokens.

pub mod app_lib;
pub mod cli;
pub mod features;
pub mod store;
pub mod views;

#[allow(clippy::doc_markdown, clippy::needless_raw_string_hashes)]
pub mod built_info {
    include!(concat!(env!("OUT_DIR"), "/built.rs"));
}

pub const GIT_COMMIT_HASH: &str = match built_info::GIT_COMMIT_HASH {
    Some(hash) => hash,
    None => "unknown",
};

pub const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"),);
