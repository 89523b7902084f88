//! Profile feature: fetch the profile for the current session, replace it as a
//! whole document, and change the password.
//!
//! Updates are read-modify-write on the full profile with last-writer-wins
//! semantics; there is no partial update or version check.

pub mod actions;
pub mod client;
pub mod types;

pub use actions::{get_profile, update_password, update_profile};
