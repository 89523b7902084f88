//! Auth feature: login, signup, and logout.
//!
//! Login and signup POST `{email, password}` and, on success, save the
//! returned session and navigate to the profile page. Every failure becomes a
//! single generic alert. This module touches credentials and must never log
//! passwords or session tokens.

pub mod actions;
pub mod client;
pub mod types;

pub use actions::{authenticate_user, log_out_user, save_user, sign_up_user};
