//! Domain features (auth, profile) and their action creators. Views import
//! these modules so rendering code stays free of request handling.

pub mod auth;
pub mod profile;
