//! Domain models shared by the client crates.

pub mod auth;
pub mod notes;
