//! Fairgame CLI library.
//!
//! The interactive single-round session lives here so integration tests can
//! drive it over in-memory readers and writers; `main.rs` wires it to the
//! real terminal.

pub mod session;
