//! Wayfinder CLI library.
//!
//! Command handlers, output rendering and terminal styling for the
//! `wayfinder-cli` binary.

pub mod commands;
pub mod output;
pub mod terminal;
