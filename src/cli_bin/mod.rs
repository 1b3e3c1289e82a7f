//! CLI module
//!
//! Argument definitions and the handlers that turn them into library calls.

pub mod args;
pub mod commands;
