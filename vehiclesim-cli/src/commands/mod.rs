//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration file management (path, show, init)
//! - [`reset`] - Reset a running simulation
//! - [`route`] - Route dataset summary
//! - [`serve`] - Run the position service
//! - [`watch`] - Terminal dashboard for a running service

pub mod config;
pub mod reset;
pub mod route;
pub mod serve;
pub mod watch;
