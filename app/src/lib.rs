//! Fitness Dashboard Client Library
//!
//! This library exposes the client modules for use in tests and hosts.

pub mod config;
pub mod error;
pub mod notify;
pub mod remote;
pub mod services;
pub mod state;
