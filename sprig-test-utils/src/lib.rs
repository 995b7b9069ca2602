//! Test utilities shared across the sprig workspace
//!
//! This crate provides common testing infrastructure including:
//! - single environment variable guards ([`EnvVarGuard`])
//! - throwaway `.netrc` homes ([`NetrcGuard`])
//! - isolated config and home directories for CLI runs ([`ConfigDirsTestGuard`])
//!
//! The clippy dead_code lint is disabled for this crate because test utilities
//! may not be used by all tests, and the compiler cannot detect usage across
//! crate boundaries in development dependencies.

#![allow(dead_code)]

pub mod config;
pub mod env;
pub mod netrc;

pub use config::ConfigDirsTestGuard;
pub use env::EnvVarGuard;
pub use netrc::NetrcGuard;
