//! Common test utilities for Docent integration and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: isolated temp directories plus helpers to run the binary
//! - `StubServer`: a one-shot loopback HTTP server for the generation service
//! - Fixtures: reusable roster and response content

#![allow(dead_code)]

pub mod env;
pub mod fixtures;
pub mod stub_server;

pub use env::*;
pub use fixtures::*;
pub use stub_server::*;
