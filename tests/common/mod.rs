//! Common test utilities for Brigade contract and scenario tests.
//!
//! This module provides:
//! - `TestEnv`: an isolated project directory with a `brigade.toml`
//! - Fixtures: reusable surfaces and manifests

#![allow(dead_code)]

pub mod env;
pub mod fixtures;

pub use env::*;
pub use fixtures::*;
