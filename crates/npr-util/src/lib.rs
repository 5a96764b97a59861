//! Shared utilities for npr.
//!
//! This crate provides cross-cutting concerns used by the other npr crates:
//! the unified error type, child-process spawning, and Cargo-style status
//! lines on stderr.

pub mod errors;
pub mod process;
pub mod progress;
