//! Common utilities, constants, and resources used across the slotmint codebase.
//!
//! This crate provides shared functionality for the slotmint toolkit, including
//! the development-node provider, the privileged chain-controller capability,
//! typed execution traces, and general utility functions.

/// Constants used throughout the slotmint codebase.
pub mod constants;

/// Error types shared across the slotmint codebase.
pub mod error;

/// Utilities for interacting with Ethereum development nodes, including the
/// provider wrapper, probe calldata, and execution-trace functionality.
pub mod ether;

/// General utility functions and types for common tasks.
pub mod utils;

pub use error::Error;
