//! The Core module serves as the central integration point for slotmint's
//! functionality, providing access to balance forging and account funding on
//! development chains.
//!
//! This module re-exports the public interfaces of the operation-specific
//! crates, making it easier to use slotmint's capabilities in other projects.

/// Error types for the core module
pub mod error;

// Re-export all operation-specific modules
pub use slotmint_funder;
pub use slotmint_minter;
