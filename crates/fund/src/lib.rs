//! Set the native-currency balance of test accounts on a development chain,
//! so they can pay gas before any tokens exist.

pub mod error;

mod core;
mod interfaces;

// re-export the public interface
pub use core::{fund, fund_with_controller, FundResult};
pub use interfaces::{FundArgs, FundArgsBuilder};
