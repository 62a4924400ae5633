/// Probe calldata encoding.
pub mod calldata;

/// The privileged chain-controller capability consumed by slotmint operations.
pub mod controller;

/// The development-node provider wrapper.
pub mod provider;

/// Free-function RPC helpers.
pub mod rpc;

/// Strongly-typed opcode-level execution traces.
pub mod trace;
