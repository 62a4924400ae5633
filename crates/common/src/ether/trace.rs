//! Strongly-typed opcode-level execution traces.
//!
//! The geth-style struct logs coming back from `debug_traceTransaction` are
//! loosely typed (optional stacks, memory as bare hex strings). They are
//! converted into [`ExecutionTrace`] once, at the RPC boundary, and consumed
//! as immutable values from then on.

use crate::{error::Error, utils::strings::decode_hex};
use alloy::{
    primitives::{B256, U256},
    rpc::types::trace::geth::{DefaultFrame, StructLog},
};

/// A single executed opcode, with the operand stack and the flat memory image
/// as they existed at that step.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StepLog {
    /// Opcode mnemonic, e.g. `SLOAD` or `KECCAK256`
    pub op: String,
    /// Operand stack, top-of-stack last
    pub stack: Vec<U256>,
    /// Memory as a sequence of 32-byte words
    pub memory: Vec<B256>,
}

/// An ordered sequence of [`StepLog`]s, one per executed opcode.
#[derive(Debug, Clone, Default)]
pub struct ExecutionTrace {
    /// The executed steps, in execution order
    pub steps: Vec<StepLog>,
}

impl ExecutionTrace {
    /// Whether the trace contains no steps (codeless target, reverted probe)
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Number of executed steps
    pub fn len(&self) -> usize {
        self.steps.len()
    }
}

impl TryFrom<StructLog> for StepLog {
    type Error = Error;

    fn try_from(log: StructLog) -> Result<Self, Self::Error> {
        let memory = log
            .memory
            .unwrap_or_default()
            .iter()
            .map(|word| {
                let bytes = decode_hex(word)
                    .map_err(|e| Error::ParseError(format!("invalid memory word: {e}")))?;
                if bytes.len() > 32 {
                    return Err(Error::ParseError(format!(
                        "memory word too long: {} bytes",
                        bytes.len()
                    )));
                }
                Ok(B256::left_padding_from(&bytes))
            })
            .collect::<Result<Vec<B256>, Error>>()?;

        Ok(Self { op: log.op.to_string(), stack: log.stack.unwrap_or_default(), memory })
    }
}

impl TryFrom<DefaultFrame> for ExecutionTrace {
    type Error = Error;

    fn try_from(frame: DefaultFrame) -> Result<Self, Self::Error> {
        let steps = frame
            .struct_logs
            .into_iter()
            .map(StepLog::try_from)
            .collect::<Result<Vec<StepLog>, Error>>()?;

        Ok(Self { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Parse a struct log the way it arrives on the wire
    fn struct_log(value: serde_json::Value) -> StructLog {
        serde_json::from_value(value).expect("invalid struct log fixture")
    }

    #[test]
    fn test_step_log_from_struct_log() {
        let log = struct_log(json!({
            "pc": 100,
            "op": "KECCAK256",
            "gas": 1000,
            "gasCost": 30,
            "depth": 1,
            "stack": ["0x40", "0x0"],
            "memory": [
                "000000000000000000000000aaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaaa",
                "0000000000000000000000000000000000000000000000000000000000000002"
            ]
        }));

        let step = StepLog::try_from(log).expect("conversion failed");
        assert_eq!(step.op, "KECCAK256");
        assert_eq!(step.stack, vec![U256::from(64), U256::from(0)]);
        assert_eq!(step.memory.len(), 2);
        assert_eq!(step.memory[1], B256::with_last_byte(2));
    }

    #[test]
    fn test_step_log_missing_stack_and_memory() {
        let log = struct_log(json!({
            "pc": 0,
            "op": "STOP",
            "gas": 0,
            "gasCost": 0,
            "depth": 1
        }));

        let step = StepLog::try_from(log).expect("conversion failed");
        assert!(step.stack.is_empty());
        assert!(step.memory.is_empty());
    }

    #[test]
    fn test_step_log_rejects_malformed_memory() {
        let log = struct_log(json!({
            "pc": 0,
            "op": "KECCAK256",
            "gas": 0,
            "gasCost": 0,
            "depth": 1,
            "memory": ["zz"]
        }));

        assert!(StepLog::try_from(log).is_err());
    }

    #[test]
    fn test_execution_trace_from_default_frame() {
        let frame: DefaultFrame = serde_json::from_value(json!({
            "failed": false,
            "gas": 24651,
            "returnValue": "",
            "structLogs": [
                { "pc": 0, "op": "PUSH1", "gas": 24000, "gasCost": 3, "depth": 1 },
                {
                    "pc": 2,
                    "op": "SLOAD",
                    "gas": 23997,
                    "gasCost": 2100,
                    "depth": 1,
                    "stack": ["0x2"]
                }
            ]
        }))
        .expect("invalid frame fixture");

        let trace = ExecutionTrace::try_from(frame).expect("conversion failed");
        assert_eq!(trace.len(), 2);
        assert!(!trace.is_empty());
        assert_eq!(trace.steps[1].op, "SLOAD");
        assert_eq!(trace.steps[1].stack, vec![U256::from(2)]);
    }
}
