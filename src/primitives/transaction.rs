//! Transaction structure and wire encoding
//!
//! Proof-of-stake family layout: the transaction carries its own timestamp
//! right after the version.

use serde::{Deserialize, Serialize};
use crate::crypto::{sha256d, Hash};
use super::Script;

/// Previous-output index marking a coinbase input
pub const NULL_INDEX: u32 = 0xFFFF_FFFF;

/// Default input sequence
pub const SEQUENCE_FINAL: u32 = 0xFFFF_FFFF;

/// A transaction input referencing a previous output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxInput {
    /// Hash of the transaction containing the output
    pub prev_tx_hash: Hash,
    /// Index of the output in that transaction
    pub output_index: u32,
    /// Unlocking script
    pub script_sig: Script,
    pub sequence: u32,
}

/// A transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxOutput {
    /// Amount in base units
    pub amount: i64,
    /// Locking script
    pub script_pubkey: Script,
}

/// A complete transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction version
    pub version: i32,
    /// Transaction timestamp (seconds since Unix epoch)
    pub time: u32,
    /// Transaction inputs
    pub inputs: Vec<TxInput>,
    /// Transaction outputs
    pub outputs: Vec<TxOutput>,
    /// Lock time (block height or timestamp)
    pub lock_time: u32,
}

impl Transaction {
    /// Create a coinbase transaction with a single null-prevout input
    pub fn coinbase(time: u32, script_sig: Script, amount: i64, script_pubkey: Script) -> Self {
        Self {
            version: 1,
            time,
            inputs: vec![TxInput {
                prev_tx_hash: Hash::zero(),
                output_index: NULL_INDEX,
                script_sig,
                sequence: SEQUENCE_FINAL,
            }],
            outputs: vec![TxOutput {
                amount,
                script_pubkey,
            }],
            lock_time: 0,
        }
    }

    /// Check if this is a coinbase transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1
            && self.inputs[0].prev_tx_hash.is_zero()
            && self.inputs[0].output_index == NULL_INDEX
    }

    /// Transaction id: sha256d of the wire encoding
    pub fn hash(&self) -> Hash {
        sha256d(&self.to_bytes())
    }

    /// Wire encoding
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::new();

        bytes.extend_from_slice(&self.version.to_le_bytes());
        bytes.extend_from_slice(&self.time.to_le_bytes());

        write_compact_size(&mut bytes, self.inputs.len() as u64);
        for input in &self.inputs {
            bytes.extend_from_slice(&input.prev_tx_hash.0);
            bytes.extend_from_slice(&input.output_index.to_le_bytes());
            write_script(&mut bytes, &input.script_sig);
            bytes.extend_from_slice(&input.sequence.to_le_bytes());
        }

        write_compact_size(&mut bytes, self.outputs.len() as u64);
        for output in &self.outputs {
            bytes.extend_from_slice(&output.amount.to_le_bytes());
            write_script(&mut bytes, &output.script_pubkey);
        }

        bytes.extend_from_slice(&self.lock_time.to_le_bytes());
        bytes
    }

    /// Calculate total output value
    pub fn total_output_value(&self) -> i64 {
        self.outputs.iter().map(|o| o.amount).sum()
    }
}

/// Bitcoin-style variable length integer
pub fn write_compact_size(buf: &mut Vec<u8>, n: u64) {
    match n {
        0..=0xfc => buf.push(n as u8),
        0xfd..=0xffff => {
            buf.push(0xfd);
            buf.extend_from_slice(&(n as u16).to_le_bytes());
        }
        0x1_0000..=0xffff_ffff => {
            buf.push(0xfe);
            buf.extend_from_slice(&(n as u32).to_le_bytes());
        }
        _ => {
            buf.push(0xff);
            buf.extend_from_slice(&n.to_le_bytes());
        }
    }
}

fn write_script(buf: &mut Vec<u8>, script: &Script) {
    write_compact_size(buf, script.len() as u64);
    buf.extend_from_slice(script.as_bytes());
}
