//! Genesis block generation for Reflect (RF) networks
//!
//! Builds the parentless first block from a coinbase message and header
//! fields. Identical inputs always give an identical block.

use crate::crypto::{compute_merkle_root, Hash};
use crate::primitives::{pay_to_pubkey, Block, BlockHeader, Script, Transaction};

/// Coinbase message shared by every Reflect network
pub const GENESIS_COINBASE_MESSAGE: &str = "05/05/2022 - This is Reflect Core";

/// Numeric tag pushed after the leading zero in the genesis input script
pub const GENESIS_COINBASE_TAG: i64 = 42;

/// Uncompressed secp256k1 key the genesis reward was meant for
pub const GENESIS_OUTPUT_KEY: [u8; 65] = [
    0x04, 0x01, 0xdc, 0x1a, 0xbe, 0x76, 0x98, 0x91, 0xeb, 0x5e, 0x3e, 0x41, 0x85,
    0x06, 0x23, 0x90, 0x23, 0x8b, 0xa4, 0x4f, 0xf2, 0x4c, 0x04, 0x28, 0x86, 0x6b,
    0xeb, 0xb8, 0x13, 0x63, 0xec, 0xdd, 0x39, 0xdc, 0x78, 0x30, 0xcb, 0xd2, 0xbf,
    0x96, 0x41, 0xec, 0x31, 0xaa, 0x25, 0x56, 0x2c, 0xe0, 0xd0, 0xc4, 0xcd, 0xe2,
    0x61, 0x87, 0x1c, 0x58, 0xdc, 0x78, 0xa8, 0x36, 0x9b, 0x05, 0x8a, 0x15, 0x9e,
];

/// `<GENESIS_OUTPUT_KEY> OP_CHECKSIG`
pub fn genesis_claim_script() -> Script {
    pay_to_pubkey(&GENESIS_OUTPUT_KEY)
}

/// Input script of a genesis coinbase: `0 <tag> <message>`
pub fn genesis_script_sig(message: &[u8]) -> Script {
    Script::new()
        .push_int(0)
        .push_script_num(GENESIS_COINBASE_TAG)
        .push_slice(message)
}

/// Everything that determines a genesis block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisBuilder {
    pub message: Vec<u8>,
    pub output_script: Script,
    pub time: u32,
    pub nonce: u32,
    pub bits: u32,
    pub version: i32,
    pub reward: i64,
}

impl GenesisBuilder {
    pub fn new(
        message: &[u8],
        output_script: Script,
        time: u32,
        nonce: u32,
        bits: u32,
        version: i32,
        reward: i64,
    ) -> Self {
        Self {
            message: message.to_vec(),
            output_script,
            time,
            nonce,
            bits,
            version,
            reward,
        }
    }

    /// The Reflect genesis template for the given header fields
    ///
    /// The deployed genesis coinbases commit to an empty output script: the
    /// claim key never made it into the block, and the pinned hashes depend
    /// on that.
    pub fn reflect(time: u32, nonce: u32, bits: u32, version: i32, reward: i64) -> Self {
        Self::new(
            GENESIS_COINBASE_MESSAGE.as_bytes(),
            Script::new(),
            time,
            nonce,
            bits,
            version,
            reward,
        )
    }

    /// The single coinbase transaction of the block
    pub fn coinbase(&self) -> Transaction {
        Transaction::coinbase(
            self.time,
            genesis_script_sig(&self.message),
            self.reward,
            self.output_script.clone(),
        )
    }

    /// Build with the standard transaction Merkle root
    pub fn build(&self) -> Block {
        self.build_with(compute_merkle_root)
    }

    /// Build with a caller-supplied Merkle root function over transaction ids
    pub fn build_with<F>(&self, merkle_root: F) -> Block
    where
        F: Fn(&[Hash]) -> Hash,
    {
        let transactions = vec![self.coinbase()];
        let tx_hashes: Vec<Hash> = transactions.iter().map(|tx| tx.hash()).collect();

        let header = BlockHeader::new(
            self.version,
            Hash::zero(), // No previous block
            merkle_root(&tx_hashes),
            self.time,
            self.bits,
            self.nonce,
        );

        Block::new(header, transactions)
    }
}

/// Genesis block summary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenesisInfo {
    pub hash: Hash,
    pub merkle_root: Hash,
    pub timestamp: u32,
    pub bits: u32,
    pub nonce: u32,
}

impl From<&Block> for GenesisInfo {
    fn from(genesis: &Block) -> Self {
        Self {
            hash: genesis.hash(),
            merkle_root: genesis.header.merkle_root,
            timestamp: genesis.header.timestamp,
            bits: genesis.header.bits,
            nonce: genesis.header.nonce,
        }
    }
}
