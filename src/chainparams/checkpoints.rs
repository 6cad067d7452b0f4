//! Hard-coded checkpoints
//!
//! A checkpoint pins the block hash at a height; the sync layer rejects any
//! competing history that disagrees with it.

use serde::Serialize;
use std::collections::BTreeMap;
use crate::crypto::Hash;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckpointData {
    /// Height to block hash, ordered by height
    pub checkpoints: BTreeMap<u32, Hash>,
    /// UNIX timestamp of the last checkpoint block
    pub last_checkpoint_time: i64,
    /// Transactions between genesis and the last checkpoint
    pub transactions_at_last_checkpoint: u64,
    /// Estimated transactions per day after the last checkpoint
    pub transactions_per_day: f64,
}

impl CheckpointData {
    pub fn new(
        checkpoints: impl IntoIterator<Item = (u32, Hash)>,
        last_checkpoint_time: i64,
        transactions_at_last_checkpoint: u64,
        transactions_per_day: f64,
    ) -> Self {
        Self {
            checkpoints: checkpoints.into_iter().collect(),
            last_checkpoint_time,
            transactions_at_last_checkpoint,
            transactions_per_day,
        }
    }

    /// Whether `hash` is acceptable at `height`: true unless a checkpoint
    /// exists there with a different hash
    pub fn check(&self, height: u32, hash: &Hash) -> bool {
        self.checkpoints
            .get(&height)
            .map_or(true, |expected| expected == hash)
    }

    pub fn get(&self, height: u32) -> Option<&Hash> {
        self.checkpoints.get(&height)
    }

    pub fn last_checkpoint_height(&self) -> Option<u32> {
        self.checkpoints.keys().next_back().copied()
    }
}
