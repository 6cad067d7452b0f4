//! Consensus module - Parameter sets and compact difficulty targets

mod difficulty;
mod params;

pub use difficulty::*;
pub use params::*;
