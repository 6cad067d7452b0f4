//! Primitives module - Script, transaction and block encoding

mod block;
mod script;
mod transaction;

pub use block::*;
pub use script::*;
pub use transaction::*;
