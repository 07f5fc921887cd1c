//! Pure domain models: the transaction record and its supporting types.
//! No I/O, no CLI, no storage.

pub mod categories;
pub mod transaction;

pub use categories::*;
pub use transaction::*;
