//! # Adapters Layer (Outer Hexagon)
//!
//! Concrete implementations of the driven ports. Only the block clock has
//! adapters here; everything else the ledger touches lives in memory inside
//! the service.

pub mod clock;

pub use clock::*;
