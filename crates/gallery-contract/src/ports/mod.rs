//! # Ports Layer (Middle Hexagon)
//!
//! Trait definitions between the gallery domain and the outside world.
//!
//! - **Driving Port (Inbound)**: `GalleryApi` - the ledger entry points
//! - **Driven Port (Outbound)**: `BlockClock` - environment-supplied height
//!
//! No concrete implementations in this module.

pub mod inbound;
pub mod outbound;

pub use inbound::*;
pub use outbound::*;
