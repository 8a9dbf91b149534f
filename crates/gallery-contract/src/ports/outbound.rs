//! # Driven Port (SPI - Outbound)
//!
//! The single environment input the gallery depends on: the current block
//! height, used to stamp exhibition windows. Adapters implement this trait;
//! the pure simulation pins it at genesis.

use crate::domain::value_objects::BlockHeight;

// =============================================================================
// BLOCK CLOCK
// =============================================================================

/// Source of the current ledger block height.
///
/// Implementations must be cheap and infallible; the height is read once
/// per exhibition creation.
pub trait BlockClock {
    /// Returns the current block height.
    fn current_height(&self) -> BlockHeight;
}

impl<C: BlockClock + ?Sized> BlockClock for std::sync::Arc<C> {
    fn current_height(&self) -> BlockHeight {
        (**self).current_height()
    }
}

impl<C: BlockClock + ?Sized> BlockClock for &C {
    fn current_height(&self) -> BlockHeight {
        (**self).current_height()
    }
}
