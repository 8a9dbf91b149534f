//! # Block Clock Adapters
//!
//! In-memory `BlockClock` implementations for simulation and testing.
//! A production deployment would read the height from its host ledger.

use crate::domain::value_objects::BlockHeight;
use crate::ports::outbound::BlockClock;
use std::sync::atomic::{AtomicU64, Ordering};

// =============================================================================
// FIXED BLOCK CLOCK
// =============================================================================

/// A clock that always reports the same height.
///
/// The default (genesis) reproduces the pure simulation, where every
/// exhibition starts at block 0.
#[derive(Clone, Copy, Debug, Default)]
pub struct FixedBlockClock {
    height: BlockHeight,
}

impl FixedBlockClock {
    /// Creates a clock pinned at `height`.
    #[must_use]
    pub const fn at(height: BlockHeight) -> Self {
        Self { height }
    }
}

impl BlockClock for FixedBlockClock {
    fn current_height(&self) -> BlockHeight {
        self.height
    }
}

// =============================================================================
// MANUAL BLOCK CLOCK
// =============================================================================

/// A clock tests advance explicitly.
///
/// Interior-mutable so the same handle can be shared (behind an `Arc`)
/// between the service and the test driver.
#[derive(Debug, Default)]
pub struct ManualBlockClock {
    height: AtomicU64,
}

impl ManualBlockClock {
    /// Creates a clock starting at genesis.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a clock starting at `height`.
    #[must_use]
    pub fn starting_at(height: BlockHeight) -> Self {
        Self {
            height: AtomicU64::new(height.value()),
        }
    }

    /// Sets the reported height.
    pub fn set_height(&self, height: BlockHeight) {
        self.height.store(height.value(), Ordering::Relaxed);
    }

    /// Advances the reported height by `blocks`.
    pub fn advance(&self, blocks: u64) {
        self.height.fetch_add(blocks, Ordering::Relaxed);
    }
}

impl BlockClock for ManualBlockClock {
    fn current_height(&self) -> BlockHeight {
        BlockHeight::new(self.height.load(Ordering::Relaxed))
    }
}

// =============================================================================
// TESTS
// =============================================================================
