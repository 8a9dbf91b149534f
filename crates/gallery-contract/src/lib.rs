//! # Gallery Contract - Art Gallery Ledger State Machine
//!
//! In-memory state-transition logic for a smart-contract-style art gallery:
//! minting digital artworks, transferring ownership via purchase, curating
//! exhibitions, granting per-exhibition display rights, and one administrative
//! parameter (the platform fee) gated to a fixed contract-owner identity.
//!
//! There is no networking, persistence, or concurrency here. Every entry
//! point is a synchronous, total function: it validates its preconditions
//! fully, then mutates, and always returns a tagged result instead of
//! panicking. A failing call leaves the state untouched.
//!
//! ## Entry Points
//!
//! | Operation | Success value | Error codes (first failure wins) |
//! |-----------|---------------|----------------------------------|
//! | `create_artwork` | `ArtworkId` | — (always succeeds) |
//! | `update_artwork_price` | `()` | 101 NotFound, 102 Unauthorized, 106 InvalidPrice |
//! | `buy_artwork` | `()` | 101 NotFound, 102 Unauthorized, 104 NotForSale |
//! | `create_exhibition` | `ExhibitionId` | — (always succeeds) |
//! | `approve_exhibition_rights` | `()` | 101 NotFound, 102 Unauthorized |
//! | `set_platform_fee` | `()` | 100 OwnerOnly, 106 InvalidPrice |
//!
//! ## Domain Invariants
//!
//! | Invariant | Enforcement |
//! |-----------|-------------|
//! | Artwork/exhibition ids are dense (`0..n`) in creation order | `domain/invariants.rs` - `check_dense_artwork_ids()` / `check_dense_exhibition_ids()` |
//! | Every artwork owner is a non-empty identity | `domain/invariants.rs` - `check_owners_valid()` |
//! | Rights entries exist only for approved pairs | `domain/invariants.rs` - `check_rights_approved()` |
//! | Platform fee never exceeds 1000 (100%) | `domain/invariants.rs` - `check_fee_cap()` |
//!
//! ## Usage Example
//!
//! ```
//! use gallery_contract::prelude::*;
//!
//! let config = GalleryConfig::new(Principal::new("gallery-owner"));
//! let mut gallery = GalleryService::new(config, FixedBlockClock::default());
//!
//! let artist = Principal::new("artist-a");
//! let id = gallery
//!     .create_artwork(artist.clone(), "Mona Lisa", "A portrait", 1_000_000_000)
//!     .expect("creation never fails");
//!
//! assert_eq!(gallery.artwork(id).map(|a| a.owner.clone()), Some(artist));
//! ```

// Crate-level lints
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// =============================================================================
// MODULES
// =============================================================================

pub mod adapters;
pub mod domain;
pub mod errors;
pub mod events;
pub mod ports;
pub mod service;

// =============================================================================
// PRELUDE
// =============================================================================

/// Convenient re-exports for common usage.
pub mod prelude {
    // Domain entities
    pub use crate::domain::entities::{
        Artwork, Exhibition, ExhibitionRight, GalleryConfig, GalleryState,
    };

    // Value objects
    pub use crate::domain::value_objects::{ArtworkId, BlockHeight, ExhibitionId, Principal};

    // Invariants
    pub use crate::domain::invariants::{
        check_all_invariants, limits, InvariantCheckResult, InvariantViolation,
    };

    // Ports
    pub use crate::ports::inbound::GalleryApi;
    pub use crate::ports::outbound::BlockClock;

    // Adapters
    pub use crate::adapters::{FixedBlockClock, ManualBlockClock};

    // Events
    pub use crate::events::GalleryEvent;

    // Errors
    pub use crate::errors::ContractError;

    // Service
    pub use crate::service::{create_test_gallery, GalleryService, GalleryStats};
}

// =============================================================================
// CRATE INFO
// =============================================================================

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// =============================================================================
// TESTS
// =============================================================================
