//! # Domain Entities
//!
//! Core records of the gallery ledger plus the explicit state struct that
//! owns them. Entities carry their own guard methods so the authorization
//! rules live next to the data they protect; guards return `Result` and
//! never mutate on failure.

use super::value_objects::{ArtworkId, BlockHeight, ExhibitionId, Principal};
use crate::errors::ContractError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// =============================================================================
// ARTWORK
// =============================================================================

/// A minted digital artwork.
///
/// Created once, never deleted. `owner` and `for_sale` change over the
/// record's lifetime; `artist` is fixed at mint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artwork {
    /// The minting identity. Immutable.
    pub artist: Principal,
    /// Title text.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Asking price. Not validated at mint; repricing requires a positive
    /// value.
    pub price: u128,
    /// Current owner. Initialized to the artist.
    pub owner: Principal,
    /// Whether the artwork is currently listed for sale.
    pub for_sale: bool,
}

impl Artwork {
    /// Mints a new artwork owned by its artist and listed for sale.
    ///
    /// Minting performs no validation: any price (including zero) and any
    /// text is accepted, matching the ledger's permissive creation rule.
    pub fn new(
        artist: Principal,
        title: impl Into<String>,
        description: impl Into<String>,
        price: u128,
    ) -> Self {
        Self {
            owner: artist.clone(),
            artist,
            title: title.into(),
            description: description.into(),
            price,
            for_sale: true,
        }
    }

    /// Returns true if `who` is the current owner.
    #[must_use]
    pub fn is_owned_by(&self, who: &Principal) -> bool {
        self.owner == *who
    }

    /// Guards that `who` is the current owner.
    pub fn require_owner(&self, who: &Principal) -> Result<(), ContractError> {
        if self.is_owned_by(who) {
            Ok(())
        } else {
            Err(ContractError::Unauthorized)
        }
    }

    /// Sets a new asking price and re-lists the artwork.
    ///
    /// Fails with `InvalidPrice` if `new_price` is zero; on failure the
    /// record is unchanged.
    pub fn reprice(&mut self, new_price: u128) -> Result<(), ContractError> {
        if new_price == 0 {
            return Err(ContractError::InvalidPrice);
        }
        self.price = new_price;
        self.for_sale = true;
        Ok(())
    }

    /// Transfers ownership to `buyer` and delists the artwork.
    ///
    /// Self-purchase is rejected before the listing check, so an owner
    /// buying their own listed piece sees `Unauthorized`, never
    /// `NotForSale`.
    pub fn sell_to(&mut self, buyer: Principal) -> Result<(), ContractError> {
        if self.is_owned_by(&buyer) {
            return Err(ContractError::Unauthorized);
        }
        if !self.for_sale {
            return Err(ContractError::NotForSale);
        }
        self.owner = buyer;
        self.for_sale = false;
        Ok(())
    }
}

// =============================================================================
// EXHIBITION
// =============================================================================

/// A curated exhibition.
///
/// Immutable after creation, never deleted. The artwork list is stored
/// verbatim: curators may reference ids that do not (yet) exist.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exhibition {
    /// The creating identity. Immutable.
    pub curator: Principal,
    /// Title text.
    pub title: String,
    /// Description text.
    pub description: String,
    /// Ordered artwork references, not validated against existence.
    pub artwork_ids: Vec<ArtworkId>,
    /// Block height at creation.
    pub start_block: BlockHeight,
    /// `start_block + duration`, saturating.
    pub end_block: BlockHeight,
}

impl Exhibition {
    /// Creates an exhibition running for `duration` blocks from
    /// `start_block`.
    pub fn new(
        curator: Principal,
        title: impl Into<String>,
        description: impl Into<String>,
        artwork_ids: Vec<ArtworkId>,
        start_block: BlockHeight,
        duration: u64,
    ) -> Self {
        Self {
            curator,
            title: title.into(),
            description: description.into(),
            artwork_ids,
            start_block,
            end_block: start_block.offset_by(duration),
        }
    }

    /// Returns true if the exhibition is running at `height`
    /// (start inclusive, end exclusive).
    #[must_use]
    pub fn is_running_at(&self, height: BlockHeight) -> bool {
        self.start_block <= height && height < self.end_block
    }
}

// =============================================================================
// EXHIBITION RIGHT
// =============================================================================

/// A per-exhibition display right for one artwork.
///
/// Keyed by `(ArtworkId, ExhibitionId)` in the state map; created or
/// overwritten only by an explicit approval, never deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionRight {
    /// Whether display is approved. Always true for stored entries.
    pub approved: bool,
}

impl ExhibitionRight {
    /// An approved right.
    #[must_use]
    pub const fn granted() -> Self {
        Self { approved: true }
    }
}

// =============================================================================
// CONFIGURATION
// =============================================================================

/// Construction-time gallery configuration.
///
/// The contract owner is injected here rather than hard-coded, so tests can
/// isolate administrative flows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// The fixed identity allowed to administer the platform fee.
    pub contract_owner: Principal,
    /// Fee at construction, in fee units (1000 = 100%).
    pub initial_platform_fee_bps: u16,
}

impl GalleryConfig {
    /// Creates a config with the default initial fee (50 = 5%).
    #[must_use]
    pub fn new(contract_owner: Principal) -> Self {
        Self {
            contract_owner,
            initial_platform_fee_bps: super::invariants::limits::DEFAULT_PLATFORM_FEE_BPS,
        }
    }

    /// Overrides the initial platform fee.
    #[must_use]
    pub fn with_initial_fee(mut self, fee_bps: u16) -> Self {
        self.initial_platform_fee_bps = fee_bps;
        self
    }
}

// =============================================================================
// GALLERY STATE
// =============================================================================

/// The complete in-memory ledger state.
///
/// An explicit struct owned by the service (no process-wide singletons);
/// mutation happens only through the service entry points.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    /// All minted artworks, keyed by id.
    pub artworks: BTreeMap<ArtworkId, Artwork>,
    /// All exhibitions, keyed by id.
    pub exhibitions: BTreeMap<ExhibitionId, Exhibition>,
    /// Display rights, keyed by `(artwork, exhibition)` pair.
    pub exhibition_rights: BTreeMap<(ArtworkId, ExhibitionId), ExhibitionRight>,
    /// Next artwork id to assign. Monotonic, never reused.
    pub next_artwork_id: u64,
    /// Next exhibition id to assign. Monotonic, never reused.
    pub next_exhibition_id: u64,
    /// Current platform fee in fee units (1000 = 100%).
    pub platform_fee_bps: u16,
}

impl GalleryState {
    /// Creates an empty state with the given starting fee.
    #[must_use]
    pub fn with_fee(platform_fee_bps: u16) -> Self {
        Self {
            platform_fee_bps,
            ..Self::default()
        }
    }

    /// Assigns and returns the next artwork id.
    pub fn allocate_artwork_id(&mut self) -> ArtworkId {
        let id = ArtworkId::new(self.next_artwork_id);
        self.next_artwork_id += 1;
        id
    }

    /// Assigns and returns the next exhibition id.
    pub fn allocate_exhibition_id(&mut self) -> ExhibitionId {
        let id = ExhibitionId::new(self.next_exhibition_id);
        self.next_exhibition_id += 1;
        id
    }
}

// =============================================================================
// TESTS
// =============================================================================
