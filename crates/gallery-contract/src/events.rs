//! # Domain Events
//!
//! Payloads recorded by the service on every successful entry-point call.
//! Failed calls record nothing, mirroring the all-or-nothing mutation rule.
//! The log is a plain in-service `Vec`; any transport is an external
//! collaborator.

use crate::domain::value_objects::{ArtworkId, BlockHeight, ExhibitionId, Principal};
use serde::{Deserialize, Serialize};

// =============================================================================
// GALLERY EVENTS
// =============================================================================

/// One successful state transition of the gallery ledger.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GalleryEvent {
    /// An artwork was minted.
    ArtworkCreated {
        /// Assigned id.
        artwork_id: ArtworkId,
        /// Minting identity (initial owner).
        artist: Principal,
        /// Asking price at mint.
        price: u128,
    },
    /// An artwork's asking price changed (and the piece was re-listed).
    ArtworkRepriced {
        /// Repriced artwork.
        artwork_id: ArtworkId,
        /// Owner who issued the update.
        owner: Principal,
        /// The new asking price.
        new_price: u128,
    },
    /// Ownership transferred via purchase.
    ///
    /// `platform_fee_bps` is a snapshot of the fee at sale time. The ledger
    /// reads the fee but applies no settlement; the snapshot records that
    /// gap explicitly.
    ArtworkSold {
        /// Sold artwork.
        artwork_id: ArtworkId,
        /// Previous owner.
        seller: Principal,
        /// New owner.
        buyer: Principal,
        /// Price at which the piece was listed.
        price: u128,
        /// Platform fee in effect, read but not applied.
        platform_fee_bps: u16,
    },
    /// An exhibition was created.
    ExhibitionCreated {
        /// Assigned id.
        exhibition_id: ExhibitionId,
        /// Creating identity.
        curator: Principal,
        /// Block height at creation.
        start_block: BlockHeight,
        /// End of the exhibition window.
        end_block: BlockHeight,
    },
    /// A display right was granted (or re-granted).
    ExhibitionRightsApproved {
        /// The artwork the right covers.
        artwork_id: ArtworkId,
        /// The exhibition the right covers; may not exist.
        exhibition_id: ExhibitionId,
        /// Artwork owner who granted the right.
        granted_by: Principal,
    },
    /// The platform fee changed.
    PlatformFeeUpdated {
        /// Fee before the update.
        previous_bps: u16,
        /// Fee after the update.
        new_bps: u16,
    },
}

impl GalleryEvent {
    /// Short name of the event kind, for logging and assertions.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ArtworkCreated { .. } => "artwork_created",
            Self::ArtworkRepriced { .. } => "artwork_repriced",
            Self::ArtworkSold { .. } => "artwork_sold",
            Self::ExhibitionCreated { .. } => "exhibition_created",
            Self::ExhibitionRightsApproved { .. } => "exhibition_rights_approved",
            Self::PlatformFeeUpdated { .. } => "platform_fee_updated",
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
