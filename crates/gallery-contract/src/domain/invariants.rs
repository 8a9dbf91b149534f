//! # Domain Invariants
//!
//! Structural invariants of the gallery state. These hold after every
//! entry-point call because validation completes before any mutation; the
//! checkers here let tests audit that property directly.
//!
//! Note: "for_sale implies positive price" is NOT an invariant. Minting is
//! deliberately unvalidated, so a zero-price listed artwork is legal state;
//! the positive-price rule binds only the repricing path.

use crate::domain::entities::GalleryState;

// =============================================================================
// INVARIANT CHECKS
// =============================================================================

/// Artwork ids are dense: exactly `0..next_artwork_id`, each present once.
#[must_use]
pub fn check_dense_artwork_ids(state: &GalleryState) -> bool {
    state.artworks.len() as u64 == state.next_artwork_id
        && state
            .artworks
            .keys()
            .enumerate()
            .all(|(i, id)| id.value() == i as u64)
}

/// Exhibition ids are dense: exactly `0..next_exhibition_id`, each present
/// once.
#[must_use]
pub fn check_dense_exhibition_ids(state: &GalleryState) -> bool {
    state.exhibitions.len() as u64 == state.next_exhibition_id
        && state
            .exhibitions
            .keys()
            .enumerate()
            .all(|(i, id)| id.value() == i as u64)
}

/// Every artwork owner (and artist) is a non-empty identity.
#[must_use]
pub fn check_owners_valid(state: &GalleryState) -> bool {
    state
        .artworks
        .values()
        .all(|art| !art.owner.is_empty() && !art.artist.is_empty())
}

/// Every stored right was explicitly approved.
#[must_use]
pub fn check_rights_approved(state: &GalleryState) -> bool {
    state.exhibition_rights.values().all(|right| right.approved)
}

/// The platform fee never exceeds the 100% cap.
#[must_use]
pub fn check_fee_cap(state: &GalleryState) -> bool {
    state.platform_fee_bps <= limits::MAX_PLATFORM_FEE_BPS
}

/// Check all invariants at once.
#[must_use]
pub fn check_all_invariants(state: &GalleryState) -> InvariantCheckResult {
    let mut violations = Vec::new();

    if !check_dense_artwork_ids(state) {
        violations.push(InvariantViolation::SparseArtworkIds {
            stored: state.artworks.len(),
            next_id: state.next_artwork_id,
        });
    }

    if !check_dense_exhibition_ids(state) {
        violations.push(InvariantViolation::SparseExhibitionIds {
            stored: state.exhibitions.len(),
            next_id: state.next_exhibition_id,
        });
    }

    if !check_owners_valid(state) {
        violations.push(InvariantViolation::EmptyIdentity);
    }

    if !check_rights_approved(state) {
        violations.push(InvariantViolation::UnapprovedRight);
    }

    if !check_fee_cap(state) {
        violations.push(InvariantViolation::FeeAboveCap {
            fee_bps: state.platform_fee_bps,
            cap: limits::MAX_PLATFORM_FEE_BPS,
        });
    }

    if violations.is_empty() {
        InvariantCheckResult::Valid
    } else {
        InvariantCheckResult::Invalid(violations)
    }
}

// =============================================================================
// INVARIANT TYPES
// =============================================================================

/// Result of checking all invariants.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantCheckResult {
    /// All invariants hold.
    Valid,
    /// One or more invariants violated.
    Invalid(Vec<InvariantViolation>),
}

impl InvariantCheckResult {
    /// Returns true if all invariants hold.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Specific invariant violation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Artwork ids are not dense in creation order.
    SparseArtworkIds {
        /// Number of stored artwork records.
        stored: usize,
        /// Value of the next-id counter.
        next_id: u64,
    },
    /// Exhibition ids are not dense in creation order.
    SparseExhibitionIds {
        /// Number of stored exhibition records.
        stored: usize,
        /// Value of the next-id counter.
        next_id: u64,
    },
    /// An artwork carries an empty owner or artist identity.
    EmptyIdentity,
    /// A stored right is not approved.
    UnapprovedRight,
    /// The platform fee exceeds the cap.
    FeeAboveCap {
        /// Current fee value.
        fee_bps: u16,
        /// Maximum allowed fee.
        cap: u16,
    },
}

impl std::fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SparseArtworkIds { stored, next_id } => {
                write!(f, "artwork ids not dense: {stored} stored, counter at {next_id}")
            }
            Self::SparseExhibitionIds { stored, next_id } => {
                write!(
                    f,
                    "exhibition ids not dense: {stored} stored, counter at {next_id}"
                )
            }
            Self::EmptyIdentity => write!(f, "artwork with empty owner or artist identity"),
            Self::UnapprovedRight => write!(f, "stored exhibition right is not approved"),
            Self::FeeAboveCap { fee_bps, cap } => {
                write!(f, "platform fee above cap: {fee_bps} > {cap}")
            }
        }
    }
}

// =============================================================================
// LEDGER LIMIT CONSTANTS
// =============================================================================

/// Fixed limits of the gallery ledger.
pub mod limits {
    /// Maximum platform fee, in fee units.
    pub const MAX_PLATFORM_FEE_BPS: u16 = 1000;

    /// Platform fee at initialization (5%).
    pub const DEFAULT_PLATFORM_FEE_BPS: u16 = 50;

    /// The fee scale: this many units represent 100%.
    pub const FEE_SCALE: u16 = 1000;
}

// =============================================================================
// TESTS
// =============================================================================
