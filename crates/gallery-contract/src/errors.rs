//! # Error Types
//!
//! The flat error taxonomy of the gallery ledger. Every failure an entry
//! point can produce is one of these enumerable outcomes; nothing panics.
//! Codes 103 and 105 are reserved gaps in the wire numbering and stay
//! unassigned.

use thiserror::Error;

// =============================================================================
// CONTRACT ERRORS
// =============================================================================

/// Errors returned by gallery entry points.
///
/// Variants carry no payloads so the enum stays `Copy` and maps 1:1 onto
/// the numeric wire codes; call-site context travels in tracing fields.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractError {
    /// Caller is not the contract owner (code 100).
    #[error("caller is not the contract owner")]
    OwnerOnly,

    /// Referenced artwork does not exist (code 101).
    #[error("artwork not found")]
    NotFound,

    /// Caller lacks authority over the artwork, or attempted a
    /// self-purchase (code 102).
    #[error("caller is not authorized")]
    Unauthorized,

    /// Artwork is not listed for sale (code 104).
    #[error("artwork is not for sale")]
    NotForSale,

    /// Price is not positive, or the fee exceeds the cap (code 106).
    #[error("invalid price or fee")]
    InvalidPrice,
}

impl ContractError {
    /// Returns the numeric wire code for this error.
    #[must_use]
    pub const fn code(self) -> u16 {
        match self {
            Self::OwnerOnly => 100,
            Self::NotFound => 101,
            Self::Unauthorized => 102,
            Self::NotForSale => 104,
            Self::InvalidPrice => 106,
        }
    }

    /// Maps a wire code back to its error. Returns `None` for codes
    /// outside the taxonomy (including the reserved 103 and 105).
    #[must_use]
    pub const fn from_code(code: u16) -> Option<Self> {
        match code {
            100 => Some(Self::OwnerOnly),
            101 => Some(Self::NotFound),
            102 => Some(Self::Unauthorized),
            104 => Some(Self::NotForSale),
            106 => Some(Self::InvalidPrice),
            _ => None,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
