//! # Value Objects
//!
//! Immutable domain primitives for the gallery ledger.
//! These types represent concepts defined by their value, not identity.

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// PRINCIPAL (opaque identity)
// =============================================================================

/// An opaque, comparable participant identity (artist, buyer, curator,
/// contract owner).
///
/// The ledger never interprets the contents; identities are supplied by the
/// environment and compared for equality only.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Creates a principal from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the underlying identity string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if the identity string is empty.
    ///
    /// An empty principal is never produced by well-behaved callers; the
    /// invariant checker audits for it.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Principal({})", self.0)
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for Principal {
    fn from(id: String) -> Self {
        Self(id)
    }
}

// =============================================================================
// RECORD IDS (sequential, dense)
// =============================================================================

/// Identifier of an artwork record.
///
/// Assigned sequentially at creation, dense (`0..n`) in creation order,
/// never reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtworkId(u64);

impl ArtworkId {
    /// Creates an artwork id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ArtworkId({})", self.0)
    }
}

impl fmt::Display for ArtworkId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an exhibition record.
///
/// Same numbering discipline as [`ArtworkId`], in its own sequence.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ExhibitionId(u64);

impl ExhibitionId {
    /// Creates an exhibition id from its raw value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw id value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ExhibitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExhibitionId({})", self.0)
    }
}

impl fmt::Display for ExhibitionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// BLOCK HEIGHT
// =============================================================================

/// A ledger block height, supplied by the environment.
///
/// The pure simulation runs at genesis (height 0).
#[derive(
    Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize, Debug,
)]
pub struct BlockHeight(u64);

impl BlockHeight {
    /// Genesis height.
    pub const GENESIS: Self = Self(0);

    /// Creates a block height from its raw value.
    #[must_use]
    pub const fn new(height: u64) -> Self {
        Self(height)
    }

    /// Returns the raw height value.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    /// Returns the height `blocks` past this one, saturating at `u64::MAX`.
    #[must_use]
    pub const fn offset_by(self, blocks: u64) -> Self {
        Self(self.0.saturating_add(blocks))
    }
}

impl fmt::Display for BlockHeight {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

// =============================================================================
// TESTS
// =============================================================================
