//! # Driving Port (API - Inbound)
//!
//! The public interface of the gallery ledger. Hosting environments (a test
//! harness here; conceptually one call per ledger transaction) drive the
//! state machine through this trait.
//!
//! All methods are synchronous: every entry point runs to completion
//! atomically from the caller's perspective, with no suspension points.

use crate::domain::entities::{Artwork, Exhibition, ExhibitionRight, GalleryState};
use crate::domain::value_objects::{ArtworkId, ExhibitionId, Principal};
use crate::errors::ContractError;

// =============================================================================
// GALLERY API (Primary Driving Port)
// =============================================================================

/// Entry points and read surface of the gallery ledger.
///
/// Entry points are total over their input domain: they always return a
/// `Result`, never panic, and validation completes before any mutation, so
/// a failing call leaves state unchanged.
pub trait GalleryApi {
    /// Mints a new artwork owned by `sender` and listed for sale.
    ///
    /// Always succeeds; neither price nor text is validated. Returns the
    /// assigned sequential id.
    fn create_artwork(
        &mut self,
        sender: Principal,
        title: &str,
        description: &str,
        price: u128,
    ) -> Result<ArtworkId, ContractError>;

    /// Sets a new asking price and re-lists the artwork.
    ///
    /// # Errors
    ///
    /// First failure wins:
    /// * `NotFound` (101) - no artwork with `artwork_id`
    /// * `Unauthorized` (102) - `sender` is not the current owner
    /// * `InvalidPrice` (106) - `new_price` is zero
    fn update_artwork_price(
        &mut self,
        sender: &Principal,
        artwork_id: ArtworkId,
        new_price: u128,
    ) -> Result<(), ContractError>;

    /// Transfers ownership of a listed artwork to `sender` and delists it.
    ///
    /// No funds are transferred and the platform fee is not applied; the
    /// ledger models ownership transitions only. The fee in effect is
    /// snapshotted on the resulting `ArtworkSold` event.
    ///
    /// # Errors
    ///
    /// First failure wins:
    /// * `NotFound` (101) - no artwork with `artwork_id`
    /// * `Unauthorized` (102) - `sender` already owns the artwork
    /// * `NotForSale` (104) - the artwork is not listed
    fn buy_artwork(
        &mut self,
        sender: Principal,
        artwork_id: ArtworkId,
    ) -> Result<(), ContractError>;

    /// Creates an exhibition curated by `sender`, running for `duration`
    /// blocks from the current height.
    ///
    /// Always succeeds. `artwork_ids` is stored verbatim, with no
    /// existence validation. Returns the assigned sequential id.
    fn create_exhibition(
        &mut self,
        sender: Principal,
        title: &str,
        description: &str,
        artwork_ids: Vec<ArtworkId>,
        duration: u64,
    ) -> Result<ExhibitionId, ContractError>;

    /// Grants (or re-grants) a display right for `artwork_id` in
    /// `exhibition_id`.
    ///
    /// The exhibition is deliberately not checked for existence: rights
    /// may be approved ahead of the exhibition's creation.
    ///
    /// # Errors
    ///
    /// First failure wins:
    /// * `NotFound` (101) - no artwork with `artwork_id`
    /// * `Unauthorized` (102) - `sender` is not the artwork's owner
    fn approve_exhibition_rights(
        &mut self,
        sender: &Principal,
        artwork_id: ArtworkId,
        exhibition_id: ExhibitionId,
    ) -> Result<(), ContractError>;

    /// Sets the platform fee, in fee units (1000 = 100%). Zero is allowed.
    ///
    /// # Errors
    ///
    /// First failure wins:
    /// * `OwnerOnly` (100) - `sender` is not the contract owner
    /// * `InvalidPrice` (106) - `new_fee_bps` exceeds 1000
    fn set_platform_fee(
        &mut self,
        sender: &Principal,
        new_fee_bps: u16,
    ) -> Result<(), ContractError>;

    // -------------------------------------------------------------------------
    // Read surface
    // -------------------------------------------------------------------------

    /// Looks up an artwork record.
    fn artwork(&self, artwork_id: ArtworkId) -> Option<&Artwork>;

    /// Looks up an exhibition record.
    fn exhibition(&self, exhibition_id: ExhibitionId) -> Option<&Exhibition>;

    /// Looks up a display right by its `(artwork, exhibition)` pair.
    fn exhibition_right(
        &self,
        artwork_id: ArtworkId,
        exhibition_id: ExhibitionId,
    ) -> Option<&ExhibitionRight>;

    /// Current platform fee in fee units.
    fn platform_fee_bps(&self) -> u16;

    /// Number of minted artworks.
    fn artwork_count(&self) -> usize;

    /// Number of created exhibitions.
    fn exhibition_count(&self) -> usize;

    /// The complete ledger state, for invariant auditing.
    fn state(&self) -> &GalleryState;
}
