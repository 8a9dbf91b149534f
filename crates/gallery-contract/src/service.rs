//! # Gallery Service
//!
//! The single owner of the ledger state. Implements `GalleryApi`: each entry
//! point validates its preconditions in order, then mutates, so a failing
//! call leaves the state byte-identical.
//!
//! Logging happens here and only here; the domain layer stays pure. Every
//! rejection is logged at `warn!` with its numeric wire code.

use crate::adapters::FixedBlockClock;
use crate::domain::entities::{
    Artwork, Exhibition, ExhibitionRight, GalleryConfig, GalleryState,
};
use crate::domain::invariants::limits;
use crate::domain::value_objects::{ArtworkId, ExhibitionId, Principal};
use crate::errors::ContractError;
use crate::events::GalleryEvent;
use crate::ports::inbound::GalleryApi;
use crate::ports::outbound::BlockClock;

use tracing::{debug, info, warn};

// =============================================================================
// STATISTICS
// =============================================================================

/// Operation counters for the gallery service.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct GalleryStats {
    /// Artworks minted.
    pub artworks_created: u64,
    /// Successful price updates.
    pub artworks_repriced: u64,
    /// Completed sales.
    pub artworks_sold: u64,
    /// Exhibitions created.
    pub exhibitions_created: u64,
    /// Display rights granted.
    pub rights_approved: u64,
    /// Platform fee updates.
    pub fee_updates: u64,
    /// Calls rejected by a precondition.
    pub rejected_calls: u64,
}

// =============================================================================
// GALLERY SERVICE
// =============================================================================

/// The gallery ledger state machine.
///
/// Owns the configuration, the state, the event log, and the statistics.
/// The caller owns the service's lifetime; all mutation goes through the
/// [`GalleryApi`] entry points.
pub struct GalleryService<C: BlockClock = FixedBlockClock> {
    /// Construction-time configuration.
    config: GalleryConfig,
    /// The complete ledger state.
    state: GalleryState,
    /// Environment-supplied block height.
    clock: C,
    /// Events recorded on successful calls, in order.
    events: Vec<GalleryEvent>,
    /// Operation counters.
    stats: GalleryStats,
}

impl<C: BlockClock> GalleryService<C> {
    /// Creates a service with an empty ledger at the configured initial fee.
    pub fn new(config: GalleryConfig, clock: C) -> Self {
        let state = GalleryState::with_fee(config.initial_platform_fee_bps);
        Self {
            config,
            state,
            clock,
            events: Vec::new(),
            stats: GalleryStats::default(),
        }
    }

    /// The service configuration.
    #[must_use]
    pub fn config(&self) -> &GalleryConfig {
        &self.config
    }

    /// Current operation counters.
    #[must_use]
    pub fn stats(&self) -> GalleryStats {
        self.stats
    }

    /// Events recorded so far, oldest first.
    #[must_use]
    pub fn events(&self) -> &[GalleryEvent] {
        &self.events
    }

    /// Drains and returns the recorded events.
    pub fn take_events(&mut self) -> Vec<GalleryEvent> {
        std::mem::take(&mut self.events)
    }

    /// Logs a rejection and counts it.
    fn reject(&mut self, op: &'static str, err: ContractError) -> ContractError {
        warn!(op, code = err.code(), error = %err, "entry point rejected");
        self.stats.rejected_calls += 1;
        err
    }
}

/// Create a gallery with a fixed genesis clock and the identity
/// `gallery-owner` as contract owner (for testing).
#[must_use]
pub fn create_test_gallery() -> GalleryService<FixedBlockClock> {
    GalleryService::new(
        GalleryConfig::new(Principal::new("gallery-owner")),
        FixedBlockClock::default(),
    )
}

// =============================================================================
// GalleryApi Implementation
// =============================================================================

impl<C: BlockClock> GalleryApi for GalleryService<C> {
    fn create_artwork(
        &mut self,
        sender: Principal,
        title: &str,
        description: &str,
        price: u128,
    ) -> Result<ArtworkId, ContractError> {
        let artwork_id = self.state.allocate_artwork_id();
        let artwork = Artwork::new(sender.clone(), title, description, price);
        self.state.artworks.insert(artwork_id, artwork);

        info!(%artwork_id, artist = %sender, price, "artwork minted");
        self.stats.artworks_created += 1;
        self.events.push(GalleryEvent::ArtworkCreated {
            artwork_id,
            artist: sender,
            price,
        });
        Ok(artwork_id)
    }

    fn update_artwork_price(
        &mut self,
        sender: &Principal,
        artwork_id: ArtworkId,
        new_price: u128,
    ) -> Result<(), ContractError> {
        let outcome = match self.state.artworks.get_mut(&artwork_id) {
            None => Err(ContractError::NotFound),
            Some(artwork) => artwork
                .require_owner(sender)
                .and_then(|()| artwork.reprice(new_price)),
        };

        match outcome {
            Ok(()) => {
                debug!(%artwork_id, owner = %sender, new_price, "artwork repriced");
                self.stats.artworks_repriced += 1;
                self.events.push(GalleryEvent::ArtworkRepriced {
                    artwork_id,
                    owner: sender.clone(),
                    new_price,
                });
                Ok(())
            }
            Err(err) => Err(self.reject("update_artwork_price", err)),
        }
    }

    fn buy_artwork(
        &mut self,
        sender: Principal,
        artwork_id: ArtworkId,
    ) -> Result<(), ContractError> {
        // Snapshot of the fee in effect; read but never applied (the
        // ledger models no settlement).
        let platform_fee_bps = self.state.platform_fee_bps;

        let outcome = match self.state.artworks.get_mut(&artwork_id) {
            None => Err(ContractError::NotFound),
            Some(artwork) => {
                let seller = artwork.owner.clone();
                artwork
                    .sell_to(sender.clone())
                    .map(|()| (seller, artwork.price))
            }
        };

        match outcome {
            Ok((seller, price)) => {
                info!(
                    %artwork_id,
                    seller = %seller,
                    buyer = %sender,
                    price,
                    platform_fee_bps,
                    "artwork sold"
                );
                self.stats.artworks_sold += 1;
                self.events.push(GalleryEvent::ArtworkSold {
                    artwork_id,
                    seller,
                    buyer: sender,
                    price,
                    platform_fee_bps,
                });
                Ok(())
            }
            Err(err) => Err(self.reject("buy_artwork", err)),
        }
    }

    fn create_exhibition(
        &mut self,
        sender: Principal,
        title: &str,
        description: &str,
        artwork_ids: Vec<ArtworkId>,
        duration: u64,
    ) -> Result<ExhibitionId, ContractError> {
        let start_block = self.clock.current_height();
        let exhibition_id = self.state.allocate_exhibition_id();
        let exhibition = Exhibition::new(
            sender.clone(),
            title,
            description,
            artwork_ids,
            start_block,
            duration,
        );
        let end_block = exhibition.end_block;
        self.state.exhibitions.insert(exhibition_id, exhibition);

        info!(%exhibition_id, curator = %sender, %start_block, %end_block, "exhibition created");
        self.stats.exhibitions_created += 1;
        self.events.push(GalleryEvent::ExhibitionCreated {
            exhibition_id,
            curator: sender,
            start_block,
            end_block,
        });
        Ok(exhibition_id)
    }

    fn approve_exhibition_rights(
        &mut self,
        sender: &Principal,
        artwork_id: ArtworkId,
        exhibition_id: ExhibitionId,
    ) -> Result<(), ContractError> {
        // The exhibition itself is deliberately not checked for existence.
        let outcome = match self.state.artworks.get(&artwork_id) {
            None => Err(ContractError::NotFound),
            Some(artwork) => artwork.require_owner(sender),
        };

        match outcome {
            Ok(()) => {
                self.state
                    .exhibition_rights
                    .insert((artwork_id, exhibition_id), ExhibitionRight::granted());
                debug!(%artwork_id, %exhibition_id, granted_by = %sender, "display rights approved");
                self.stats.rights_approved += 1;
                self.events.push(GalleryEvent::ExhibitionRightsApproved {
                    artwork_id,
                    exhibition_id,
                    granted_by: sender.clone(),
                });
                Ok(())
            }
            Err(err) => Err(self.reject("approve_exhibition_rights", err)),
        }
    }

    fn set_platform_fee(
        &mut self,
        sender: &Principal,
        new_fee_bps: u16,
    ) -> Result<(), ContractError> {
        let outcome = if *sender != self.config.contract_owner {
            Err(ContractError::OwnerOnly)
        } else if new_fee_bps > limits::MAX_PLATFORM_FEE_BPS {
            Err(ContractError::InvalidPrice)
        } else {
            Ok(())
        };

        match outcome {
            Ok(()) => {
                let previous_bps = self.state.platform_fee_bps;
                self.state.platform_fee_bps = new_fee_bps;

                info!(previous_bps, new_bps = new_fee_bps, "platform fee updated");
                self.stats.fee_updates += 1;
                self.events.push(GalleryEvent::PlatformFeeUpdated {
                    previous_bps,
                    new_bps: new_fee_bps,
                });
                Ok(())
            }
            Err(err) => Err(self.reject("set_platform_fee", err)),
        }
    }

    fn artwork(&self, artwork_id: ArtworkId) -> Option<&Artwork> {
        self.state.artworks.get(&artwork_id)
    }

    fn exhibition(&self, exhibition_id: ExhibitionId) -> Option<&Exhibition> {
        self.state.exhibitions.get(&exhibition_id)
    }

    fn exhibition_right(
        &self,
        artwork_id: ArtworkId,
        exhibition_id: ExhibitionId,
    ) -> Option<&ExhibitionRight> {
        self.state.exhibition_rights.get(&(artwork_id, exhibition_id))
    }

    fn platform_fee_bps(&self) -> u16 {
        self.state.platform_fee_bps
    }

    fn artwork_count(&self) -> usize {
        self.state.artworks.len()
    }

    fn exhibition_count(&self) -> usize {
        self.state.exhibitions.len()
    }

    fn state(&self) -> &GalleryState {
        &self.state
    }
}

// =============================================================================
// TESTS
// =============================================================================
