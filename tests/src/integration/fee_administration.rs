//! # Platform-Fee Administration
//!
//! The single administrative parameter, gated to the configured contract
//! owner. Fee units: 1000 = 100%, initialized to 50 (5%).

#[cfg(test)]
mod tests {
    use gallery_contract::prelude::*;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn owner() -> Principal {
        Principal::new("gallery-owner")
    }

    fn stranger() -> Principal {
        Principal::new("random-caller")
    }

    // =============================================================================
    // OWNER GATE
    // =============================================================================

    #[test]
    fn test_owner_updates_fee() {
        let mut gallery = create_test_gallery();
        assert_eq!(gallery.platform_fee_bps(), limits::DEFAULT_PLATFORM_FEE_BPS);

        gallery.set_platform_fee(&owner(), 30).unwrap();

        assert_eq!(gallery.platform_fee_bps(), 30);
        assert_eq!(
            gallery.events().last().unwrap(),
            &GalleryEvent::PlatformFeeUpdated {
                previous_bps: 50,
                new_bps: 30,
            }
        );
    }

    /// Non-owner attempts fail with code 100 and leave the fee untouched.
    #[test]
    fn test_non_owner_rejected_with_code_100() {
        let mut gallery = create_test_gallery();

        let err = gallery.set_platform_fee(&stranger(), 30).unwrap_err();
        assert_eq!(err, ContractError::OwnerOnly);
        assert_eq!(err.code(), 100);
        assert_eq!(gallery.platform_fee_bps(), 50);
        assert_eq!(gallery.stats().rejected_calls, 1);
    }

    /// The gate is identity-based, not role-based: even an artist who owns
    /// every artwork in the gallery cannot touch the fee.
    #[test]
    fn test_artwork_ownership_grants_no_admin_rights() {
        let mut gallery = create_test_gallery();
        let artist = Principal::new("prolific-artist");
        for i in 0..3 {
            gallery
                .create_artwork(artist.clone(), "Untitled", "", 100 + i)
                .unwrap();
        }

        assert_eq!(
            gallery.set_platform_fee(&artist, 10).unwrap_err().code(),
            100
        );
    }

    /// The owner is injected configuration, not a hard-coded identity.
    #[test]
    fn test_owner_identity_is_configured() {
        let admin = Principal::new("custom-admin");
        let mut gallery = GalleryService::new(
            GalleryConfig::new(admin.clone()).with_initial_fee(100),
            FixedBlockClock::default(),
        );

        assert_eq!(gallery.platform_fee_bps(), 100);
        // The default test owner has no power here
        assert_eq!(
            gallery.set_platform_fee(&Principal::new("gallery-owner"), 10),
            Err(ContractError::OwnerOnly)
        );
        gallery.set_platform_fee(&admin, 10).unwrap();
        assert_eq!(gallery.platform_fee_bps(), 10);
    }

    // =============================================================================
    // CAP ENFORCEMENT
    // =============================================================================

    /// Above-cap fees always fail and leave the prior value in place.
    #[test]
    fn test_fee_cap_enforced() {
        let mut gallery = create_test_gallery();

        let err = gallery.set_platform_fee(&owner(), 1001).unwrap_err();
        assert_eq!(err, ContractError::InvalidPrice);
        assert_eq!(err.code(), 106);
        assert_eq!(gallery.platform_fee_bps(), 50);

        // Regardless of caller, an above-cap request never lands
        assert!(gallery.set_platform_fee(&stranger(), 5_000).is_err());
        assert_eq!(gallery.platform_fee_bps(), 50);
        assert!(check_all_invariants(gallery.state()).is_valid());
    }

    /// Both boundary values are legal: the full cap and zero.
    #[test]
    fn test_fee_boundaries_allowed() {
        let mut gallery = create_test_gallery();

        gallery
            .set_platform_fee(&owner(), limits::MAX_PLATFORM_FEE_BPS)
            .unwrap();
        assert_eq!(gallery.platform_fee_bps(), 1000);

        gallery.set_platform_fee(&owner(), 0).unwrap();
        assert_eq!(gallery.platform_fee_bps(), 0);

        assert_eq!(gallery.stats().fee_updates, 2);
    }

    /// The fee is read at sale time but never applied to any balance; the
    /// sale event carries the snapshot.
    #[test]
    fn test_fee_snapshot_on_sale() {
        let mut gallery = create_test_gallery();
        let artist = Principal::new("artist-a");
        let id = gallery
            .create_artwork(artist.clone(), "One", "", 10_000)
            .unwrap();

        gallery.set_platform_fee(&owner(), 250).unwrap();
        gallery
            .buy_artwork(Principal::new("collector-b"), id)
            .unwrap();

        match gallery.events().last().unwrap() {
            GalleryEvent::ArtworkSold {
                platform_fee_bps,
                price,
                ..
            } => {
                assert_eq!(*platform_fee_bps, 250);
                // The full listed price is untouched by the fee
                assert_eq!(*price, 10_000);
            }
            other => panic!("expected ArtworkSold, got {other:?}"),
        }
    }
}
