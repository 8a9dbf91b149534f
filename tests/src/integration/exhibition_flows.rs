//! # Exhibition and Display-Rights Flows
//!
//! Curation scenarios: exhibition windows stamped from the block clock,
//! verbatim (unvalidated) artwork lists, and per-exhibition display rights
//! granted by artwork owners - including rights for exhibitions that do not
//! exist yet, which the ledger permits by design.

#[cfg(test)]
mod tests {
    use gallery_contract::prelude::*;
    use std::sync::Arc;

    // =============================================================================
    // TEST FIXTURES
    // =============================================================================

    fn artist() -> Principal {
        Principal::new("artist-a")
    }

    fn curator() -> Principal {
        Principal::new("curator-c")
    }

    fn create_gallery_with_clock(
        start: u64,
    ) -> (GalleryService<Arc<ManualBlockClock>>, Arc<ManualBlockClock>) {
        let clock = Arc::new(ManualBlockClock::starting_at(BlockHeight::new(start)));
        let gallery = GalleryService::new(
            GalleryConfig::new(Principal::new("gallery-owner")),
            Arc::clone(&clock),
        );
        (gallery, clock)
    }

    // =============================================================================
    // EXHIBITION CREATION
    // =============================================================================

    #[test]
    fn test_exhibition_ids_are_sequential() {
        let mut gallery = create_test_gallery();

        let first = gallery
            .create_exhibition(curator(), "Opening", "inaugural show", Vec::new(), 100)
            .unwrap();
        let second = gallery
            .create_exhibition(curator(), "Second", "", Vec::new(), 100)
            .unwrap();

        assert_eq!(first, ExhibitionId::new(0));
        assert_eq!(second, ExhibitionId::new(1));
        assert_eq!(gallery.exhibition_count(), 2);
    }

    /// The pure simulation runs at genesis: exhibitions start at block 0
    /// and end at `duration`.
    #[test]
    fn test_genesis_exhibition_window() {
        let mut gallery = create_test_gallery();
        let id = gallery
            .create_exhibition(curator(), "Opening", "", Vec::new(), 250)
            .unwrap();

        let stored = gallery.exhibition(id).unwrap();
        assert_eq!(stored.curator, curator());
        assert_eq!(stored.start_block, BlockHeight::GENESIS);
        assert_eq!(stored.end_block, BlockHeight::new(250));
    }

    /// With a live clock, each exhibition is stamped at the height current
    /// when it is created.
    #[test]
    fn test_windows_follow_chain_progress() {
        let (mut gallery, clock) = create_gallery_with_clock(1_000);

        let early = gallery
            .create_exhibition(curator(), "Early", "", Vec::new(), 10)
            .unwrap();
        clock.advance(500);
        let late = gallery
            .create_exhibition(curator(), "Late", "", Vec::new(), 10)
            .unwrap();

        let early = gallery.exhibition(early).unwrap();
        let late = gallery.exhibition(late).unwrap();
        assert_eq!(early.start_block, BlockHeight::new(1_000));
        assert_eq!(late.start_block, BlockHeight::new(1_500));

        assert!(early.is_running_at(BlockHeight::new(1_005)));
        assert!(!early.is_running_at(BlockHeight::new(1_500)));
        assert!(late.is_running_at(BlockHeight::new(1_500)));
    }

    /// Artwork lists are stored verbatim: unknown and duplicate ids pass
    /// through untouched.
    #[test]
    fn test_artwork_list_not_validated() {
        let mut gallery = create_test_gallery();
        // Only artwork 0 exists
        gallery.create_artwork(artist(), "One", "", 100).unwrap();

        let ids = vec![
            ArtworkId::new(0),
            ArtworkId::new(42),
            ArtworkId::new(42),
            ArtworkId::new(u64::MAX),
        ];
        let ex = gallery
            .create_exhibition(curator(), "Phantoms", "", ids.clone(), 10)
            .unwrap();

        assert_eq!(gallery.exhibition(ex).unwrap().artwork_ids, ids);
    }

    // =============================================================================
    // DISPLAY RIGHTS
    // =============================================================================

    #[test]
    fn test_owner_grants_rights_for_real_exhibition() {
        let mut gallery = create_test_gallery();
        let art = gallery.create_artwork(artist(), "One", "", 100).unwrap();
        let ex = gallery
            .create_exhibition(curator(), "Opening", "", vec![art], 10)
            .unwrap();

        gallery.approve_exhibition_rights(&artist(), art, ex).unwrap();

        let right = gallery.exhibition_right(art, ex).expect("right stored");
        assert!(right.approved);
        assert_eq!(
            gallery.events().last().unwrap(),
            &GalleryEvent::ExhibitionRightsApproved {
                artwork_id: art,
                exhibition_id: ex,
                granted_by: artist(),
            }
        );
    }

    /// The exhibition reference is deliberately unchecked: rights can be
    /// approved before the exhibition exists.
    #[test]
    fn test_rights_for_future_exhibition() {
        let mut gallery = create_test_gallery();
        let art = gallery.create_artwork(artist(), "One", "", 100).unwrap();
        let future = ExhibitionId::new(0);

        assert_eq!(gallery.exhibition_count(), 0);
        gallery
            .approve_exhibition_rights(&artist(), art, future)
            .unwrap();
        assert!(gallery.exhibition_right(art, future).unwrap().approved);

        // The exhibition arriving later slots under the pre-approved id
        let ex = gallery
            .create_exhibition(curator(), "Opening", "", vec![art], 10)
            .unwrap();
        assert_eq!(ex, future);
    }

    /// After a sale, only the new owner can grant rights.
    #[test]
    fn test_rights_follow_ownership() {
        let mut gallery = create_test_gallery();
        let art = gallery.create_artwork(artist(), "One", "", 100).unwrap();
        let collector = Principal::new("collector-b");

        gallery.buy_artwork(collector.clone(), art).unwrap();

        let ex = ExhibitionId::new(7);
        assert_eq!(
            gallery
                .approve_exhibition_rights(&artist(), art, ex)
                .unwrap_err()
                .code(),
            102
        );
        gallery
            .approve_exhibition_rights(&collector, art, ex)
            .unwrap();
        assert!(gallery.exhibition_right(art, ex).unwrap().approved);
    }

    /// Rights are never deleted; re-approval overwrites in place.
    #[test]
    fn test_rights_are_upserted_not_duplicated() {
        let mut gallery = create_test_gallery();
        let art = gallery.create_artwork(artist(), "One", "", 100).unwrap();
        let ex = ExhibitionId::new(3);

        gallery.approve_exhibition_rights(&artist(), art, ex).unwrap();
        gallery.approve_exhibition_rights(&artist(), art, ex).unwrap();

        assert_eq!(gallery.state().exhibition_rights.len(), 1);
        assert_eq!(gallery.stats().rights_approved, 2);
        assert!(check_all_invariants(gallery.state()).is_valid());
    }
}
