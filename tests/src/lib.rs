//! # Art-Gallery Ledger Test Suite
//!
//! Unified test crate for the gallery contract.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/          # End-to-end ledger scenarios
//!     ├── artwork_lifecycle.rs   # mint, reprice, purchase flows
//!     ├── exhibition_flows.rs    # curation and display rights
//!     ├── fee_administration.rs  # owner-gated platform fee
//!     └── state_consistency.rs   # failure atomicity + invariant audits
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p gallery-tests
//!
//! # By category
//! cargo test -p gallery-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]
