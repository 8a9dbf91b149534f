//! # Domain Layer (Inner Hexagon)
//!
//! Pure business logic for the gallery state machine.
//! NO I/O, NO logging, NO external dependencies beyond serde derives.
//!
//! Dependencies point INWARD only: the service and adapters depend on this
//! module, never the other way around.

pub mod entities;
pub mod invariants;
pub mod value_objects;

pub use entities::*;
pub use invariants::*;
pub use value_objects::*;
