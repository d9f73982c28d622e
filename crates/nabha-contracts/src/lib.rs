//! # nabha-contracts
//!
//! Shared types for the Nabha Health pharmacy stock checker.
//!
//! All crates in the workspace import from here. No business logic lives in
//! this crate, only data definitions, display labels, and error types.

pub mod error;
pub mod location;
pub mod medicine;

pub use error::{NabhaError, NabhaResult};
pub use location::Location;
pub use medicine::{BadgeVariant, Medicine, PharmacyStock, StockStatus};
