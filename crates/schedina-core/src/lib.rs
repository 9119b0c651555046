//! # schedina-core — Foundational Types for the Schedina Stack
//!
//! This crate is the bedrock of the schedina stack. It defines the typed
//! guest-stay record model that every other crate consumes. The encoder,
//! the reference tables, and the CLI all speak these types; none of them
//! re-declare a guest field anywhere else.
//!
//! ## Key Design Principles
//!
//! 1. **Newtype wrappers for domain primitives.** `ApartmentId` and
//!    `Province` are newtypes with validated constructors. No bare strings
//!    for identifiers that carry protocol constraints.
//!
//! 2. **One enum per protocol code family.** `GuestRole`, `Sex`, and
//!    `DocumentType` each own their wire codes (`"18"`, `"1"`, `"IDENT"`, …).
//!    Adding a variant forces every consumer to handle it at compile time.
//!
//! 3. **Calendar dates are `chrono::NaiveDate`.** Arrival and birth dates
//!    are pure calendar values with no time component and no timezone
//!    interpretation. Date-string parsing belongs to the form layer; this
//!    crate never sees a user-facing date string.
//!
//! ## Crate Policy
//!
//! - No dependencies on other `schedina-*` crates (this is the leaf of the DAG).
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.
//! - All public types derive `Debug`, `Clone`, and implement `Serialize`/`Deserialize`.

pub mod batch;
pub mod error;
pub mod guest;
pub mod identifiers;

// Re-export primary types for ergonomic imports.
pub use batch::{GuestBatch, MAX_GUESTS_PER_BATCH};
pub use error::CoreError;
pub use guest::{DocumentType, GuestEntry, GuestRole, IdentityDocument, Sex};
pub use identifiers::{ApartmentId, Province};
