//! # Guest Batch — One Submission's Full Guest List
//!
//! A `GuestBatch` is the unit the encoder consumes: the apartment
//! identifier plus the ordered guest entries of one submission. It is
//! constructed fresh from a form document, treated as immutable by the
//! encoder, and discarded after encoding — nothing here persists.
//!
//! The batch deliberately does **not** validate its own shape beyond the
//! typed fields: the validator reports an empty or oversized batch as a
//! collected violation so a form UI can show every problem at once,
//! which a rejecting constructor could not do.

use serde::{Deserialize, Serialize};

use crate::guest::GuestEntry;
use crate::identifiers::ApartmentId;

/// Protocol ceiling on guests per submitted file.
pub const MAX_GUESTS_PER_BATCH: usize = 1000;

/// An apartment identifier plus the ordered guest entries of one
/// submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuestBatch {
    /// The registered accommodation this submission belongs to.
    pub apartment_id: ApartmentId,
    /// Guest entries in submission order. The protocol bounds this at
    /// [`MAX_GUESTS_PER_BATCH`]; the validator enforces the bound.
    pub guests: Vec<GuestEntry>,
}

impl GuestBatch {
    /// Create a batch from an apartment identifier and guest entries.
    pub fn new(apartment_id: ApartmentId, guests: Vec<GuestEntry>) -> Self {
        Self {
            apartment_id,
            guests,
        }
    }

    /// Number of guest entries in the batch.
    pub fn len(&self) -> usize {
        self.guests.len()
    }

    /// Whether the batch carries no guest entries.
    pub fn is_empty(&self) -> bool {
        self.guests.is_empty()
    }
}
