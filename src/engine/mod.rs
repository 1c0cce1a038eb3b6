mod availability;
mod conflict;
mod error;
mod mutations;
mod queries;
mod store;

pub use availability::{find_conflict, is_available};
pub use error::EngineError;
pub use store::{Ledger, RoomRegistry};

use tokio::sync::RwLock;

use crate::limits::{MAX_BOOKINGS, MAX_ROOMS};

/// Owns the room registry and the booking ledger. Built once at startup and
/// shared with request handlers behind an `Arc`.
///
/// Room creation only touches the registry. Booking takes the ledger write
/// lock for the whole lookup-check-append sequence, so two overlapping
/// requests for the same room can never both succeed. Readers take the read
/// lock and see either all of a booking or none of it.
pub struct Engine {
    pub(super) rooms: RoomRegistry,
    pub(super) ledger: RwLock<Ledger>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self::with_limits(MAX_ROOMS, MAX_BOOKINGS)
    }

    /// Engine with caps other than the crate-wide `limits`.
    pub fn with_limits(max_rooms: usize, max_bookings: usize) -> Self {
        Self {
            rooms: RoomRegistry::with_limit(max_rooms),
            ledger: RwLock::new(Ledger::with_limit(max_bookings)),
        }
    }
}
