use crate::model::*;

use super::availability::is_available;
use super::conflict::{validate_date, validate_slot};
use super::{Engine, EngineError};

// Every view is recomputed from the ledger on each call.

impl Engine {
    pub fn get_room(&self, id: RoomId) -> Option<Room> {
        self.rooms.find_by_id(id)
    }

    pub fn list_rooms(&self) -> Vec<Room> {
        self.rooms.list()
    }

    /// Would `slot` on `room_id`/`date` be accepted right now?
    pub async fn check_availability(
        &self,
        room_id: RoomId,
        date: &str,
        slot: Slot,
    ) -> Result<bool, EngineError> {
        validate_date(date)?;
        validate_slot(&slot)?;
        if !self.rooms.contains(room_id) {
            return Err(EngineError::RoomNotFound(room_id));
        }
        let ledger = self.ledger.read().await;
        Ok(is_available(ledger.bookings(), room_id, date, &slot))
    }

    /// Bookings for one room on one date, ordered by start time.
    pub async fn bookings_for_room(&self, room_id: RoomId, date: &str) -> Result<Vec<Booking>, EngineError> {
        if !self.rooms.contains(room_id) {
            return Err(EngineError::RoomNotFound(room_id));
        }
        let ledger = self.ledger.read().await;
        let mut bookings: Vec<Booking> = ledger
            .bookings()
            .iter()
            .filter(|b| b.room_id == room_id && b.date == date)
            .cloned()
            .collect();
        bookings.sort_by_key(|b| b.start_time);
        Ok(bookings)
    }

    pub async fn list_bookings(&self) -> Vec<Booking> {
        self.ledger.read().await.bookings().to_vec()
    }

    pub async fn list_booked_rooms(&self) -> Vec<BookedRoom> {
        let ledger = self.ledger.read().await;
        ledger.bookings().iter().map(BookedRoom::from).collect()
    }

    pub async fn list_customer_bookings(&self) -> Vec<CustomerBooking> {
        let ledger = self.ledger.read().await;
        ledger.bookings().iter().map(CustomerBooking::from).collect()
    }

    pub async fn customer_statistics(&self) -> CustomerStatistics {
        let ledger = self.ledger.read().await;
        CustomerStatistics::from_bookings(ledger.bookings())
    }
}
