use tracing::{debug, info};

use crate::model::*;

use super::conflict::{check_no_conflict, validate_new_booking, validate_new_room};
use super::{Engine, EngineError};

impl Engine {
    pub fn create_room(&self, request: NewRoom) -> Result<Room, EngineError> {
        validate_new_room(&request)?;

        let room = self
            .rooms
            .create(
                request.room_name,
                request.seats,
                request.amenities,
                request.price_per_hour,
            )
            .ok_or(EngineError::LimitExceeded("too many rooms"))?;
        metrics::counter!(crate::observability::ROOMS_TOTAL).increment(1);
        info!(room_id = %room.id, name = %room.name, seats = room.seats, "room created");
        Ok(room)
    }

    /// Resolve the room, check the slot and append, all under the ledger
    /// write lock. On any error the ledger is untouched.
    pub async fn book_room(&self, request: NewBooking) -> Result<Booking, EngineError> {
        validate_new_booking(&request)?;

        let mut ledger = self.ledger.write().await;
        if ledger.is_full() {
            return Err(EngineError::LimitExceeded("too many bookings"));
        }

        let room = self
            .rooms
            .find_by_id(request.room_id)
            .ok_or(EngineError::RoomNotFound(request.room_id))?;

        let slot = request.slot();
        if let Err(e) = check_no_conflict(ledger.bookings(), room.id, &request.date, &slot) {
            metrics::counter!(crate::observability::BOOKING_CONFLICTS_TOTAL).increment(1);
            debug!(room_id = %room.id, date = %request.date, start = %slot.start, end = %slot.end, "{e}");
            return Err(e);
        }

        let booking = ledger.append(&room, request);
        drop(ledger);

        metrics::counter!(crate::observability::BOOKINGS_TOTAL).increment(1);
        info!(
            booking_id = %booking.id,
            room_id = %booking.room_id,
            customer = %booking.customer_name,
            date = %booking.date,
            start = %booking.start_time,
            end = %booking.end_time,
            "room booked"
        );
        Ok(booking)
    }
}
