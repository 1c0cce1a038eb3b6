use crate::limits::*;
use crate::model::*;

use super::availability::find_conflict;
use super::EngineError;

pub(crate) fn validate_slot(slot: &Slot) -> Result<(), EngineError> {
    if slot.is_empty() {
        return Err(EngineError::InvalidSlot {
            start: slot.start,
            end: slot.end,
        });
    }
    Ok(())
}

pub(crate) fn validate_new_room(room: &NewRoom) -> Result<(), EngineError> {
    if room.room_name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("room name too long"));
    }
    if room.amenities.len() > MAX_AMENITIES {
        return Err(EngineError::LimitExceeded("too many amenities"));
    }
    if room.amenities.iter().any(|a| a.len() > MAX_AMENITY_LEN) {
        return Err(EngineError::LimitExceeded("amenity too long"));
    }
    if !room.price_per_hour.is_finite() || room.price_per_hour < 0.0 {
        return Err(EngineError::InvalidPrice(room.price_per_hour));
    }
    Ok(())
}

pub(crate) fn validate_date(date: &str) -> Result<(), EngineError> {
    if date.len() > MAX_DATE_LEN {
        return Err(EngineError::LimitExceeded("date too long"));
    }
    Ok(())
}

pub(crate) fn validate_new_booking(booking: &NewBooking) -> Result<(), EngineError> {
    if booking.customer_name.len() > MAX_NAME_LEN {
        return Err(EngineError::LimitExceeded("customer name too long"));
    }
    validate_date(&booking.date)?;
    validate_slot(&booking.slot())
}

pub(crate) fn check_no_conflict(
    bookings: &[Booking],
    room_id: RoomId,
    date: &str,
    slot: &Slot,
) -> Result<(), EngineError> {
    match find_conflict(bookings, room_id, date, slot) {
        Some(existing) => Err(EngineError::SlotConflict(existing.id)),
        None => Ok(()),
    }
}
