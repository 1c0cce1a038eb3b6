use crate::model::*;

// ── Availability check ───────────────────────────────────────────
//
// Pure functions over the ledger. Every booking is scanned regardless of
// status; only `room_id` and `date` equality narrow the set before the
// half-open overlap test.

/// First booking on `room_id`/`date` whose slot overlaps `slot`.
///
/// Overlap is `slot.start < b.end && slot.end > b.start`, so back-to-back
/// slots never conflict. Degenerate slots (`start >= end`) are not rejected
/// here and simply fall through the formula.
pub fn find_conflict<'a>(
    bookings: &'a [Booking],
    room_id: RoomId,
    date: &str,
    slot: &Slot,
) -> Option<&'a Booking> {
    bookings
        .iter()
        .filter(|b| b.room_id == room_id && b.date == date)
        .find(|b| slot.overlaps(&b.slot()))
}

pub fn is_available(bookings: &[Booking], room_id: RoomId, date: &str, slot: &Slot) -> bool {
    find_conflict(bookings, room_id, date, slot).is_none()
}
