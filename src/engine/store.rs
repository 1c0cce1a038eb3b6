use std::sync::atomic::{AtomicU64, Ordering};

use dashmap::DashMap;

use crate::limits::{MAX_BOOKINGS, MAX_ROOMS};
use crate::model::*;

/// Rooms keyed by id. Ids come from a monotonic counter, never from the
/// map size, so they are never reused. Rooms are never removed, so the
/// counter also bounds the room count.
pub struct RoomRegistry {
    rooms: DashMap<RoomId, Room>,
    next_id: AtomicU64,
    limit: u64,
}

impl Default for RoomRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::with_limit(MAX_ROOMS)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            rooms: DashMap::new(),
            next_id: AtomicU64::new(1),
            limit: limit as u64,
        }
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Reserve the next id and insert. Returns `None` once `limit` ids have
    /// been handed out; the reservation is a single atomic step, so
    /// concurrent callers cannot overshoot. The room is fully built before
    /// it becomes visible.
    pub fn create(
        &self,
        name: String,
        seats: u32,
        amenities: Vec<String>,
        price_per_hour: f64,
    ) -> Option<Room> {
        let limit = self.limit;
        let id = self
            .next_id
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |next| {
                (next <= limit).then_some(next + 1)
            })
            .ok()?;
        let room = Room {
            id: RoomId(id),
            name,
            seats,
            amenities,
            price_per_hour,
        };
        self.rooms.insert(room.id, room.clone());
        Some(room)
    }

    pub fn find_by_id(&self, id: RoomId) -> Option<Room> {
        self.rooms.get(&id).map(|e| e.value().clone())
    }

    pub fn contains(&self, id: RoomId) -> bool {
        self.rooms.contains_key(&id)
    }

    /// All rooms, ordered by id.
    pub fn list(&self) -> Vec<Room> {
        let mut rooms: Vec<Room> = self.rooms.iter().map(|e| e.value().clone()).collect();
        rooms.sort_by_key(|r| r.id);
        rooms
    }
}

/// Append-only booking log in insertion order.
pub struct Ledger {
    bookings: Vec<Booking>,
    next_id: u64,
    limit: usize,
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger {
    pub fn new() -> Self {
        Self::with_limit(MAX_BOOKINGS)
    }

    pub fn with_limit(limit: usize) -> Self {
        Self {
            bookings: Vec::new(),
            next_id: 1,
            limit,
        }
    }

    pub fn is_full(&self) -> bool {
        self.bookings.len() >= self.limit
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    pub fn len(&self) -> usize {
        self.bookings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bookings.is_empty()
    }

    /// Build a `Booked` booking for `room` and append it. Caller has already
    /// run the conflict check under the same guard.
    pub fn append(&mut self, room: &Room, request: NewBooking) -> Booking {
        let booking = Booking {
            id: BookingId(self.next_id),
            customer_name: request.customer_name,
            room_id: room.id,
            room_name: room.name.clone(),
            date: request.date,
            start_time: request.start_time,
            end_time: request.end_time,
            status: BookingStatus::Booked,
        };
        self.next_id += 1;
        self.bookings.push(booking.clone());
        booking
    }
}
