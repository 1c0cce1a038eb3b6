use std::fmt;
use std::str::FromStr;

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

/// Minutes since midnight — the only time type.
pub type Minute = u16;

/// Latest representable time of day (`24:00`, end-of-day bound).
pub const END_OF_DAY: Minute = 24 * 60;

/// Time of day on the wire as `"HH:MM"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay(Minute);

impl TimeOfDay {
    pub const fn from_minutes(minutes: Minute) -> Option<Self> {
        if minutes <= END_OF_DAY {
            Some(Self(minutes))
        } else {
            None
        }
    }

    pub const fn hm(hour: u16, minute: u16) -> Self {
        assert!(minute < 60 && hour * 60 + minute <= END_OF_DAY);
        Self(hour * 60 + minute)
    }

    pub fn minutes(&self) -> Minute {
        self.0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseTimeError(String);

impl fmt::Display for ParseTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid time of day {:?}, expected HH:MM", self.0)
    }
}

impl std::error::Error for ParseTimeError {}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseTimeError(s.to_string());
        let (h, m) = s.split_once(':').ok_or_else(err)?;
        if h.is_empty() || h.len() > 2 || m.len() != 2 {
            return Err(err());
        }
        // `u16::from_str` takes a leading `+`; the wire format does not.
        if !h.bytes().chain(m.bytes()).all(|b| b.is_ascii_digit()) {
            return Err(err());
        }
        let hour: u16 = h.parse().map_err(|_| err())?;
        let minute: u16 = m.parse().map_err(|_| err())?;
        if minute >= 60 {
            return Err(err());
        }
        Self::from_minutes(hour * 60 + minute).ok_or_else(err)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.0 / 60, self.0 % 60)
    }
}

/// Half-open window `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub start: TimeOfDay,
    pub end: TimeOfDay,
}

impl Slot {
    /// No ordering check here; callers that need one use `is_empty`.
    pub fn new(start: TimeOfDay, end: TimeOfDay) -> Self {
        Self { start, end }
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn duration_minutes(&self) -> Minute {
        self.end.minutes().saturating_sub(self.start.minutes())
    }

    pub fn overlaps(&self, other: &Slot) -> bool {
        self.start < other.end && self.end > other.start
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RoomId(pub u64);

impl fmt::Display for RoomId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BookingId(pub u64);

impl fmt::Display for BookingId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: RoomId,
    #[serde(rename = "roomName")]
    pub name: String,
    pub seats: u32,
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BookingStatus {
    Booked,
}

/// A confirmed reservation. `room_name` is a snapshot taken at booking time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: BookingId,
    pub customer_name: String,
    pub room_id: RoomId,
    pub room_name: String,
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BookingStatus,
}

impl Booking {
    pub fn slot(&self) -> Slot {
        Slot::new(self.start_time, self.end_time)
    }
}

// ── Inputs ───────────────────────────────────────────────────────

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRoom {
    pub room_name: String,
    pub seats: u32,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub price_per_hour: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    pub customer_name: String,
    pub room_id: RoomId,
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl NewBooking {
    pub fn slot(&self) -> Slot {
        Slot::new(self.start_time, self.end_time)
    }
}

// ── Query result types ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookedRoom {
    pub room_name: String,
    pub customer_name: String,
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
    pub status: BookingStatus,
}

impl From<&Booking> for BookedRoom {
    fn from(b: &Booking) -> Self {
        Self {
            room_name: b.room_name.clone(),
            customer_name: b.customer_name.clone(),
            date: b.date.clone(),
            start_time: b.start_time,
            end_time: b.end_time,
            status: b.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerBooking {
    pub customer_name: String,
    pub room_name: String,
    pub date: String,
    pub start_time: TimeOfDay,
    pub end_time: TimeOfDay,
}

impl From<&Booking> for CustomerBooking {
    fn from(b: &Booking) -> Self {
        Self {
            customer_name: b.customer_name.clone(),
            room_name: b.room_name.clone(),
            date: b.date.clone(),
            start_time: b.start_time,
            end_time: b.end_time,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomerSummary {
    pub bookings: Vec<Booking>,
    pub count: usize,
}

/// Bookings grouped by exact customer name, keys in first-seen order.
/// Serializes as a JSON object.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CustomerStatistics {
    entries: Vec<(String, CustomerSummary)>,
}

impl CustomerStatistics {
    pub fn from_bookings<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        let mut stats = Self::default();
        for booking in bookings {
            let pos = match stats
                .entries
                .iter()
                .position(|(name, _)| *name == booking.customer_name)
            {
                Some(pos) => pos,
                None => {
                    stats.entries.push((
                        booking.customer_name.clone(),
                        CustomerSummary { bookings: Vec::new(), count: 0 },
                    ));
                    stats.entries.len() - 1
                }
            };
            let summary = &mut stats.entries[pos].1;
            summary.bookings.push(booking.clone());
            summary.count += 1;
        }
        stats
    }

    pub fn get(&self, customer_name: &str) -> Option<&CustomerSummary> {
        self.entries
            .iter()
            .find(|(name, _)| name == customer_name)
            .map(|(_, summary)| summary)
    }

    pub fn customers(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CustomerStatistics {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, summary) in &self.entries {
            map.serialize_entry(name, summary)?;
        }
        map.end()
    }
}
