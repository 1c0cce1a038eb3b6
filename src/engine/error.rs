use crate::model::{BookingId, RoomId, TimeOfDay};

#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    RoomNotFound(RoomId),
    /// Carries the id of the existing booking that blocks the request.
    SlotConflict(BookingId),
    InvalidSlot {
        start: TimeOfDay,
        end: TimeOfDay,
    },
    InvalidPrice(f64),
    LimitExceeded(&'static str),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::RoomNotFound(id) => write!(f, "room not found: {id}"),
            EngineError::SlotConflict(id) => write!(f, "slot conflicts with booking: {id}"),
            EngineError::InvalidSlot { start, end } => {
                write!(f, "invalid slot [{start}, {end}): start must be before end")
            }
            EngineError::InvalidPrice(p) => {
                write!(f, "invalid price per hour {p}: must be finite and non-negative")
            }
            EngineError::LimitExceeded(msg) => write!(f, "limit exceeded: {msg}"),
        }
    }
}

impl std::error::Error for EngineError {}
