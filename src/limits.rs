// Hard bounds on untrusted input. Everything here is checked before the
// ledger lock is taken.

pub const MAX_ROOMS: usize = 10_000;
pub const MAX_BOOKINGS: usize = 1_000_000;

pub const MAX_NAME_LEN: usize = 256;
pub const MAX_AMENITIES: usize = 64;
pub const MAX_AMENITY_LEN: usize = 128;

/// Dates are opaque keys; this only bounds their size.
pub const MAX_DATE_LEN: usize = 32;
