//! System-wide constants for the OpenBid auction house.

/// Maximum decimal precision for amounts (8 decimal places).
pub const AMOUNT_PRECISION: u32 = 8;

/// Maximum open offers against a single auction (default, anti-flood).
pub const DEFAULT_MAX_OFFERS_PER_AUCTION: usize = 10_000;
