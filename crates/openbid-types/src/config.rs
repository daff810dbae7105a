//! Configuration for an OpenBid auction house instance.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Tunables for an auction house.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HouseConfig {
    /// Maximum number of offers a single auction may accumulate before
    /// further placements are rejected with `OfferLimitExceeded`.
    pub max_offers_per_auction: usize,
}

impl Default for HouseConfig {
    fn default() -> Self {
        Self {
            max_offers_per_auction: constants::DEFAULT_MAX_OFFERS_PER_AUCTION,
        }
    }
}
