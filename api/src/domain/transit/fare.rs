pub const BASE_FARE: f64 = 20.0;
pub const PER_KM_RATE: f64 = 6.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FareQuote {
    Amount(f64),
    InvalidInput,
}

/// Floor-fare pricing: a trip never bills below the base fare.
pub fn fare_for_distance(distance_km: f64) -> f64 {
    BASE_FARE.max(BASE_FARE + distance_km * PER_KM_RATE)
}

pub fn quote(raw_distance: &str) -> FareQuote {
    match raw_distance.trim().parse::<f64>() {
        Ok(km) if km.is_finite() => FareQuote::Amount(fare_for_distance(km)),
        _ => FareQuote::InvalidInput,
    }
}
