//! Shared fixture builders for integration tests.

use chrono::{DateTime, TimeZone, Utc};
use delivery_rust::models::{
    CargoType, Delivery, DeliveryId, DeliveryStatus, DeliveryType, Direction, Period,
};

/// Timestamp on a fixed test day.
pub fn ts(hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 15, hour, min, 0).unwrap()
}

/// A minimal delivery with sensible defaults; tests mutate what they need.
pub fn delivery(id: i64, status: DeliveryStatus) -> Delivery {
    Delivery {
        id: DeliveryId::new(id),
        client_id: "client-1".to_string(),
        payment_id: None,
        status,
        kind: DeliveryType::Standard,
        cargo_type: CargoType::General,
        direction: Direction::new("Kyiv", "Lviv"),
        loading_period: Period::closed(ts(8, 0), ts(9, 0)).unwrap(),
        arrival_period: Period::open(),
    }
}

/// Delivery on a given route with a concrete loading end and arrival start.
pub fn routed_delivery(
    id: i64,
    origin: &str,
    destination: &str,
    loading_end: DateTime<Utc>,
    arrival_start: DateTime<Utc>,
) -> Delivery {
    let mut d = delivery(id, DeliveryStatus::InProgress);
    d.direction = Direction::new(origin, destination);
    d.loading_period = Period::new(Some(loading_end - chrono::Duration::hours(1)), Some(loading_end));
    d.arrival_period = Period::new(Some(arrival_start), None);
    d
}
