use serde::{Deserialize, Serialize};

use super::time::Period;

crate::define_id_type!(i64, DeliveryId);

/// Delivery lifecycle states.
///
/// The declared variant order is the processing order, and `Ord` follows
/// it. Queries that sort by status rely on this ordinal sequence, not on
/// lexical variant names.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum DeliveryStatus {
    Created,
    Accepted,
    InProgress,
    Done,
    Cancelled,
}

/// Service category of a delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeliveryType {
    Standard,
    Express,
    Refrigerated,
    Oversized,
}

/// Category of the transported cargo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CargoType {
    General,
    Perishable,
    Fragile,
    Hazardous,
    Bulk,
}

/// A city endpoint of a route. Equality is exact string equality on the name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct City {
    pub name: String,
}

impl City {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Origin and destination of a delivery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Direction {
    pub origin: City,
    pub destination: City,
}

impl Direction {
    pub fn new(origin: impl Into<String>, destination: impl Into<String>) -> Self {
        Self {
            origin: City::new(origin),
            destination: City::new(destination),
        }
    }
}

/// A single delivery record.
///
/// Queries treat deliveries as read-only views; no operation mutates a
/// record or the collection it came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: DeliveryId,
    pub client_id: String,
    /// Payment reference; `None` or empty means the delivery is unpaid
    pub payment_id: Option<String>,
    pub status: DeliveryStatus,
    pub kind: DeliveryType,
    pub cargo_type: CargoType,
    pub direction: Direction,
    /// Loading time window
    pub loading_period: Period,
    /// Arrival time window (endpoints unassigned until a slot is booked)
    pub arrival_period: Period,
}

impl Delivery {
    /// Whether a non-empty payment reference is attached.
    pub fn is_paid(&self) -> bool {
        self.payment_id.as_deref().is_some_and(|p| !p.is_empty())
    }

    /// Whether the delivery reached a terminal state (done or cancelled).
    pub fn is_finished(&self) -> bool {
        matches!(self.status, DeliveryStatus::Done | DeliveryStatus::Cancelled)
    }
}
