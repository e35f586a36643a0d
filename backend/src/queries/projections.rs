use serde::{Deserialize, Serialize};

use crate::models::{CargoType, Delivery, DeliveryId, DeliveryStatus, DeliveryType, Period};

/// Compact, client-facing view of a delivery.
///
/// A transient projection with no identity of its own: built per call,
/// never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryShortInfo {
    pub id: DeliveryId,
    pub start_city: String,
    pub end_city: String,
    pub client_id: String,
    pub kind: DeliveryType,
    pub loading_period: Period,
    pub arrival_period: Period,
    pub status: DeliveryStatus,
    pub cargo_type: CargoType,
}

/// Short infos for the deliveries of one client.
///
/// `client_id` is matched by literal, case-sensitive equality — the empty
/// string is a valid id and matches only deliveries whose client id is
/// itself empty.
pub fn delivery_infos_by_client(deliveries: &[Delivery], client_id: &str) -> Vec<DeliveryShortInfo> {
    deliveries
        .iter()
        .filter(|d| d.client_id == client_id)
        .map(|d| DeliveryShortInfo {
            id: d.id,
            start_city: d.direction.origin.name.clone(),
            end_city: d.direction.destination.name.clone(),
            client_id: d.client_id.clone(),
            kind: d.kind,
            loading_period: d.loading_period,
            arrival_period: d.arrival_period,
            status: d.status,
            cargo_type: d.cargo_type,
        })
        .collect()
}
