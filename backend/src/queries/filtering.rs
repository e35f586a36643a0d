use crate::models::{Delivery, DeliveryType};

/// Deliveries carrying a settled payment (non-empty payment reference).
/// Stable filter: survivors keep their input order.
pub fn paid(deliveries: &[Delivery]) -> Vec<Delivery> {
    deliveries.iter().filter(|d| d.is_paid()).cloned().collect()
}

/// Deliveries still being processed by the system (neither done nor
/// cancelled). Stable filter.
pub fn not_finished(deliveries: &[Delivery]) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|d| !d.is_finished())
        .cloned()
        .collect()
}

/// Deliveries departing from `city_name` with the given service type.
/// City matching is exact, case-sensitive string equality.
///
/// Returns every match; callers wanting a fixed-size prefix compose this
/// with [`crate::queries::paging`].
pub fn deliveries_by_city_and_type(
    deliveries: &[Delivery],
    city_name: &str,
    kind: DeliveryType,
) -> Vec<Delivery> {
    deliveries
        .iter()
        .filter(|d| d.direction.origin.name == city_name && d.kind == kind)
        .cloned()
        .collect()
}
