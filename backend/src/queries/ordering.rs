use crate::models::Delivery;

/// Order deliveries by status, then by start of the loading period.
///
/// Primary key is the status ordinal (declared variant order), secondary
/// key the loading start ascending; an unassigned loading start sorts
/// before any concrete timestamp. The sort is stable, so ties on both
/// keys keep their relative input order.
pub fn order_by_status_then_by_start_loading(deliveries: &[Delivery]) -> Vec<Delivery> {
    let mut sorted = deliveries.to_vec();
    sorted.sort_by_key(|d| (d.status, d.loading_period.start));
    sorted
}
