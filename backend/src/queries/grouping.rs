use std::collections::{HashMap, HashSet};

use log::debug;
use serde::{Deserialize, Serialize};

use crate::models::{Delivery, DeliveryStatus};

/// Average loading-to-arrival gap for one origin/destination pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageGapsInfo {
    pub start_city: String,
    pub end_city: String,
    /// Mean gap between end of loading and start of arrival, in minutes
    pub average_gap_minutes: f64,
}

/// Count distinct cargo types present in the collection.
pub fn count_uniq_cargo_types(deliveries: &[Delivery]) -> usize {
    deliveries
        .iter()
        .map(|d| d.cargo_type)
        .collect::<HashSet<_>>()
        .len()
}

/// Group deliveries by status and count each group. Only statuses actually
/// present appear as keys, so every count is at least 1.
pub fn counts_by_delivery_status(deliveries: &[Delivery]) -> HashMap<DeliveryStatus, usize> {
    let mut counts = HashMap::new();
    for d in deliveries {
        *counts.entry(d.status).or_insert(0) += 1;
    }
    counts
}

/// Group deliveries by (origin city, destination city) and compute the
/// average gap in minutes between end of loading and start of arrival.
///
/// Records missing either endpoint are skipped rather than failing the
/// whole call; a route whose deliveries were all skipped is omitted from
/// the output. Output order is unspecified.
pub fn average_travel_time_per_direction(deliveries: &[Delivery]) -> Vec<AverageGapsInfo> {
    let mut gaps_by_route: HashMap<(String, String), Vec<f64>> = HashMap::new();
    let mut skipped = 0usize;

    for d in deliveries {
        match d.loading_period.gap_minutes_until(&d.arrival_period) {
            Some(gap) => {
                let key = (
                    d.direction.origin.name.clone(),
                    d.direction.destination.name.clone(),
                );
                gaps_by_route.entry(key).or_default().push(gap);
            }
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!(
            "average_travel_time_per_direction: skipped {} deliveries without both gap endpoints",
            skipped
        );
    }

    gaps_by_route
        .into_iter()
        .map(|((start_city, end_city), gaps)| AverageGapsInfo {
            start_city,
            end_city,
            average_gap_minutes: gaps.iter().sum::<f64>() / gaps.len() as f64,
        })
        .collect()
}
