//! Query operations over in-memory delivery collections.
//!
//! Each submodule holds a set of pure functions taking a borrowed slice of
//! deliveries (plus operation-specific scalars) and returning owned,
//! eagerly-materialized results. Nothing here performs I/O, blocks, or
//! mutates its input.

pub mod filtering;
pub mod grouping;
pub mod ordering;
pub mod paging;
pub mod projections;

pub use filtering::{deliveries_by_city_and_type, not_finished, paid};
pub use grouping::{
    average_travel_time_per_direction, count_uniq_cargo_types, counts_by_delivery_status,
    AverageGapsInfo,
};
pub use ordering::order_by_status_then_by_start_loading;
pub use paging::{first_page, paging, DEFAULT_PAGE_SIZE};
pub use projections::{delivery_infos_by_client, DeliveryShortInfo};
