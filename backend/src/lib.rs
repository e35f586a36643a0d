//! # Delivery Rust Backend
//!
//! Query and aggregation engine over an in-memory collection of delivery
//! records. The crate answers business questions about deliveries — which
//! are paid, which are still in flight, how they break down by status,
//! how long a route takes on average — through composable, side-effect-free
//! operations plus a generic paging utility.
//!
//! ## Architecture
//!
//! The crate is organized into two logical modules:
//!
//! - [`models`]: the delivery domain model (records, enumerations, time windows)
//! - [`queries`]: pure query operations over slices of deliveries
//!
//! Every operation takes a borrowed slice and returns owned results; nothing
//! mutates its input, so concurrent callers need no synchronization as long
//! as the underlying collection is not mutated out from under them.

pub mod error;
pub mod models;
pub mod queries;

pub use error::{QueryError, QueryResult};
