//! Multi-station aggregation: batch fetches, platform grouping and
//! filtering, per-station platform merge policies, and route-mode views.

mod batch;
mod error;
mod platform;
mod policy;
mod route_view;

pub use batch::{BatchOutcome, fetch_many};
pub use error::AggregateError;
pub use platform::{filter_trains_by_platform, group_by_platform, normalize_platform};
pub use policy::{PlatformMergePolicy, PolicyTable, StationPolicy, direction_platform};
pub use route_view::{RouteView, RouteViewStatus, StationBoard, assemble_route_view};
