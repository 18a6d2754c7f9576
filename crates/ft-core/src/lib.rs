//! `ft-core` — foundational types for the festival-trails workspace.
//!
//! Every other `ft-*` crate depends on this one.  It has no `ft-*`
//! dependencies and only `thiserror` (plus optional `serde`) externally.
//!
//! # What lives here
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`geo`]      | `GeoPoint`, km→degree conversion, haversine distance      |
//! | [`ids`]      | `TrailId`                                   |
//! | [`record`]   | `TrailRecord`, `FestivalRecord`, `EnrichedFestival`       |
//! | [`validate`] | `validate_coordinates`, `Validated<T>`                    |
//! | [`config`]   | `ProximityConfig`, `MetricKind`, `IndexKind`              |
//! | [`error`]    | `CoreError`, `CoreResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to config and point types.  |

pub mod config;
pub mod error;
pub mod geo;
pub mod ids;
pub mod record;
pub mod validate;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{IndexKind, MetricKind, ProximityConfig};
pub use error::{CoreError, CoreResult};
pub use geo::{GeoPoint, KM_PER_DEGREE, km_to_planar_degrees};
pub use ids::TrailId;
pub use record::{EnrichedFestival, FestivalRecord, Located, TrailRecord};
pub use validate::{Validated, validate_coordinates};
