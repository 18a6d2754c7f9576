//! `ft-spatial` — spatial indexing and proximity counting.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`index`]   | `SpatialIndex` trait, `build_index`                         |
//! | [`kdtree`]  | `KdTree` (default backend)                                  |
//! | [`rtree`]   | `RTreeIndex` (`rstar` backend)                              |
//! | [`metric`]  | `DistanceMetric`, `PlanarDegrees`, `Haversine`, `metric_for`|
//! | [`counter`] | `ProximityCounter`                                          |
//! | [`error`]   | `SpatialError`, `SpatialResult<T>`                          |
//!
//! # Feature flags
//!
//! | Flag       | Effect                                                   |
//! |------------|----------------------------------------------------------|
//! | `parallel` | Runs per-festival queries on Rayon's thread pool.        |

pub mod counter;
pub mod error;
pub mod index;
pub mod kdtree;
pub mod metric;
pub mod rtree;

#[cfg(test)]
mod tests;

pub use counter::ProximityCounter;
pub use error::{SpatialError, SpatialResult};
pub use index::{SpatialIndex, build_index, trail_id};
pub use kdtree::KdTree;
pub use metric::{DistanceMetric, Haversine, PlanarDegrees, metric_for};
pub use rtree::RTreeIndex;
