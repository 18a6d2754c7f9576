//! `ft-pipeline` — one-shot batch orchestration.
//!
//! # Stages
//!
//! ```text
//! ① Validate — drop trails and festivals with out-of-range coordinates
//!              (counted in RunReport, never an error).
//! ② Index    — build the configured SpatialIndex over the kept trails.
//! ③ Count    — one radius query per festival; write-once trails_nearby.
//! ④ Rank     — four independent stable rankings.
//! ⑤ Export   — hand the rankings to a RankingWriter.
//! ```
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs the count stage on Rayon's thread pool.           |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ft_core::ProximityConfig;
//! use ft_pipeline::run_files;
//!
//! let output = run_files(festivals, trails, out_dir, ProximityConfig::default())?;
//! println!("{}", output.report);
//! ```

pub mod builder;
pub mod error;
pub mod pipeline;
pub mod report;


pub use builder::PipelineBuilder;
pub use error::{PipelineError, PipelineResult};
pub use pipeline::{
    Pipeline, PipelineOutput, count_nearby, index_trails, rank, run_files, validate_festivals,
    validate_trails,
};
pub use report::RunReport;
