//! Fluent builder for constructing a [`Pipeline`].

use ft_core::{FestivalRecord, ProximityConfig, TrailRecord};

use crate::{Pipeline, PipelineResult};

/// Fluent builder for [`Pipeline`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default          |
/// |------------------|------------------|
/// | `.festivals(v)`  | no festivals     |
/// | `.trails(v)`     | no trails        |
///
/// # Example
///
/// ```rust,ignore
/// let output = PipelineBuilder::new(ProximityConfig::default())
///     .festivals(festivals)
///     .trails(trails)
///     .build()?
///     .run()?;
/// ```
pub struct PipelineBuilder {
    config:    ProximityConfig,
    festivals: Option<Vec<FestivalRecord>>,
    trails:    Option<Vec<TrailRecord>>,
}

impl PipelineBuilder {
    pub fn new(config: ProximityConfig) -> Self {
        Self { config, festivals: None, trails: None }
    }

    /// Festival records in input order.  Order decides ranking tie-breaks.
    pub fn festivals(mut self, festivals: Vec<FestivalRecord>) -> Self {
        self.festivals = Some(festivals);
        self
    }

    /// Trail records to index.
    pub fn trails(mut self, trails: Vec<TrailRecord>) -> Self {
        self.trails = Some(trails);
        self
    }

    /// Validate the configuration and return a ready-to-run [`Pipeline`].
    pub fn build(self) -> PipelineResult<Pipeline> {
        self.config.validate()?;
        Ok(Pipeline {
            config:    self.config,
            festivals: self.festivals.unwrap_or_default(),
            trails:    self.trails.unwrap_or_default(),
        })
    }
}
