//! Integration module for connecting pose estimators, presenters and frame
//! schedulers with the vote tracker.
//!
//! This module provides the traits at the boundary with the outside world
//! and the pipeline that drives one tick per frame through them.

mod builder;
mod pipeline;
mod presenter;
mod scheduler;
mod source;

pub use builder::{BuildError, COCO_KEYPOINTS, PoseBuilder};
pub use pipeline::VotePipeline;
pub use presenter::{NullPresenter, Presenter};
pub use scheduler::{FixedTicks, FrameRateScheduler, Scheduler};
pub use source::{FnSource, IntoObservations, PoseSource};
