//! Error taxonomy for the timeline model.
//!
//! Every failure is synchronous, raised at the call site that detects it, and
//! non-retryable. A failing operation leaves the registry/editor observably
//! unchanged; callers surface these to users however they see fit.

use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TimelineError {
    /// An out-of-range value at construction time.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A command's `from` value does not match the shape's working state.
    #[error("precondition mismatch: {0}")]
    PreconditionMismatch(String),

    /// A new motion segment conflicts with committed history.
    #[error("segment [{start},{end}] overlaps committed history of shape '{name}'")]
    OverlappingSegment { name: String, start: u32, end: u32 },

    #[error("shape '{0}' already exists")]
    DuplicateShape(String),

    #[error("no shape named '{0}'")]
    NoSuchShape(String),

    /// A keyframe already exists at the requested time.
    #[error("shape '{name}' already has a keyframe at t={time}")]
    DuplicateTime { name: String, time: u32 },

    /// No keyframe exists at the requested time.
    #[error("shape '{name}' has no keyframe at t={time}")]
    NoSuchKeyframe { name: String, time: u32 },
}
