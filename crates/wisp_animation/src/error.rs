//! Descriptor error types

use thiserror::Error;

/// Errors from descriptor validation and trigger registration
///
/// Preset builders themselves never fail; these surface only from the
/// opt-in [`validate`](crate::AnimationDescriptor::validate) checks and from
/// [`TriggerRegistry::register`](crate::TriggerRegistry::register).
#[derive(Clone, Debug, PartialEq, Error)]
pub enum DescriptorError {
    #[error("trigger name must not be empty")]
    EmptyTriggerName,

    #[error("trigger `{0}` is already registered")]
    DuplicateTrigger(String),

    #[error("keyframe sequence must contain at least one step")]
    EmptyKeyframes,

    #[error("keyframe offset {found} at index {index} is outside [0, 1]")]
    OffsetOutOfRange { index: usize, found: f64 },

    #[error("keyframe offsets must be non-decreasing: {prev} followed by {next}")]
    UnorderedOffsets { prev: f64, next: f64 },

    #[error("keyframe sequence must start at offset 0, starts at {0}")]
    MissingStartFrame(f64),

    #[error("keyframe sequence must end at offset 1, ends at {0}")]
    MissingEndFrame(f64),
}
