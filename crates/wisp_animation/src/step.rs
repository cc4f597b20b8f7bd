//! Animation steps
//!
//! The ordered instructions inside a transition rule: instantaneous style
//! sets, timed animations toward a style or through keyframes, and child
//! queries with optional stagger spacing.

use crate::error::DescriptorError;
use crate::style::StyleMap;
use crate::timing::Timing;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Keyframes
// ============================================================================

/// A style snapshot pinned to a normalized position along a timeline
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct KeyframeStep {
    /// Position in [0, 1] along the animation's timeline
    pub offset: f64,
    /// Target style at this position
    pub style: StyleMap,
}

/// An ordered keyframe sequence
///
/// Valid sequences have non-decreasing offsets that start at 0 and end at 1;
/// [`validate`](Keyframes::validate) checks this explicitly. Construction
/// itself never fails, matching the builder contract.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Keyframes {
    steps: Vec<KeyframeStep>,
}

impl Keyframes {
    /// Create an empty keyframe sequence
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a keyframe at the given offset (builder pattern)
    pub fn at(mut self, offset: f64, style: StyleMap) -> Self {
        self.steps.push(KeyframeStep { offset, style });
        self
    }

    /// The keyframes in timeline order
    pub fn steps(&self) -> &[KeyframeStep] {
        &self.steps
    }

    /// Check offset ordering and [0, 1] coverage
    pub fn validate(&self) -> Result<(), DescriptorError> {
        let first = self.steps.first().ok_or(DescriptorError::EmptyKeyframes)?;
        for (index, step) in self.steps.iter().enumerate() {
            if !(0.0..=1.0).contains(&step.offset) {
                return Err(DescriptorError::OffsetOutOfRange {
                    index,
                    found: step.offset,
                });
            }
        }
        for pair in self.steps.windows(2) {
            if pair[1].offset < pair[0].offset {
                return Err(DescriptorError::UnorderedOffsets {
                    prev: pair[0].offset,
                    next: pair[1].offset,
                });
            }
        }
        if first.offset != 0.0 {
            return Err(DescriptorError::MissingStartFrame(first.offset));
        }
        // steps is non-empty, checked above
        let last = &self.steps[self.steps.len() - 1];
        if last.offset != 1.0 {
            return Err(DescriptorError::MissingEndFrame(last.offset));
        }
        Ok(())
    }
}

// ============================================================================
// Queries
// ============================================================================

/// Which child elements a query step targets
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum QuerySelector {
    /// Children entering the rendered tree
    Entering,
    /// Children leaving the rendered tree
    Leaving,
    /// Raw selector string, passed to the host engine verbatim
    Selector(String),
}

impl fmt::Display for QuerySelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Entering => write!(f, ":enter"),
            Self::Leaving => write!(f, ":leave"),
            Self::Selector(s) => write!(f, "{}", s),
        }
    }
}

/// A step that locates child elements and runs nested steps on each match
///
/// Optional queries matching zero elements are a declared tolerance: the
/// host engine skips them without raising anything.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryStep {
    /// Which children to match
    pub selector: QuerySelector,
    /// Whether zero matches is acceptable
    pub optional: bool,
    /// Delay inserted between successive matched elements' animations
    pub stagger: Option<Timing>,
    /// Steps run on each matched element
    pub steps: Vec<AnimationStep>,
}

impl QueryStep {
    fn with_selector(selector: QuerySelector) -> Self {
        Self {
            selector,
            optional: false,
            stagger: None,
            steps: Vec::new(),
        }
    }

    /// Query children entering the rendered tree
    pub fn entering() -> Self {
        Self::with_selector(QuerySelector::Entering)
    }

    /// Query children leaving the rendered tree
    pub fn leaving() -> Self {
        Self::with_selector(QuerySelector::Leaving)
    }

    /// Query children by a raw selector string
    pub fn select(selector: impl Into<String>) -> Self {
        Self::with_selector(QuerySelector::Selector(selector.into()))
    }

    /// Tolerate zero matched elements
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Space successive matches' animations by the given delay
    pub fn stagger(mut self, spacing: impl Into<Timing>) -> Self {
        self.stagger = Some(spacing.into());
        self
    }

    /// Instantaneously apply a style to each match
    pub fn set(mut self, style: StyleMap) -> Self {
        self.steps.push(AnimationStep::Style(style));
        self
    }

    /// Animate each match toward a target style
    pub fn animate(mut self, timing: impl Into<Timing>, style: StyleMap) -> Self {
        self.steps.push(AnimationStep::animate(timing, style));
        self
    }

    /// Animate each match through a keyframe sequence
    pub fn animate_keyframes(mut self, timing: impl Into<Timing>, frames: Keyframes) -> Self {
        self.steps.push(AnimationStep::animate_keyframes(timing, frames));
        self
    }
}

// ============================================================================
// Steps
// ============================================================================

/// What a timed animation moves toward
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimateTarget {
    /// A single end-state style
    Style(StyleMap),
    /// A keyframe sequence
    Keyframes(Keyframes),
}

/// One instruction inside a transition rule
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum AnimationStep {
    /// Instantaneous style set, no transition
    Style(StyleMap),
    /// Timed animation toward a style or through keyframes
    Animate {
        /// Pacing for this step
        timing: Timing,
        /// End state or keyframe sequence
        target: AnimateTarget,
    },
    /// Child query with nested steps
    Query(QueryStep),
}

impl AnimationStep {
    /// Timed animation toward an end-state style
    pub fn animate(timing: impl Into<Timing>, style: StyleMap) -> Self {
        Self::Animate {
            timing: timing.into(),
            target: AnimateTarget::Style(style),
        }
    }

    /// Timed animation through a keyframe sequence
    pub fn animate_keyframes(timing: impl Into<Timing>, frames: Keyframes) -> Self {
        Self::Animate {
            timing: timing.into(),
            target: AnimateTarget::Keyframes(frames),
        }
    }

    /// The timing of this step, if it is an animated one
    pub fn timing(&self) -> Option<&Timing> {
        match self {
            Self::Animate { timing, .. } => Some(timing),
            Self::Style(_) | Self::Query(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::style;

    fn frames() -> Keyframes {
        Keyframes::new()
            .at(0.0, style().prop("opacity", 0))
            .at(0.5, style().prop("opacity", 0.5))
            .at(1.0, style().prop("opacity", 1))
    }

    #[test]
    fn test_valid_keyframes() {
        assert_eq!(frames().validate(), Ok(()));
    }

    #[test]
    fn test_empty_keyframes_rejected() {
        assert_eq!(
            Keyframes::new().validate(),
            Err(DescriptorError::EmptyKeyframes)
        );
    }

    #[test]
    fn test_decreasing_offsets_rejected() {
        let frames = Keyframes::new()
            .at(0.0, style().prop("opacity", 0))
            .at(0.8, style().prop("opacity", 1))
            .at(0.5, style().prop("opacity", 0.5));
        assert_eq!(
            frames.validate(),
            Err(DescriptorError::UnorderedOffsets {
                prev: 0.8,
                next: 0.5
            })
        );
    }

    #[test]
    fn test_missing_endpoints_rejected() {
        let no_start = Keyframes::new()
            .at(0.2, style().prop("opacity", 0))
            .at(1.0, style().prop("opacity", 1));
        assert_eq!(
            no_start.validate(),
            Err(DescriptorError::MissingStartFrame(0.2))
        );

        let no_end = Keyframes::new()
            .at(0.0, style().prop("opacity", 0))
            .at(0.9, style().prop("opacity", 1));
        assert_eq!(no_end.validate(), Err(DescriptorError::MissingEndFrame(0.9)));
    }

    #[test]
    fn test_offset_out_of_range_rejected() {
        let frames = Keyframes::new()
            .at(0.0, style().prop("opacity", 0))
            .at(1.5, style().prop("opacity", 1));
        assert_eq!(
            frames.validate(),
            Err(DescriptorError::OffsetOutOfRange {
                index: 1,
                found: 1.5
            })
        );
    }

    #[test]
    fn test_query_builder() {
        let q = QueryStep::entering()
            .optional()
            .stagger("50ms")
            .animate_keyframes(".15s", frames());
        assert_eq!(q.selector, QuerySelector::Entering);
        assert!(q.optional);
        assert_eq!(q.stagger.as_ref().map(|t| t.duration()), Some("50ms"));
        assert_eq!(q.steps.len(), 1);
    }

    #[test]
    fn test_selector_display() {
        assert_eq!(QuerySelector::Entering.to_string(), ":enter");
        assert_eq!(QuerySelector::Leaving.to_string(), ":leave");
        assert_eq!(QuerySelector::Selector(".item".into()).to_string(), ".item");
    }
}
