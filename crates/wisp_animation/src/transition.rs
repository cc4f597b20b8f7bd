//! Transition rules and animation descriptors
//!
//! An [`AnimationDescriptor`] is the finished product: a fixed trigger name
//! plus an ordered list of [`TransitionRule`]s, each pairing a state-change
//! predicate with the steps to run when it matches. Descriptors are plain
//! immutable values; the host engine owns registration, matching, and
//! playback.

use crate::error::DescriptorError;
use crate::step::{AnimateTarget, AnimationStep, Keyframes, QueryStep};
use crate::style::StyleMap;
use crate::timing::Timing;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::trace;

/// State-change predicate a rule matches against
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransitionPredicate {
    /// Element inserted into the rendered tree
    Enter,
    /// Element removed from the rendered tree
    Leave,
    /// Any state to any state
    Any,
}

impl fmt::Display for TransitionPredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Enter => write!(f, ":enter"),
            Self::Leave => write!(f, ":leave"),
            Self::Any => write!(f, "* => *"),
        }
    }
}

/// A predicate plus the ordered steps to run when it matches
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransitionRule {
    predicate: TransitionPredicate,
    steps: Vec<AnimationStep>,
}

impl TransitionRule {
    /// Create an empty rule for the given predicate
    pub fn on(predicate: TransitionPredicate) -> Self {
        Self {
            predicate,
            steps: Vec::new(),
        }
    }

    /// Rule matching element insertion
    pub fn enter() -> Self {
        Self::on(TransitionPredicate::Enter)
    }

    /// Rule matching element removal
    pub fn leave() -> Self {
        Self::on(TransitionPredicate::Leave)
    }

    /// Rule matching any state change
    pub fn any() -> Self {
        Self::on(TransitionPredicate::Any)
    }

    /// Append an instantaneous style set (builder pattern)
    pub fn set(mut self, style: StyleMap) -> Self {
        self.steps.push(AnimationStep::Style(style));
        self
    }

    /// Append a timed animation toward a target style
    pub fn animate(mut self, timing: impl Into<Timing>, style: StyleMap) -> Self {
        self.steps.push(AnimationStep::animate(timing, style));
        self
    }

    /// Append a timed animation through a keyframe sequence
    pub fn animate_keyframes(mut self, timing: impl Into<Timing>, frames: Keyframes) -> Self {
        self.steps.push(AnimationStep::animate_keyframes(timing, frames));
        self
    }

    /// Append a child query step
    pub fn query(mut self, query: QueryStep) -> Self {
        self.steps.push(AnimationStep::Query(query));
        self
    }

    /// Append an arbitrary step
    pub fn step(mut self, step: AnimationStep) -> Self {
        self.steps.push(step);
        self
    }

    /// The predicate this rule matches
    pub fn predicate(&self) -> TransitionPredicate {
        self.predicate
    }

    /// The steps in execution order
    pub fn steps(&self) -> &[AnimationStep] {
        &self.steps
    }
}

/// A named, declarative animation specification
///
/// The trigger name is the identifier the host framework binds in markup;
/// builders in [`presets`](crate::presets) always emit their documented
/// fixed name regardless of the duration argument.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnimationDescriptor {
    name: String,
    rules: Vec<TransitionRule>,
}

impl AnimationDescriptor {
    /// Create a descriptor with no rules yet
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rules: Vec::new(),
        }
    }

    /// Append a transition rule (builder pattern)
    pub fn rule(mut self, rule: TransitionRule) -> Self {
        self.rules.push(rule);
        self
    }

    /// The trigger name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The rules in match-priority order
    pub fn rules(&self) -> &[TransitionRule] {
        &self.rules
    }

    /// Find the first rule matching a predicate
    pub fn rule_for(&self, predicate: TransitionPredicate) -> Option<&TransitionRule> {
        self.rules.iter().find(|r| r.predicate == predicate)
    }

    /// Check structural soundness: non-empty trigger name and valid keyframe
    /// sequences everywhere, including inside nested queries
    ///
    /// Duration strings are deliberately not checked; the host engine owns
    /// timing syntax.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.name.is_empty() {
            return Err(DescriptorError::EmptyTriggerName);
        }
        for rule in &self.rules {
            validate_steps(&rule.steps)?;
        }
        trace!(trigger = %self.name, rules = self.rules.len(), "descriptor validated");
        Ok(())
    }
}

fn validate_steps(steps: &[AnimationStep]) -> Result<(), DescriptorError> {
    for step in steps {
        match step {
            AnimationStep::Animate {
                target: AnimateTarget::Keyframes(frames),
                ..
            } => frames.validate()?,
            AnimationStep::Query(query) => validate_steps(&query.steps)?,
            AnimationStep::Style(_) | AnimationStep::Animate { .. } => {}
        }
    }
    Ok(())
}
