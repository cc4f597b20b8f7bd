//! Transition timing
//!
//! A [`Timing`] pairs a verbatim duration string with an optional easing
//! curve. Durations are never parsed here; malformed strings flow through to
//! the host engine, which owns rejection and reporting.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Easing curve applied over a timed step
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Easing {
    /// Constant rate
    Linear,
    /// Browser-default ease
    Ease,
    /// Slow start
    EaseIn,
    /// Slow finish
    EaseOut,
    /// Slow start and finish
    EaseInOut,
    /// Custom cubic bezier control points
    CubicBezier(f32, f32, f32, f32),
}

impl fmt::Display for Easing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => write!(f, "linear"),
            Self::Ease => write!(f, "ease"),
            Self::EaseIn => write!(f, "ease-in"),
            Self::EaseOut => write!(f, "ease-out"),
            Self::EaseInOut => write!(f, "ease-in-out"),
            Self::CubicBezier(x1, y1, x2, y2) => {
                write!(f, "cubic-bezier({}, {}, {}, {})", x1, y1, x2, y2)
            }
        }
    }
}

/// Pacing for an animated step or a stagger spacing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Timing {
    duration: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    easing: Option<Easing>,
}

impl Timing {
    /// Create a timing from a duration string, no easing
    pub fn new(duration: impl Into<String>) -> Self {
        Self {
            duration: duration.into(),
            easing: None,
        }
    }

    /// Attach an easing curve (builder pattern)
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = Some(easing);
        self
    }

    /// The duration string, exactly as supplied by the caller
    pub fn duration(&self) -> &str {
        &self.duration
    }

    /// The easing curve, if one was set
    pub fn easing(&self) -> Option<Easing> {
        self.easing
    }
}

impl From<&str> for Timing {
    fn from(duration: &str) -> Self {
        Self::new(duration)
    }
}

impl From<String> for Timing {
    fn from(duration: String) -> Self {
        Self::new(duration)
    }
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.easing {
            Some(easing) => write!(f, "{} {}", self.duration, easing),
            None => write!(f, "{}", self.duration),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_is_verbatim() {
        // Not this crate's job to reject nonsense durations
        assert_eq!(Timing::new("250ms").duration(), "250ms");
        assert_eq!(Timing::new("banana").duration(), "banana");
    }

    #[test]
    fn test_display_with_easing() {
        let t = Timing::new(".15s").with_easing(Easing::EaseIn);
        assert_eq!(t.to_string(), ".15s ease-in");
        assert_eq!(Timing::new("250ms").to_string(), "250ms");
    }

    #[test]
    fn test_cubic_bezier_display() {
        let e = Easing::CubicBezier(0.4, 0.0, 0.2, 1.0);
        assert_eq!(e.to_string(), "cubic-bezier(0.4, 0, 0.2, 1)");
    }
}
