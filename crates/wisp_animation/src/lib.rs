//! Wisp Animation Descriptors
//!
//! Declarative enter/leave transition descriptors and ready-made presets.
//!
//! # Features
//!
//! - **Style Snapshots**: Ordered property maps describing a visual state
//! - **Transition Rules**: Enter/leave/any-to-any predicates with ordered steps
//! - **Keyframe Sequences**: Offset-pinned snapshots with structural validation
//! - **Child Queries**: Optional entering/leaving queries with stagger spacing
//! - **Presets**: expand/collapse, fade-out, fade-in/out, staggered menu
//! - **Trigger Registry**: Per-component registration with unique names
//!
//! Everything here is pure value construction. Playback, timing resolution,
//! and cancellation live in the host framework's transition engine; this
//! crate only builds the descriptors it consumes.
//!
//! # Example
//!
//! ```
//! use wisp_animation::{presets, TriggerRegistry};
//!
//! let mut animations = TriggerRegistry::new();
//! animations.register(presets::expand_collapse()).unwrap();
//! animations.register(presets::show_hide_menu_with("75ms")).unwrap();
//!
//! let trigger = animations.get("expandCollapse").unwrap();
//! assert_eq!(trigger.rules().len(), 2);
//! ```

pub mod error;
pub mod presets;
pub mod registry;
pub mod step;
pub mod style;
pub mod timing;
pub mod transition;

pub use error::DescriptorError;
pub use registry::TriggerRegistry;
pub use step::{AnimateTarget, AnimationStep, KeyframeStep, Keyframes, QuerySelector, QueryStep};
pub use style::{style, StyleMap, StyleValue};
pub use timing::{Easing, Timing};
pub use transition::{AnimationDescriptor, TransitionPredicate, TransitionRule};
