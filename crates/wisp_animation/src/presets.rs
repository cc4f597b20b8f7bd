//! Transition presets
//!
//! Ready-made enter/leave descriptors for common UI motion: accordion
//! expand/collapse, fades, and a staggered menu reveal. Each preset comes as
//! a pair: `name()` with the documented default duration and
//! `name_with(duration)` taking any duration string. Both are pure; every
//! call builds a fresh descriptor.
//!
//! # Example
//!
//! ```
//! use wisp_animation::presets::{expand_collapse, expand_collapse_with};
//!
//! // Default 250ms pacing
//! let descriptor = expand_collapse();
//! assert_eq!(descriptor.name(), "expandCollapse");
//!
//! // Slower variant, same trigger name
//! let slow = expand_collapse_with("600ms");
//! assert_eq!(slow.name(), "expandCollapse");
//! ```

use crate::step::{Keyframes, QueryStep};
use crate::style::{style, StyleMap};
use crate::timing::{Easing, Timing};
use crate::transition::{AnimationDescriptor, TransitionRule};

/// Default pacing for the expand/collapse and fade presets
pub const DEFAULT_DURATION: &str = "250ms";

/// Default stagger spacing for the menu preset
pub const DEFAULT_MENU_STAGGER: &str = "50ms";

/// Fixed per-element duration of the menu keyframe animations
const MENU_FRAME_DURATION: &str = ".15s";

fn hidden_collapsed() -> StyleMap {
    style().prop("opacity", 0).prop("height", 0)
}

fn visible_expanded() -> StyleMap {
    style().prop("opacity", 1).prop("height", "100%")
}

/// Expand/collapse for accordion-style content, trigger `expandCollapse`
///
/// Entering content grows from nothing to full height while fading in;
/// leaving content reverses the motion. Default duration
/// [`DEFAULT_DURATION`].
pub fn expand_collapse() -> AnimationDescriptor {
    expand_collapse_with(DEFAULT_DURATION)
}

/// [`expand_collapse`] with an explicit duration
pub fn expand_collapse_with(duration: impl Into<Timing>) -> AnimationDescriptor {
    let duration = duration.into();
    AnimationDescriptor::new("expandCollapse")
        .rule(
            TransitionRule::enter()
                .set(hidden_collapsed())
                .animate(duration.clone(), visible_expanded()),
        )
        .rule(
            TransitionRule::leave()
                .set(visible_expanded())
                .animate(duration, hidden_collapsed()),
        )
}

/// Fade out on removal, trigger `fadeOut`
///
/// Asymmetric on purpose: entering elements snap to full opacity with no
/// transition, only removal is animated.
pub fn fade_out() -> AnimationDescriptor {
    fade_out_with(DEFAULT_DURATION)
}

/// [`fade_out`] with an explicit duration
pub fn fade_out_with(duration: impl Into<Timing>) -> AnimationDescriptor {
    AnimationDescriptor::new("fadeOut")
        .rule(TransitionRule::enter().set(style().prop("opacity", 1)))
        .rule(TransitionRule::leave().animate(duration, style().prop("opacity", 0)))
}

/// Symmetric fade both directions, trigger `fadeInOut`
pub fn fade_in_out() -> AnimationDescriptor {
    fade_in_out_with(DEFAULT_DURATION)
}

/// [`fade_in_out`] with an explicit duration
pub fn fade_in_out_with(duration: impl Into<Timing>) -> AnimationDescriptor {
    let duration = duration.into();
    AnimationDescriptor::new("fadeInOut")
        .rule(
            TransitionRule::enter()
                .set(style().prop("opacity", 0))
                .animate(duration.clone(), style().prop("opacity", 1)),
        )
        .rule(TransitionRule::leave().animate(duration, style().prop("opacity", 0)))
}

fn menu_enter_frames() -> Keyframes {
    Keyframes::new()
        .at(0.0, style().prop("opacity", 0).prop("transform", "translateX(10%)"))
        .at(0.5, style().prop("opacity", 0.5).prop("transform", "translateX(5%)"))
        .at(1.0, style().prop("opacity", 1).prop("transform", "translateX(0)"))
}

fn menu_leave_frames() -> Keyframes {
    Keyframes::new()
        .at(0.0, style().prop("opacity", 1).prop("transform", "translateX(0)"))
        .at(0.5, style().prop("opacity", 0.5).prop("transform", "translateX(5%)"))
        .at(1.0, style().prop("opacity", 0).prop("transform", "translateX(10%)"))
}

/// Staggered slide-in/slide-out for menu items, trigger `showHideMenu`
///
/// A single any-to-any rule: entering items are first hidden, then revealed
/// one after another with `duration` between starts, each sliding in from
/// the right over a fixed 0.15s ease-in curve; leaving items mirror the
/// motion with ease-out. All three queries are optional, so a menu with no
/// entering or no leaving items animates whatever is there and skips the
/// rest. Default stagger spacing [`DEFAULT_MENU_STAGGER`].
pub fn show_hide_menu() -> AnimationDescriptor {
    show_hide_menu_with(DEFAULT_MENU_STAGGER)
}

/// [`show_hide_menu`] with an explicit stagger spacing
pub fn show_hide_menu_with(duration: impl Into<Timing>) -> AnimationDescriptor {
    let stagger = duration.into();
    AnimationDescriptor::new("showHideMenu").rule(
        TransitionRule::any()
            .query(QueryStep::entering().optional().set(style().prop("opacity", 0)))
            .query(
                QueryStep::entering()
                    .optional()
                    .stagger(stagger.clone())
                    .animate_keyframes(
                        Timing::new(MENU_FRAME_DURATION).with_easing(Easing::EaseIn),
                        menu_enter_frames(),
                    ),
            )
            .query(
                QueryStep::leaving()
                    .optional()
                    .stagger(stagger)
                    .animate_keyframes(
                        Timing::new(MENU_FRAME_DURATION).with_easing(Easing::EaseOut),
                        menu_leave_frames(),
                    ),
            ),
    )
}
