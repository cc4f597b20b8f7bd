//! Builds the stock presets, registers them the way a component would, and
//! prints the descriptor a host engine receives.
//!
//! Run with: cargo run -p wisp_animation --example menu_triggers

use wisp_animation::{presets, TriggerRegistry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut animations = TriggerRegistry::new();
    animations.register(presets::expand_collapse())?;
    animations.register(presets::fade_out())?;
    animations.register(presets::fade_in_out())?;
    animations.register(presets::show_hide_menu_with("75ms"))?;

    for descriptor in animations.iter() {
        descriptor.validate()?;
        println!("{}", serde_json::to_string_pretty(descriptor)?);
    }

    Ok(())
}
