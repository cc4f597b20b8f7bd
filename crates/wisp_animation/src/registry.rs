//! Trigger registry
//!
//! The component-side registration list for animation descriptors. Trigger
//! names are the handles markup bindings use, so they must be unique within
//! a registry; [`register`](TriggerRegistry::register) enforces that.

use crate::error::DescriptorError;
use crate::transition::AnimationDescriptor;
use rustc_hash::FxHashMap;
use tracing::debug;

/// Holds a component's registered animation descriptors, in registration
/// order, with unique trigger names
#[derive(Clone, Debug, Default)]
pub struct TriggerRegistry {
    by_name: FxHashMap<String, usize>,
    descriptors: Vec<AnimationDescriptor>,
}

impl TriggerRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a descriptor, rejecting duplicate trigger names
    pub fn register(&mut self, descriptor: AnimationDescriptor) -> Result<(), DescriptorError> {
        let name = descriptor.name().to_string();
        if self.by_name.contains_key(&name) {
            return Err(DescriptorError::DuplicateTrigger(name));
        }
        debug!(trigger = %name, "registered animation trigger");
        self.by_name.insert(name, self.descriptors.len());
        self.descriptors.push(descriptor);
        Ok(())
    }

    /// Look up a descriptor by trigger name
    pub fn get(&self, name: &str) -> Option<&AnimationDescriptor> {
        self.by_name.get(name).map(|&i| &self.descriptors[i])
    }

    /// Whether a trigger name is registered
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Registered trigger names, in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.iter().map(|d| d.name())
    }

    /// Registered descriptors, in registration order
    pub fn iter(&self) -> impl Iterator<Item = &AnimationDescriptor> {
        self.descriptors.iter()
    }

    /// Number of registered descriptors
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Whether the registry is empty
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}
