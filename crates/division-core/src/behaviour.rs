//! Behaviour lifecycle state and the per-frame behaviour trait

use crate::Result;

/// Enable/active flags that gate per-frame dispatch of a behaviour.
///
/// The two flags are independent. `is_active_and_enabled` would normally be
/// derived from `enabled` plus the owning entity and its ancestors; that
/// composition lives with the entity layer, so here it is plain data and the
/// holder is responsible for never setting it while `enabled` is false.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lifecycle {
    /// Whether user code wants this behaviour to run
    pub enabled: bool,
    /// Whether the behaviour, its entity, and every ancestor are active
    pub is_active_and_enabled: bool,
}

impl Default for Lifecycle {
    fn default() -> Self {
        Self {
            enabled: true,
            is_active_and_enabled: true,
        }
    }
}

impl Lifecycle {
    /// Both flags set
    pub fn new() -> Self {
        Self::default()
    }
}

/// A per-frame updatable unit attached to an entity.
///
/// Dispatchers check [`Behaviour::is_active_and_enabled`] before calling
/// [`Behaviour::update`] and skip the behaviour entirely when it is false.
pub trait Behaviour {
    /// Human-readable name for this behaviour
    fn name(&self) -> &str;

    fn lifecycle(&self) -> &Lifecycle;

    fn lifecycle_mut(&mut self) -> &mut Lifecycle;

    /// Called once per frame while active and enabled
    fn update(&mut self, dt: f64) -> Result<()>;

    fn enabled(&self) -> bool {
        self.lifecycle().enabled
    }

    /// Sets `enabled` only. `is_active_and_enabled` is left untouched.
    fn set_enabled(&mut self, enabled: bool) {
        self.lifecycle_mut().enabled = enabled;
    }

    fn is_active_and_enabled(&self) -> bool {
        self.lifecycle().is_active_and_enabled
    }

    fn set_active_and_enabled(&mut self, active: bool) {
        self.lifecycle_mut().is_active_and_enabled = active;
    }
}
