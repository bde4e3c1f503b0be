//! Per-entity behaviour collection and frame dispatch

use division_core::{Behaviour, Result};

/// The behaviours attached to one entity, in attachment order.
///
/// The owning entity holds the set exclusively; dropping it drops every
/// behaviour. [`BehaviourSet::update`] is the per-frame entry point a
/// scheduler calls.
#[derive(Default)]
pub struct BehaviourSet {
    behaviours: Vec<Box<dyn Behaviour>>,
}

impl BehaviourSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a behaviour. It runs after everything attached before it.
    pub fn add(&mut self, behaviour: Box<dyn Behaviour>) {
        self.behaviours.push(behaviour);
    }

    /// Detach the first behaviour with the given name
    pub fn remove(&mut self, name: &str) -> Option<Box<dyn Behaviour>> {
        let index = self.behaviours.iter().position(|b| b.name() == name)?;
        Some(self.behaviours.remove(index))
    }

    pub fn get(&self, name: &str) -> Option<&dyn Behaviour> {
        self.behaviours
            .iter()
            .find(|b| b.name() == name)
            .map(|b| b.as_ref())
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut (dyn Behaviour + 'static)> {
        self.behaviours
            .iter_mut()
            .find(|b| b.name() == name)
            .map(|b| b.as_mut())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Behaviour> {
        self.behaviours.iter().map(|b| b.as_ref())
    }

    pub fn len(&self) -> usize {
        self.behaviours.len()
    }

    pub fn is_empty(&self) -> bool {
        self.behaviours.is_empty()
    }

    /// Run one frame: call `update` on every behaviour that is active and
    /// enabled, in attachment order.
    ///
    /// Returns how many behaviours were updated. Stops at the first error.
    pub fn update(&mut self, dt: f64) -> Result<usize> {
        let mut dispatched = 0;
        for behaviour in &mut self.behaviours {
            if !behaviour.is_active_and_enabled() {
                log::trace!("skipping inactive behaviour '{}'", behaviour.name());
                continue;
            }
            if let Err(err) = behaviour.update(dt) {
                log::warn!("behaviour '{}' failed to update: {}", behaviour.name(), err);
                return Err(err);
            }
            dispatched += 1;
        }
        Ok(dispatched)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use division_core::{DivisionError, Lifecycle};
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder {
        name: String,
        lifecycle: Lifecycle,
        log: Rc<RefCell<Vec<String>>>,
        fail: bool,
    }

    impl Recorder {
        fn boxed(name: &str, log: &Rc<RefCell<Vec<String>>>) -> Box<Self> {
            Box::new(Self {
                name: name.into(),
                lifecycle: Lifecycle::new(),
                log: Rc::clone(log),
                fail: false,
            })
        }
    }

    impl Behaviour for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn lifecycle(&self) -> &Lifecycle {
            &self.lifecycle
        }

        fn lifecycle_mut(&mut self) -> &mut Lifecycle {
            &mut self.lifecycle
        }

        fn update(&mut self, _dt: f64) -> Result<()> {
            if self.fail {
                return Err(DivisionError::BehaviourError(format!("{} exploded", self.name)));
            }
            self.log.borrow_mut().push(self.name.clone());
            Ok(())
        }
    }

    #[test]
    fn test_update_in_attachment_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = BehaviourSet::new();
        set.add(Recorder::boxed("a", &log));
        set.add(Recorder::boxed("b", &log));
        set.add(Recorder::boxed("c", &log));

        assert_eq!(set.update(1.0 / 60.0).unwrap(), 3);
        assert_eq!(*log.borrow(), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_skips_inactive() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = BehaviourSet::new();
        set.add(Recorder::boxed("a", &log));
        set.add(Recorder::boxed("b", &log));
        set.get_mut("a").unwrap().set_active_and_enabled(false);

        assert_eq!(set.update(0.016).unwrap(), 1);
        assert_eq!(*log.borrow(), vec!["b"]);
    }

    #[test]
    fn test_gate_is_active_flag_not_enabled_flag() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = BehaviourSet::new();
        set.add(Recorder::boxed("a", &log));
        // Only `enabled` cleared; the caller has not propagated it yet
        set.get_mut("a").unwrap().set_enabled(false);

        assert_eq!(set.update(0.016).unwrap(), 1);
        assert!(!set.get("a").unwrap().enabled());
    }

    #[test]
    fn test_stops_at_first_error() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = BehaviourSet::new();
        set.add(Recorder::boxed("a", &log));
        let mut bad = Recorder::boxed("bad", &log);
        bad.fail = true;
        set.add(bad);
        set.add(Recorder::boxed("c", &log));

        let err = set.update(0.016).unwrap_err();
        assert!(matches!(err, DivisionError::BehaviourError(_)));
        assert_eq!(*log.borrow(), vec!["a"]);
    }

    #[test]
    fn test_remove_and_lookup() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut set = BehaviourSet::new();
        assert!(set.is_empty());
        set.add(Recorder::boxed("a", &log));
        set.add(Recorder::boxed("b", &log));

        let removed = set.remove("a").unwrap();
        assert_eq!(removed.name(), "a");
        assert_eq!(set.len(), 1);
        assert!(set.get("a").is_none());
        assert!(set.remove("missing").is_none());
        assert_eq!(set.iter().map(|b| b.name()).collect::<Vec<_>>(), vec!["b"]);
    }
}
