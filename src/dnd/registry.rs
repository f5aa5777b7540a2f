//! Drop target registry.
//!
//! Plain map from target id to drop handler, kept separate from the
//! Dioxus layer so it can be exercised without a UI runtime. The hooks
//! in [`super::hooks`] own registration lifecycle; this module only
//! stores and dispatches.

use std::collections::HashMap;
use std::rc::Rc;

use super::{DndError, DropTargetId};
use crate::types::ImageReference;

type DropHandler = Rc<dyn Fn(ImageReference)>;

/// Registered drop targets and their payload handlers.
#[derive(Default)]
pub struct DropTargetRegistry {
    handlers: HashMap<DropTargetId, DropHandler>,
}

impl DropTargetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a handler for `id`, replacing any existing one.
    pub fn register(&mut self, id: DropTargetId, handler: impl Fn(ImageReference) + 'static) {
        if self.handlers.insert(id, Rc::new(handler)).is_some() {
            tracing::debug!(%id, "drop target handler replaced");
        }
    }

    /// Remove the handler for `id`. Unknown ids are a no-op.
    pub fn unregister(&mut self, id: DropTargetId) {
        self.handlers.remove(&id);
    }

    /// Invoke the handler registered for `id` with the dropped image.
    pub fn dispatch(&self, id: DropTargetId, image: ImageReference) -> Result<(), DndError> {
        let handler = self
            .handlers
            .get(&id)
            .ok_or(DndError::UnknownTarget(id))?;
        handler(image);
        Ok(())
    }

    pub fn contains(&self, id: DropTargetId) -> bool {
        self.handlers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn test_image() -> ImageReference {
        ImageReference::new("cat.png", "cat.png", 64, 64)
    }

    #[test]
    fn test_register_and_dispatch_invokes_handler_once() {
        let calls = Rc::new(Cell::new(0u32));
        let seen = Rc::new(Cell::new(None::<ulid::Ulid>));

        let mut registry = DropTargetRegistry::new();
        let id = DropTargetId::new();
        {
            let calls = calls.clone();
            let seen = seen.clone();
            registry.register(id, move |image| {
                calls.set(calls.get() + 1);
                seen.set(Some(image.id));
            });
        }

        let image = test_image();
        registry.dispatch(id, image.clone()).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(seen.get(), Some(image.id));
    }

    #[test]
    fn test_dispatch_to_unknown_target_errors() {
        let registry = DropTargetRegistry::new();
        let id = DropTargetId::new();
        assert_eq!(
            registry.dispatch(id, test_image()),
            Err(DndError::UnknownTarget(id))
        );
    }

    #[test]
    fn test_unregister_removes_target() {
        let mut registry = DropTargetRegistry::new();
        let id = DropTargetId::new();
        registry.register(id, |_| {});
        assert!(registry.contains(id));

        registry.unregister(id);
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
        assert!(registry.dispatch(id, test_image()).is_err());
    }

    #[test]
    fn test_reregister_replaces_handler() {
        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));

        let mut registry = DropTargetRegistry::new();
        let id = DropTargetId::new();
        {
            let first = first.clone();
            registry.register(id, move |_| first.set(first.get() + 1));
        }
        {
            let second = second.clone();
            registry.register(id, move |_| second.set(second.get() + 1));
        }

        assert_eq!(registry.len(), 1);
        registry.dispatch(id, test_image()).unwrap();
        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn test_distinct_targets_dispatch_independently() {
        let a_calls = Rc::new(Cell::new(0u32));
        let b_calls = Rc::new(Cell::new(0u32));

        let mut registry = DropTargetRegistry::new();
        let a = DropTargetId::new();
        let b = DropTargetId::new();
        assert_ne!(a, b);
        {
            let a_calls = a_calls.clone();
            registry.register(a, move |_| a_calls.set(a_calls.get() + 1));
        }
        {
            let b_calls = b_calls.clone();
            registry.register(b, move |_| b_calls.set(b_calls.get() + 1));
        }

        assert_eq!(registry.len(), 2);
        registry.dispatch(b, test_image()).unwrap();
        assert_eq!(a_calls.get(), 0);
        assert_eq!(b_calls.get(), 1);
    }
}
