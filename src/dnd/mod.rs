//! App-level drag-and-drop coordination.
//!
//! The drag payload is an in-process [`ImageReference`], so it travels
//! through shared state rather than the platform data-transfer object:
//! drag sources publish it into [`DragState`] on `dragstart`, drop
//! targets consume it on `drop`. Targets register a handler with the
//! [`DropTargetRegistry`] for the lifetime of their component instance
//! (see [`hooks::use_droppable`]).

mod hooks;
mod registry;

pub use hooks::{use_dnd, use_droppable, Droppable};
pub use registry::DropTargetRegistry;

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use dioxus::prelude::*;
use ulid::Ulid;

use crate::types::ImageReference;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum DndError {
    #[error("no drop target registered for {0}")]
    UnknownTarget(DropTargetId),
}

/// Identity of a registered drop target.
///
/// Minted once per component instance and held for its lifetime, so it
/// is stable across re-renders and distinct across instances.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct DropTargetId(Ulid);

impl DropTargetId {
    pub fn new() -> Self {
        Self(Ulid::new())
    }
}

impl Default for DropTargetId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DropTargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Transient state of the current drag gesture.
///
/// Recomputed per drag event and never persisted. The transition
/// methods are pure so the gesture semantics can be tested without a
/// Dioxus runtime.
#[derive(Clone, Default, PartialEq)]
pub struct DragState {
    active: Option<ImageReference>,
    over: Option<DropTargetId>,
}

impl DragState {
    /// A drag gesture started somewhere in the app.
    pub fn begin(&mut self, image: ImageReference) {
        self.active = Some(image);
        self.over = None;
    }

    /// The payload moved over a drop target.
    pub fn enter(&mut self, id: DropTargetId) {
        if self.active.is_some() {
            self.over = Some(id);
        }
    }

    /// The payload left a drop target. Ignored unless `id` is the one
    /// currently hovered, so stale leave events cannot clobber a newer
    /// enter.
    pub fn leave(&mut self, id: DropTargetId) {
        if self.over == Some(id) {
            self.over = None;
        }
    }

    /// The gesture ended (drop or cancel).
    pub fn clear(&mut self) {
        self.active = None;
        self.over = None;
    }

    /// Is some drag gesture in progress anywhere in the app?
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    /// Is the payload currently over this specific target?
    pub fn is_over(&self, id: DropTargetId) -> bool {
        self.over == Some(id)
    }

    pub fn payload(&self) -> Option<&ImageReference> {
        self.active.as_ref()
    }
}

/// Shared drag-and-drop coordinator, provided at the app root.
#[derive(Clone)]
pub struct DndContext {
    state: Signal<DragState>,
    registry: Rc<RefCell<DropTargetRegistry>>,
}

impl DndContext {
    pub fn new(state: Signal<DragState>) -> Self {
        Self {
            state,
            registry: Rc::new(RefCell::new(DropTargetRegistry::new())),
        }
    }

    pub fn begin_drag(&self, image: ImageReference) {
        tracing::debug!(image = %image.id, "drag started");
        let mut state = self.state;
        state.write().begin(image);
    }

    pub fn drag_enter(&self, id: DropTargetId) {
        let mut state = self.state;
        state.write().enter(id);
    }

    pub fn drag_leave(&self, id: DropTargetId) {
        let mut state = self.state;
        state.write().leave(id);
    }

    /// End the gesture without a drop (cancel or drop outside a target).
    pub fn end_drag(&self) {
        let mut state = self.state;
        state.write().clear();
    }

    /// Deliver the current payload to the target and end the gesture.
    pub fn drop_on(&self, id: DropTargetId) {
        let payload = self.state.read().payload().cloned();
        if let Some(image) = payload {
            tracing::debug!(target = %id, image = %image.id, "drop dispatched");
            if let Err(e) = self.registry.borrow().dispatch(id, image) {
                tracing::warn!("drop discarded: {}", e);
            }
        }
        let mut state = self.state;
        state.write().clear();
    }

    pub(crate) fn register(&self, id: DropTargetId, handler: impl Fn(ImageReference) + 'static) {
        self.registry.borrow_mut().register(id, handler);
    }

    pub(crate) fn unregister(&self, id: DropTargetId) {
        self.registry.borrow_mut().unregister(id);
    }

    pub(crate) fn state(&self) -> Signal<DragState> {
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_image() -> ImageReference {
        ImageReference::new("cat.png", "cat.png", 64, 64)
    }

    #[test]
    fn test_idle_state_is_inactive() {
        let state = DragState::default();
        assert!(!state.is_active());
        assert!(state.payload().is_none());
    }

    #[test]
    fn test_begin_activates_without_hover() {
        let mut state = DragState::default();
        state.begin(test_image());
        assert!(state.is_active());
        assert!(!state.is_over(DropTargetId::new()));
    }

    #[test]
    fn test_enter_and_leave_toggle_hover() {
        let id = DropTargetId::new();
        let mut state = DragState::default();
        state.begin(test_image());

        state.enter(id);
        assert!(state.is_over(id));

        state.leave(id);
        assert!(!state.is_over(id));
        assert!(state.is_active());
    }

    #[test]
    fn test_enter_without_active_drag_is_ignored() {
        let id = DropTargetId::new();
        let mut state = DragState::default();
        state.enter(id);
        assert!(!state.is_over(id));
    }

    #[test]
    fn test_stale_leave_does_not_clobber_newer_enter() {
        let first = DropTargetId::new();
        let second = DropTargetId::new();
        let mut state = DragState::default();
        state.begin(test_image());

        state.enter(first);
        state.enter(second);
        // Leave for the earlier target arrives after entering the next one
        state.leave(first);
        assert!(state.is_over(second));
    }

    #[test]
    fn test_clear_resets_everything() {
        let id = DropTargetId::new();
        let mut state = DragState::default();
        state.begin(test_image());
        state.enter(id);

        state.clear();
        assert!(!state.is_active());
        assert!(!state.is_over(id));
        assert!(state.payload().is_none());
    }

    #[test]
    fn test_drop_target_ids_are_distinct() {
        let a = DropTargetId::new();
        let b = DropTargetId::new();
        assert_ne!(a, b);
    }
}
