//! Dioxus hooks binding components to the drag-and-drop coordinator.

use dioxus::prelude::*;

use super::{DndContext, DropTargetId};
use crate::types::ImageReference;

/// Hook to access the drag-and-drop coordinator from context.
pub fn use_dnd() -> DndContext {
    use_context::<DndContext>()
}

/// Per-render view of a drop target's drag state.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct Droppable {
    /// Stable identity of this target, minted at mount
    pub id: DropTargetId,
    /// The payload is currently over this target
    pub is_over: bool,
    /// Some drag gesture is in progress anywhere in the app
    pub active: bool,
}

/// Register the calling component as a drop target.
///
/// Registration happens once at mount with an id that stays stable
/// across re-renders; the target is unregistered automatically when the
/// component leaves the tree. `on_drop` receives the payload of any
/// drop delivered to this target.
///
/// # Example
///
/// ```ignore
/// let drop = use_droppable(on_change);
/// rsx! {
///     div {
///         ondragenter: move |_| dnd.drag_enter(drop.id),
///         ondrop: move |_| dnd.drop_on(drop.id),
///         if drop.active {
///             DropOverlay { is_over: drop.is_over }
///         }
///     }
/// }
/// ```
pub fn use_droppable(on_drop: EventHandler<ImageReference>) -> Droppable {
    let dnd = use_dnd();

    let id = use_hook(|| {
        let id = DropTargetId::new();
        dnd.register(id, move |image| on_drop.call(image));
        tracing::debug!(%id, "drop target registered");
        id
    });

    {
        let dnd = dnd.clone();
        use_drop(move || {
            dnd.unregister(id);
            tracing::debug!(%id, "drop target unregistered");
        });
    }

    let state = dnd.state();
    let state = state.read();
    Droppable {
        id,
        is_over: state.is_over(id),
        active: state.is_active(),
    }
}
