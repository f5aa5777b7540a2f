//! Selectable Image Component
//!
//! An image drop slot: shows the assigned image (or a placeholder when
//! empty), registers itself as a drop target so a dragged gallery image
//! can be assigned to it, and offers an optional reset control. While
//! the image resource is fetching the slot shows [`ImageFallback`];
//! while a drag gesture is active anywhere it shows [`DropOverlay`].

use dioxus::prelude::*;

use crate::components::{DropOverlay, IconButton, IconSize, ImageFallback, ImageMetadataOverlay};
use crate::context::use_url_resolver;
use crate::dnd::{use_dnd, use_droppable};
use crate::types::ImageReference;

/// Load lifecycle of the slot's `img` element.
///
/// Derived from the element's load/error events; reset to `Loading`
/// whenever the slot is pointed at a different image.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
enum LoadPhase {
    Loading,
    Loaded,
    Failed,
}

/// Fallback stays up until the image actually loads, including after a
/// load failure.
fn shows_fallback(phase: LoadPhase) -> bool {
    phase != LoadPhase::Loaded
}

fn image_class(phase: LoadPhase) -> &'static str {
    if phase == LoadPhase::Loaded {
        "selectable-image__img"
    } else {
        "selectable-image__img selectable-image__img--pending"
    }
}

/// Image drop slot
///
/// # Examples
///
/// ```ignore
/// rsx! {
///     SelectableImage {
///         image: slot(),
///         on_change: move |image| slot.set(Some(image)),
///         on_reset: Some(EventHandler::new(move |_| slot.set(None))),
///     }
/// }
/// ```
#[component]
pub fn SelectableImage(
    /// Image currently assigned to the slot, if any
    image: Option<ImageReference>,
    /// Called with the payload when an image is dropped on the slot
    on_change: EventHandler<ImageReference>,
    /// If provided, a reset control is rendered that invokes it
    #[props(default = None)]
    on_reset: Option<EventHandler<()>>,
    /// Receives the raw event of an image load failure
    #[props(default = None)]
    on_error: Option<EventHandler<ImageEvent>>,
    /// Size of the reset control
    #[props(default = IconSize::Md)]
    reset_icon_size: IconSize,
) -> Element {
    let resolver = use_url_resolver();
    let dnd = use_dnd();
    let drop = use_droppable(on_change);
    let mut phase = use_signal(|| LoadPhase::Loading);

    // Restart the load cycle whenever the slot points at a new image
    let image_id = image.as_ref().map(|img| img.id);
    use_effect(use_reactive!(|image_id| {
        tracing::debug!(?image_id, "slot image changed");
        if *phase.peek() != LoadPhase::Loading {
            phase.set(LoadPhase::Loading);
        }
    }));

    let frame = match &image {
        Some(image_ref) => {
            let src = resolver.resolve(&image_ref.url);
            let image_ref = image_ref.clone();
            rsx! {
                div { class: "selectable-image__frame",
                    if shows_fallback(phase()) {
                        ImageFallback {}
                    }
                    img {
                        class: "{image_class(phase())}",
                        src: "{src}",
                        draggable: false,
                        onload: move |_| phase.set(LoadPhase::Loaded),
                        onerror: move |evt| {
                            phase.set(LoadPhase::Failed);
                            if let Some(handler) = on_error {
                                handler.call(evt);
                            }
                        },
                    }
                    ImageMetadataOverlay { image: image_ref }
                    if let Some(handler) = on_reset {
                        div { class: "selectable-image__reset",
                            IconButton {
                                icon: "✕",
                                tooltip: "Reset Image",
                                size: reset_icon_size,
                                onclick: move |_| handler.call(()),
                            }
                        }
                    }
                }
            }
        }
        None => rsx! {
            div { class: "selectable-image__placeholder",
                span { class: "selectable-image__placeholder-glyph", "🖼" }
            }
        },
    };

    let dnd_enter = dnd.clone();
    let dnd_leave = dnd.clone();
    let dnd_drop = dnd.clone();

    rsx! {
        div {
            class: "selectable-image",
            ondragover: move |evt| evt.prevent_default(),
            ondragenter: move |_| dnd_enter.drag_enter(drop.id),
            ondragleave: move |_| dnd_leave.drag_leave(drop.id),
            ondrop: move |evt| {
                evt.prevent_default();
                dnd_drop.drop_on(drop.id);
            },
            {frame}
            if drop.active {
                DropOverlay { is_over: drop.is_over }
            }
        }
    }
}
