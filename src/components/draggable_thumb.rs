//! Draggable Thumbnail Component
//!
//! Gallery thumbnail acting as a drag source for an image reference.
//! The payload travels through the drag-and-drop coordinator, not the
//! platform data-transfer object.

use dioxus::prelude::*;

use crate::context::use_url_resolver;
use crate::dnd::use_dnd;
use crate::types::ImageReference;

/// Drag-source thumbnail for a library image
#[component]
pub fn DraggableThumb(image: ImageReference) -> Element {
    let resolver = use_url_resolver();
    let dnd = use_dnd();

    let src = resolver.resolve(&image.url);
    let payload = image.clone();
    let dnd_start = dnd.clone();
    let dnd_end = dnd;

    rsx! {
        img {
            class: "draggable-thumb",
            src: "{src}",
            title: "{image.name} ({image.dimensions_label()})",
            draggable: true,
            ondragstart: move |_| dnd_start.begin_drag(payload.clone()),
            ondragend: move |_| dnd_end.end_drag(),
        }
    }
}
