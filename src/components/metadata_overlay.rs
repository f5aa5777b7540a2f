//! Image Metadata Overlay Component
//!
//! Dimensions badge pinned to the corner of a rendered image.

use dioxus::prelude::*;

use crate::types::ImageReference;

/// Pixel-dimensions badge over an image
///
/// # Examples
///
/// ```rust
/// rsx! {
///     ImageMetadataOverlay { image: image.clone() }
/// }
/// ```
#[component]
pub fn ImageMetadataOverlay(image: ImageReference) -> Element {
    rsx! {
        div { class: "image-metadata-overlay",
            span { "{image.dimensions_label()}" }
        }
    }
}
