//! Image Fallback Component
//!
//! Loading placeholder shown while an image resource is fetching.

use dioxus::prelude::*;

/// Centered spinner over a neutral background, sized so the slot never
/// collapses while the image loads.
#[component]
pub fn ImageFallback() -> Element {
    rsx! {
        div { class: "image-fallback",
            div { class: "loading-spinner" }
        }
    }
}
