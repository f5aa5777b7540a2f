//! UI components for Dropdeck.

mod draggable_thumb;
mod drop_overlay;
mod icon_button;
mod image_fallback;
mod metadata_overlay;
mod selectable_image;

pub use draggable_thumb::DraggableThumb;
pub use drop_overlay::DropOverlay;
pub use icon_button::{IconButton, IconSize};
pub use image_fallback::ImageFallback;
pub use metadata_overlay::ImageMetadataOverlay;
pub use selectable_image::SelectableImage;
