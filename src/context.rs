//! Shared context hooks for Dropdeck.
//!
//! The root `App` component provides the URL resolver, the image
//! library, and the drag-and-drop coordinator; children reach them
//! through these hooks. The coordinator's own hooks live in
//! [`crate::dnd`].
//!
//! ## Usage
//!
//! ```ignore
//! let resolver = use_url_resolver();
//! let library = use_image_library();
//! ```

use dioxus::prelude::*;

use crate::resolver::UrlResolver;
use crate::types::ImageReference;

/// Images known to the app, in display order.
pub type ImageLibrary = Vec<ImageReference>;

/// Hook to access the URL resolver from context.
pub fn use_url_resolver() -> UrlResolver {
    use_context::<UrlResolver>()
}

/// Hook to access the image library from context.
///
/// Returns the library signal; writes propagate to every subscriber.
pub fn use_image_library() -> Signal<ImageLibrary> {
    use_context::<Signal<ImageLibrary>>()
}
