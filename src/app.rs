use dioxus::prelude::*;

use crate::context::ImageLibrary;
use crate::dnd::{DndContext, DragState};
use crate::library;
use crate::pages::Board;
use crate::resolver::UrlResolver;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Provides global styles, the URL resolver, the image library, and
/// the drag-and-drop coordinator, then renders the board.
#[component]
pub fn App() -> Element {
    let drag_state = use_signal(DragState::default);
    use_context_provider(|| DndContext::new(drag_state));
    use_context_provider(|| UrlResolver::from_dir(&crate::get_images_dir()));

    let mut library: Signal<ImageLibrary> = use_signal(Vec::new);
    use_context_provider(|| library);

    // Scan the images directory on mount
    use_effect(move || {
        spawn(async move {
            let dir = crate::get_images_dir();
            match tokio::task::spawn_blocking(move || library::scan_directory(&dir)).await {
                Ok(Ok(images)) => {
                    tracing::info!("loaded {} images from images dir", images.len());
                    library.set(images);
                }
                Ok(Err(e)) => {
                    tracing::warn!("image scan failed: {e:#}");
                }
                Err(e) => {
                    tracing::error!("image scan task failed: {e}");
                }
            }
        });
    });

    rsx! {
        style { {GLOBAL_STYLES} }
        Board {}
    }
}
