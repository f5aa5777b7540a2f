//! Board page - image slots plus the gallery strip.
//!
//! A row of drop slots backed by plain signals, a gallery of draggable
//! thumbnails over the library, and an import button feeding the
//! library through the native file picker.

use dioxus::prelude::*;

use crate::components::{DraggableThumb, SelectableImage};
use crate::context::use_image_library;
use crate::library;
use crate::types::ImageReference;

const SLOT_COUNT: usize = 3;

/// Main board page.
#[component]
pub fn Board() -> Element {
    let mut library = use_image_library();
    let mut slots = use_signal(|| vec![None::<ImageReference>; SLOT_COUNT]);
    let mut importing = use_signal(|| false);
    let mut import_error = use_signal(|| Option::<String>::None);

    let handle_import = move |_| {
        importing.set(true);
        import_error.set(None);

        spawn(async move {
            // rfd blocks, keep it off the UI thread
            match tokio::task::spawn_blocking(library::pick_and_import).await {
                Ok(Ok(Some(image))) => {
                    tracing::info!("imported '{}' ({})", image.name, image.dimensions_label());
                    library.write().push(image);
                }
                Ok(Ok(None)) => {
                    // User cancelled
                }
                Ok(Err(e)) => {
                    import_error.set(Some(format!("Import failed: {e:#}")));
                }
                Err(e) => {
                    import_error.set(Some(format!("Import task failed: {e}")));
                }
            }
            importing.set(false);
        });
    };

    rsx! {
        main { class: "board",
            header { class: "board__header",
                h1 { class: "board__title", "Dropdeck" }
                button {
                    class: "import-button",
                    onclick: handle_import,
                    disabled: importing(),
                    if importing() { "Importing..." } else { "Import Image" }
                }
            }

            if let Some(err) = import_error() {
                div { class: "board__error", "⚠️ {err}" }
            }

            section { class: "board__slots",
                for (i, slot) in slots().into_iter().enumerate() {
                    div { class: "board__slot", key: "{i}",
                        div { class: "board__slot-label", "Slot {i + 1}" }
                        SelectableImage {
                            image: slot,
                            on_change: move |image| {
                                slots.write()[i] = Some(image);
                            },
                            on_reset: Some(EventHandler::new(move |_| {
                                slots.write()[i] = None;
                            })),
                            on_error: Some(EventHandler::new(move |_| {
                                tracing::warn!("slot {} failed to load its image", i + 1);
                            })),
                        }
                    }
                }
            }

            section { class: "board__gallery",
                if library().is_empty() {
                    p { class: "board__empty",
                        "No images yet. Import one, or point --images-dir at a folder."
                    }
                } else {
                    for image in library() {
                        DraggableThumb { key: "{image.id}", image }
                    }
                }
            }
        }
    }
}
