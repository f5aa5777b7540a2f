//! Drop Overlay Component
//!
//! Transient overlay shown over a drop target while a drag gesture is
//! active. Presence in the tree is driven entirely by the caller; the
//! only input is whether the payload currently hovers this target.

use dioxus::prelude::*;

/// Backdrop dim level. Hover must read stronger than not-hover.
pub(crate) fn backdrop_opacity(is_over: bool) -> f32 {
    if is_over {
        0.9
    } else {
        0.7
    }
}

pub(crate) fn label_opacity(is_over: bool) -> f32 {
    if is_over {
        1.0
    } else {
        0.9
    }
}

pub(crate) fn border_opacity(is_over: bool) -> f32 {
    if is_over {
        1.0
    } else {
        0.7
    }
}

/// Dimmed backdrop, centered "Drop Image" label, and dashed border
/// highlight, each more opaque while the payload hovers the target.
/// Fades in via the `drop-overlay` CSS animation when it enters the
/// tree.
#[component]
pub fn DropOverlay(is_over: bool) -> Element {
    rsx! {
        div { class: "drop-overlay",
            div {
                class: "drop-overlay__backdrop",
                style: "opacity: {backdrop_opacity(is_over)};",
            }
            div {
                class: "drop-overlay__label",
                style: "opacity: {label_opacity(is_over)};",
                span { "Drop Image" }
            }
            div {
                class: "drop-overlay__border",
                style: "opacity: {border_opacity(is_over)};",
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backdrop_opacity_increases_on_hover() {
        assert!(backdrop_opacity(true) > backdrop_opacity(false));
    }

    #[test]
    fn test_label_opacity_increases_on_hover() {
        assert!(label_opacity(true) > label_opacity(false));
    }

    #[test]
    fn test_border_opacity_increases_on_hover() {
        assert!(border_opacity(true) > border_opacity(false));
    }

    #[test]
    fn test_opacities_stay_in_unit_range() {
        for is_over in [false, true] {
            for opacity in [
                backdrop_opacity(is_over),
                label_opacity(is_over),
                border_opacity(is_over),
            ] {
                assert!((0.0..=1.0).contains(&opacity));
            }
        }
    }
}
