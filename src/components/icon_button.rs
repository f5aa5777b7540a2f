//! Icon Button Component
//!
//! Small glyph button with tooltip, used for inline controls.

use dioxus::prelude::*;

/// Icon button sizes
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum IconSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl IconSize {
    pub(crate) fn class(self) -> &'static str {
        match self {
            IconSize::Sm => "icon-button--sm",
            IconSize::Md => "icon-button--md",
            IconSize::Lg => "icon-button--lg",
        }
    }
}

/// Glyph button with tooltip
///
/// # Examples
///
/// ```rust
/// rsx! {
///     IconButton {
///         icon: "✕",
///         tooltip: "Reset Image",
///         size: IconSize::Md,
///         onclick: move |_| on_reset.call(()),
///     }
/// }
/// ```
#[component]
pub fn IconButton(
    /// Glyph shown inside the button
    icon: String,
    /// Tooltip and accessible label
    #[props(default = String::new())]
    tooltip: String,
    /// Button size
    #[props(default = IconSize::Md)]
    size: IconSize,
    /// Click handler
    onclick: EventHandler<MouseEvent>,
) -> Element {
    rsx! {
        button {
            class: "icon-button {size.class()}",
            title: "{tooltip}",
            aria_label: "{tooltip}",
            onclick: move |evt| onclick.call(evt),
            "{icon}"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_class_mapping() {
        assert_eq!(IconSize::Sm.class(), "icon-button--sm");
        assert_eq!(IconSize::Md.class(), "icon-button--md");
        assert_eq!(IconSize::Lg.class(), "icon-button--lg");
    }

    #[test]
    fn test_default_size_is_md() {
        assert_eq!(IconSize::default(), IconSize::Md);
    }
}
