//! Core data types shared across the app.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

/// A reference to an image known to the application.
///
/// The referenced resource lives wherever the library put it (a file on
/// disk or an in-memory data URI); this struct only carries the pointer
/// plus display metadata. Components receive it read-only and hand
/// clones back through their callbacks.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ImageReference {
    /// Unique image identifier
    pub id: Ulid,
    /// Location of the image resource. Either relative to the images
    /// directory or an absolute URL (including `data:` URIs).
    pub url: String,
    /// Display name (usually the file name)
    pub name: String,
    /// Pixel width
    pub width: u32,
    /// Pixel height
    pub height: u32,
    /// When this reference entered the library
    pub created_at: DateTime<Utc>,
}

impl ImageReference {
    pub fn new(name: impl Into<String>, url: impl Into<String>, width: u32, height: u32) -> Self {
        Self {
            id: Ulid::new(),
            url: url.into(),
            name: name.into(),
            width,
            height,
            created_at: Utc::now(),
        }
    }

    /// `{width}×{height}` label shown by the metadata overlay.
    pub fn dimensions_label(&self) -> String {
        format!("{}×{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dimensions_label() {
        let image = ImageReference::new("cat.png", "cat.png", 512, 768);
        assert_eq!(image.dimensions_label(), "512×768");
    }

    #[test]
    fn test_ids_are_distinct() {
        let a = ImageReference::new("a.png", "a.png", 1, 1);
        let b = ImageReference::new("b.png", "b.png", 1, 1);
        assert_ne!(a.id, b.id);
    }
}
