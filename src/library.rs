//! Image library: startup directory scan and file import.
//!
//! Scanned images stay on disk and are referenced by file name,
//! resolved later against the images directory. Imported images are
//! re-encoded to PNG and carried inline as base64 data URIs.

use std::fs;
use std::io::Cursor;
use std::path::Path;

use anyhow::Context;
use base64::Engine;
use image::{GenericImageView, ImageFormat};
use rfd::FileDialog;

use crate::types::ImageReference;

const SUPPORTED_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];

fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            SUPPORTED_EXTENSIONS
                .iter()
                .any(|s| s.eq_ignore_ascii_case(ext))
        })
}

/// Scan a directory for supported images.
///
/// Only probes headers for dimensions, never decodes pixel data. Files
/// that fail the probe are skipped with a debug log. A missing
/// directory yields an empty library so the app still comes up when
/// `--images-dir` points nowhere yet.
pub fn scan_directory(dir: &Path) -> anyhow::Result<Vec<ImageReference>> {
    let mut images = Vec::new();
    if !dir.is_dir() {
        tracing::debug!("images dir {:?} does not exist, starting empty", dir);
        return Ok(images);
    }

    let entries =
        fs::read_dir(dir).with_context(|| format!("reading images dir {}", dir.display()))?;
    for entry in entries {
        let path = entry.context("reading images dir entry")?.path();
        if !is_supported(&path) {
            continue;
        }
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        match image::image_dimensions(&path) {
            Ok((width, height)) => {
                images.push(ImageReference::new(name, name, width, height));
            }
            Err(e) => {
                tracing::debug!("skipping {:?}: {}", path, e);
            }
        }
    }

    images.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(images)
}

/// Import a single image file as an in-memory reference.
///
/// Decodes, re-encodes to PNG (lossless) and wraps the bytes in a
/// `data:` URI so the reference stays valid wherever the source file
/// goes afterwards.
pub fn import_file(path: &Path) -> anyhow::Result<ImageReference> {
    let img = image::open(path).with_context(|| format!("loading image {}", path.display()))?;
    let (width, height) = img.dimensions();

    let mut buffer = Vec::new();
    img.write_to(&mut Cursor::new(&mut buffer), ImageFormat::Png)
        .context("encoding image as PNG")?;

    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("imported image")
        .to_string();

    Ok(ImageReference::new(
        name,
        png_data_uri(&buffer),
        width,
        height,
    ))
}

/// Open the native file picker and import the chosen image.
///
/// Blocking; run it off the UI thread. `Ok(None)` means the user
/// cancelled.
pub fn pick_and_import() -> anyhow::Result<Option<ImageReference>> {
    let Some(path) = FileDialog::new()
        .add_filter("images", SUPPORTED_EXTENSIONS)
        .set_title("Select Image")
        .pick_file()
    else {
        return Ok(None);
    };
    import_file(&path).map(Some)
}

fn png_data_uri(bytes: &[u8]) -> String {
    format!(
        "data:image/png;base64,{}",
        base64::engine::general_purpose::STANDARD.encode(bytes)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
        img.save_with_format(&path, ImageFormat::Png).unwrap();
        path
    }

    #[test]
    fn test_is_supported_extensions() {
        assert!(is_supported(Path::new("a.png")));
        assert!(is_supported(Path::new("b.JPG")));
        assert!(is_supported(Path::new("c.jpeg")));
        assert!(is_supported(Path::new("d.webp")));
        assert!(!is_supported(Path::new("e.gif")));
        assert!(!is_supported(Path::new("noext")));
    }

    #[test]
    fn test_scan_missing_directory_is_empty() {
        let images = scan_directory(Path::new("/definitely/not/a/dir")).unwrap();
        assert!(images.is_empty());
    }

    #[test]
    fn test_scan_finds_images_with_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        write_png(dir.path(), "b.png", 8, 6);
        write_png(dir.path(), "a.png", 3, 5);
        fs::write(dir.path().join("notes.txt"), "not an image").unwrap();
        // Supported extension but not actually an image
        fs::write(dir.path().join("broken.png"), "garbage").unwrap();

        let images = scan_directory(dir.path()).unwrap();
        assert_eq!(images.len(), 2);
        // Sorted by name
        assert_eq!(images[0].name, "a.png");
        assert_eq!((images[0].width, images[0].height), (3, 5));
        assert_eq!(images[1].name, "b.png");
        assert_eq!((images[1].width, images[1].height), (8, 6));
        // Scanned references are relative to the images dir
        assert_eq!(images[0].url, "a.png");
    }

    #[test]
    fn test_import_file_yields_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "cat.png", 4, 2);

        let image = import_file(&path).unwrap();
        assert_eq!(image.name, "cat.png");
        assert_eq!((image.width, image.height), (4, 2));
        assert!(image.url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_import_non_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bogus.png");
        fs::write(&path, "garbage").unwrap();
        assert!(import_file(&path).is_err());
    }
}
