//! Image URL resolution.
//!
//! Image references store either a path relative to the images directory
//! or an already-absolute URL (`file://...`, `data:...`). The resolver
//! turns both into something an `img` element can load. Pure and
//! synchronous; provided to components via context.

use std::path::Path;

/// Resolves image reference URLs against a base.
#[derive(Clone, Debug, PartialEq)]
pub struct UrlResolver {
    base: String,
}

impl UrlResolver {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        while base.ends_with('/') {
            base.pop();
        }
        Self { base }
    }

    /// Resolver rooted at a local directory.
    pub fn from_dir(dir: &Path) -> Self {
        Self::new(format!("file://{}", dir.display()))
    }

    /// Resolve a reference URL to an absolute one.
    ///
    /// Absolute inputs (scheme-qualified, including `data:` URIs) pass
    /// through untouched; relative paths are joined onto the base.
    pub fn resolve(&self, url: &str) -> String {
        if is_absolute(url) {
            return url.to_string();
        }
        format!("{}/{}", self.base, url.trim_start_matches('/'))
    }
}

fn is_absolute(url: &str) -> bool {
    url.starts_with("data:") || url.contains("://")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolves_relative_path_against_base() {
        let resolver = UrlResolver::new("file:///home/alice/Pictures");
        assert_eq!(
            resolver.resolve("cat.png"),
            "file:///home/alice/Pictures/cat.png"
        );
    }

    #[test]
    fn test_trailing_and_leading_slashes_collapse() {
        let resolver = UrlResolver::new("file:///srv/images/");
        assert_eq!(resolver.resolve("/dog.jpg"), "file:///srv/images/dog.jpg");
    }

    #[test]
    fn test_absolute_urls_pass_through() {
        let resolver = UrlResolver::new("file:///srv/images");
        assert_eq!(
            resolver.resolve("file:///elsewhere/cat.png"),
            "file:///elsewhere/cat.png"
        );
        assert_eq!(
            resolver.resolve("https://example.com/a.png"),
            "https://example.com/a.png"
        );
    }

    #[test]
    fn test_data_uris_pass_through() {
        let resolver = UrlResolver::new("file:///srv/images");
        let uri = "data:image/png;base64,AAAA";
        assert_eq!(resolver.resolve(uri), uri);
    }

    #[test]
    fn test_from_dir() {
        let resolver = UrlResolver::from_dir(&PathBuf::from("/tmp/pics"));
        assert_eq!(resolver.resolve("x.webp"), "file:///tmp/pics/x.webp");
    }
}
