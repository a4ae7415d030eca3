use std::collections::HashSet;

/// Paths served by the standard site.
pub const STANDARD_PATHS: [&str; 11] = [
    "/index.html",
    "/spring.svg",
    "/spring.png",
    "/resources.html",
    "/styles.css",
    "/app.js",
    "/links.html",
    "/forms.html",
    "/classic.html",
    "/events.html",
    "/events.js",
];

/// Fixed whitelist of request paths.
///
/// Matching is exact: no normalization, no percent-decoding, and `/a` and
/// `/a/` are different paths. The catalog is never modified after
/// construction, so it can be shared freely between connections.
#[derive(Debug, Clone)]
pub struct PathCatalog {
    paths: HashSet<String>,
}

impl PathCatalog {
    pub fn new<I, S>(paths: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            paths: paths.into_iter().map(Into::into).collect(),
        }
    }

    pub fn standard() -> Self {
        Self::new(STANDARD_PATHS)
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.paths.contains(path)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.paths.iter().map(|p| p.as_str())
    }
}
