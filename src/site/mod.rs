//! The public site: which paths may be served, where their files live,
//! and which one is rendered as a template.

pub mod catalog;
pub mod resolver;
pub mod template;

use std::io;
use std::path::{Path, PathBuf};

use crate::config::SiteConfig;

pub use catalog::PathCatalog;
pub use resolver::ResolvedResource;

/// The catalog entry rendered through [`template`].
pub const TEMPLATED_PATH: &str = "/classic.html";

/// Read-only site description shared by every connection.
#[derive(Debug, Clone)]
pub struct Site {
    catalog: PathCatalog,
    public_root: PathBuf,
    templated_path: String,
}

impl Site {
    /// The standard catalog served from `public_root`.
    pub fn new(public_root: impl Into<PathBuf>) -> Self {
        Self::with_catalog(PathCatalog::standard(), public_root, TEMPLATED_PATH)
    }

    pub fn with_catalog(
        catalog: PathCatalog,
        public_root: impl Into<PathBuf>,
        templated_path: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            public_root: public_root.into(),
            templated_path: templated_path.into(),
        }
    }

    pub fn from_config(cfg: &SiteConfig) -> Self {
        Self::new(cfg.public_root.clone())
    }

    pub fn catalog(&self) -> &PathCatalog {
        &self.catalog
    }

    pub fn public_root(&self) -> &Path {
        &self.public_root
    }

    pub fn is_allowed(&self, path: &str) -> bool {
        self.catalog.is_allowed(path)
    }

    pub fn is_templated(&self, path: &str) -> bool {
        self.templated_path == path
    }

    pub async fn resolve(&self, path: &str) -> io::Result<ResolvedResource> {
        resolver::resolve(&self.public_root, path).await
    }
}
