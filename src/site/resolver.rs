use std::io;
use std::path::{Path, PathBuf};

use tokio::fs::File;

/// A catalog path mapped onto the public root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedResource {
    pub location: PathBuf,
    /// Probed from the file extension; `None` when unrecognized.
    pub content_type: Option<String>,
    /// Size in bytes at resolution time.
    pub len: u64,
}

impl ResolvedResource {
    pub async fn open(&self) -> io::Result<File> {
        File::open(&self.location).await
    }
}

/// Joins `path` onto `public_root` without touching the filesystem.
///
/// The leading `/` of a request path is dropped so the result stays under
/// the root. `path` must already have passed the catalog check.
pub fn location_for(public_root: &Path, path: &str) -> PathBuf {
    public_root.join(path.trim_start_matches('/'))
}

/// Probes the content type from the file name.
pub fn probe_content_type(location: &Path) -> Option<String> {
    mime_guess::from_path(location)
        .first()
        .map(|mime| mime.essence_str().to_string())
}

/// Resolves a catalog path to a regular file under `public_root`.
pub async fn resolve(public_root: &Path, path: &str) -> io::Result<ResolvedResource> {
    let location = location_for(public_root, path);
    let metadata = tokio::fs::metadata(&location).await?;

    if !metadata.is_file() {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} is not a regular file", location.display()),
        ));
    }

    Ok(ResolvedResource {
        content_type: probe_content_type(&location),
        len: metadata.len(),
        location,
    })
}
