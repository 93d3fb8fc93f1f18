//! Sequential image download into a destination directory plus the viewer page.

use crate::fetch::Fetcher;
use crate::render;
use crate::Result;
use anyhow::{Context, bail};
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};

pub const INDEX_FILE: &str = "index.html";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DestDir {
    Created,
    /// Already there; a warning was logged.
    Reused,
}

/// Create `dir` (with parents) if missing. An existing directory is reused.
pub fn ensure_dest_dir(dir: &Path) -> Result<DestDir> {
    if dir.exists() {
        if !dir.is_dir() {
            bail!("destination {} exists and is not a directory", dir.display());
        }
        warn!(
            "destination {} already exists, files in it may be overwritten",
            dir.display()
        );
        return Ok(DestDir::Reused);
    }
    fs::create_dir_all(dir).with_context(|| format!("create destination {}", dir.display()))?;
    Ok(DestDir::Created)
}

/// Download every URL in order to `dest/img<N>`, then write `dest/index.html`.
///
/// Fail-fast: the first fetch error stops the run. Images already written stay
/// on disk and no index page is produced. Returns the index page path.
pub async fn download_images(
    urls: &[String],
    dest: &Path,
    fetcher: &dyn Fetcher,
) -> Result<PathBuf> {
    ensure_dest_dir(dest)?;

    for (num, url) in urls.iter().enumerate() {
        info!("Retrieving ... {}", url);
        let bytes = fetcher
            .fetch(url)
            .await
            .with_context(|| format!("fetch {}", url))?;

        let target = dest.join(render::image_name(num));
        fs::write(&target, &bytes).with_context(|| format!("write {}", target.display()))?;
    }

    let index = dest.join(INDEX_FILE);
    fs::write(&index, render::render_index_page(urls.len()))
        .with_context(|| format!("write {}", index.display()))?;
    info!("Wrote {} ({} images)", index.display(), urls.len());

    Ok(index)
}
