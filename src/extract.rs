//! URL extraction: log file in, ordered unique puzzle URLs out.

use crate::access_log::{self, UrlList};
use crate::order::{self, OrderMode};
use crate::Result;
use log::debug;
use std::path::Path;

/// Return the puzzle URLs found in the log at `path`, deduplicated and ordered by `mode`.
///
/// A filename without a hostname segment, or a log without image requests,
/// yields an empty list.
pub fn read_urls(path: &Path, mode: OrderMode) -> Result<Vec<String>> {
    let text = access_log::read_log_file(path)?;

    let Some(hostname) = access_log::hostname_from_filename(path)? else {
        debug!("no hostname segment in {}, nothing to extract", path.display());
        return Ok(Vec::new());
    };

    let urls: UrlList = access_log::scan_request_paths(&text)?
        .into_iter()
        .map(|req| access_log::puzzle_url(&hostname, req))
        .collect();

    if urls.is_empty() {
        debug!("no image requests in {}", path.display());
    }

    let mode = mode.resolve(&access_log::file_name_of(path));
    debug!(
        "{}: host {}, {} unique urls, {:?} ordering",
        path.display(),
        hostname,
        urls.len(),
        mode
    );
    Ok(order::arrange(urls.into_vec(), mode))
}
