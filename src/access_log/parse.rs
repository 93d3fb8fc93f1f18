use anyhow::Context;
use regex::Regex;
use std::borrow::Cow;
use std::fs;
use std::path::Path;

/// Read a whole access log into memory.
///
/// Access logs occasionally carry stray non-UTF-8 bytes (user agents, referers);
/// those are replaced instead of failing the whole file.
pub fn read_log_file(path: &Path) -> anyhow::Result<String> {
    let bytes = fs::read(path).with_context(|| format!("read log file {}", path.display()))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Final path component as text, empty if the path has none (e.g. `..`).
pub fn file_name_of(path: &Path) -> Cow<'_, str> {
    path.file_name()
        .map(|name| name.to_string_lossy())
        .unwrap_or_default()
}

/// Derive the puzzle server hostname from the log filename.
///
/// The hostname is everything after the first `_` up to the first whitespace:
/// `animal_code.google.com` => `code.google.com`.
pub fn hostname_from_filename(path: &Path) -> anyhow::Result<Option<String>> {
    let re = Regex::new(r"_(\S+)")?;
    let name = file_name_of(path);

    Ok(re
        .captures(&name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string()))
}

/// Collect the request path of every `GET <path>.jpg HTTP` occurrence, in file order.
///
/// Example line:
/// 10.254.254.28 - - [06/Aug/2007:00:13:48 -0700] "GET /~foo/puzzle-bar-aaab.jpg HTTP/1.0" 302 528
pub fn scan_request_paths(text: &str) -> anyhow::Result<Vec<&str>> {
    let re = Regex::new(r"GET (\S+\.jpg) HTTP")?;

    Ok(re
        .captures_iter(text)
        .filter_map(|caps| caps.get(1))
        .map(|m| m.as_str())
        .collect())
}
