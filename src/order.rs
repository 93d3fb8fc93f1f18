//! Final ordering of the deduplicated URL list.
//!
//! Puzzle images are named `.../<prefix>-<word>-<key>.jpg`; the pieces only line up
//! when sorted by the last `-` token. Raw logs (the `animal_code` family) are
//! already in order once sorted by the full URL.

use clap::ValueEnum;

/// Filename marker that selects raw ordering in [`OrderMode::Auto`].
pub const RAW_MARKER: &str = "animal_code";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OrderMode {
    /// Raw for filenames containing `animal_code`, puzzle otherwise.
    #[default]
    Auto,
    /// Plain lexicographic order of the full URL.
    Raw,
    /// Sort by the last `-` token, then drop the final entry.
    Puzzle,
}

impl OrderMode {
    /// Pick a concrete mode; never returns `Auto`.
    pub fn resolve(self, file_name: &str) -> OrderMode {
        match self {
            OrderMode::Auto if file_name.contains(RAW_MARKER) => OrderMode::Raw,
            OrderMode::Auto => OrderMode::Puzzle,
            mode => mode,
        }
    }
}

/// Order `urls` according to an already resolved `mode`.
pub fn arrange(mut urls: Vec<String>, mode: OrderMode) -> Vec<String> {
    urls.sort();
    if mode == OrderMode::Raw {
        return urls;
    }

    sort_by_last_segment(&mut urls);
    // The highest-keyed entry is not part of the picture.
    urls.pop();
    urls
}

/// Text after the last `-`, or the whole string when there is none.
pub fn last_segment(url: &str) -> &str {
    url.rsplit_once('-').map_or(url, |(_, tail)| tail)
}

/// Stable sort on [`last_segment`], so equal keys keep their previous relative order.
pub fn sort_by_last_segment(urls: &mut [String]) {
    urls.sort_by(|a, b| last_segment(a).cmp(last_segment(b)));
}
