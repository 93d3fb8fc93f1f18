/// Build the absolute URL for a request path seen on the puzzle host.
pub fn puzzle_url(hostname: &str, path: &str) -> String {
    format!("http://{}{}", hostname, path)
}

/// Puzzle URLs in first-seen order, unique by string value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UrlList(Vec<String>);

impl UrlList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Append `url` unless it is already present. Returns whether it was added.
    pub fn push(&mut self, url: String) -> bool {
        if self.0.contains(&url) {
            return false;
        }
        self.0.push(url);
        true
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_vec(self) -> Vec<String> {
        self.0
    }
}

impl FromIterator<String> for UrlList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        let mut list = UrlList::new();
        for url in iter {
            list.push(url);
        }
        list
    }
}
