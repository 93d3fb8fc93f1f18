//! Access-log scanning: hostname from the filename, image request paths from the body.

pub mod parse;
pub mod url;

pub use parse::{file_name_of, hostname_from_filename, read_log_file, scan_request_paths};
pub use url::{UrlList, puzzle_url};
