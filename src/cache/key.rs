//! Cache key derivation
//!
//! The cache layout mirrors the URL's hierarchy on disk:
//! `<hostname>/<encoded path segments...>/<encoded "?query">.json`,
//! with `index.json` standing in when there is no query string.

use std::path::PathBuf;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Characters escaped in every path component. Matches JavaScript's
/// `encodeURIComponent`, which the layout predates.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Relative path of the cache entry for a URL
pub fn cache_rel_path(url: &Url) -> PathBuf {
    let mut path = PathBuf::from(url.host_str().unwrap_or("unknown-host"));

    for segment in url.path().split('/').filter(|s| !s.is_empty()) {
        path.push(utf8_percent_encode(segment, COMPONENT).to_string());
    }

    let file_name = match url.query() {
        Some(query) if !query.is_empty() => {
            let search = format!("?{query}");
            format!("{}.json", utf8_percent_encode(&search, COMPONENT))
        }
        _ => "index.json".to_string(),
    };
    path.push(file_name);

    path
}
