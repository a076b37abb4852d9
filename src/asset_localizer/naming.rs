//! Local file names for downloaded images
//!
//! Files are numbered by encounter order, never by URL, and keep the
//! extension of the URL's last path segment. A literal `?` left over from a
//! query string is dropped from the name; the query is not parsed.

/// Extension of the last path segment of `url`, dot included, or `""`.
///
/// Leading dots of the segment do not start an extension, so `/.hidden`
/// has none.
#[must_use]
pub fn url_extension(url: &str) -> &str {
    let segment = url.rsplit('/').next().unwrap_or(url);
    let stem = segment.trim_start_matches('.');
    match stem.rfind('.') {
        Some(dot) => &stem[dot..],
        None => "",
    }
}

/// File name for the `index`-th (1-based) image of a document
#[must_use]
pub fn asset_file_name(index: usize, url: &str) -> String {
    format!("{index}{}", url_extension(url)).replace('?', "")
}
