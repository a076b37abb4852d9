//! Embedded image link detection
//!
//! Only one construct is recognised: `![alt](url)`. The alt text and the
//! URL may span lines; the URL is the shortest run up to the first `)`.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static IMAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)!\[.*?\]\((.*?)\)").expect("IMAGE_LINK: hardcoded regex is valid")
});

/// One embedded image reference, in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    /// Byte span of the whole `![alt](url)` construct
    pub span: Range<usize>,
    /// Byte span of the URL inside it
    pub url_span: Range<usize>,
    /// URL exactly as written, embedded newlines included
    pub url: String,
}

impl ImageRef {
    /// URL with embedded line breaks removed, ready to fetch
    #[must_use]
    pub fn fetch_url(&self) -> String {
        self.url.replace(['\r', '\n'], "")
    }
}

/// Every image reference in `document`, in encounter order.
///
/// Repeated URLs are reported once per occurrence.
#[must_use]
pub fn find_image_refs(document: &str) -> Vec<ImageRef> {
    IMAGE_LINK
        .captures_iter(document)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            let url = caps.get(1)?;
            Some(ImageRef {
                span: whole.range(),
                url_span: url.range(),
                url: url.as_str().to_string(),
            })
        })
        .collect()
}
