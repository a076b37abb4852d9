//! In-place URL replacement, independent of any download
//!
//! Replacements address the exact byte range a URL was matched at, so a URL
//! that happens to be a prefix of another one never rewrites its neighbour.

use std::ops::Range;

/// A matched URL range and the local path that replaces it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    /// Byte range of the URL in the scanned document
    pub span: Range<usize>,
    /// Relative path such as `img/42/1.png`
    pub local: String,
}

/// Apply replacements by span, working from the end of the document.
///
/// Only the URL range changes; the surrounding `![alt](...)` syntax is left
/// as it was. Spans that overlap an already applied one, fall outside the
/// document or split a character are ignored.
#[must_use]
pub fn apply_replacements(document: &str, replacements: &[Replacement]) -> String {
    let mut ordered: Vec<&Replacement> = replacements.iter().collect();
    ordered.sort_by(|a, b| b.span.start.cmp(&a.span.start));

    let mut text = document.to_string();
    let mut floor = document.len();
    for r in ordered {
        if r.span.start > r.span.end || r.span.end > floor || document.get(r.span.clone()).is_none() {
            continue;
        }
        text.replace_range(r.span.clone(), &r.local);
        floor = r.span.start;
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rep(document: &str, url: &str, nth: usize, local: &str) -> Replacement {
        let start = document
            .match_indices(url)
            .nth(nth)
            .map(|(i, _)| i)
            .unwrap();
        Replacement {
            span: start..start + url.len(),
            local: local.into(),
        }
    }

    #[test]
    fn test_replaces_only_url() {
        let doc = "![cat](https://x/cat.png) and ![dog](https://x/dog.png)";
        let out = apply_replacements(doc, &[rep(doc, "https://x/cat.png", 0, "img/7/1.png")]);
        assert_eq!(out, "![cat](img/7/1.png) and ![dog](https://x/dog.png)");
    }

    #[test]
    fn test_repeated_url_gets_each_local_path() {
        let doc = "![a](https://x/a.png) ![b](https://x/a.png)";
        let out = apply_replacements(
            doc,
            &[
                rep(doc, "https://x/a.png", 0, "img/1/1.png"),
                rep(doc, "https://x/a.png", 1, "img/1/2.png"),
            ],
        );
        assert_eq!(out, "![a](img/1/1.png) ![b](img/1/2.png)");
    }

    #[test]
    fn test_prefix_url_does_not_touch_longer_url() {
        let doc = "![x](https://x/a.png) ![y](https://x/a.png2)";
        let second = doc.rfind("https://x/a.png2").unwrap();
        let out = apply_replacements(
            doc,
            &[
                rep(doc, "https://x/a.png", 0, "img/1/1.png"),
                Replacement {
                    span: second..second + "https://x/a.png2".len(),
                    local: "img/1/2.png2".into(),
                },
            ],
        );
        assert_eq!(out, "![x](img/1/1.png) ![y](img/1/2.png2)");
    }

    #[test]
    fn test_out_of_range_span_ignored() {
        assert_eq!(apply_replacements("text", &[]), "text");
        let bad = Replacement {
            span: 2..40,
            local: "x".into(),
        };
        assert_eq!(apply_replacements("text", &[bad]), "text");
    }
}
