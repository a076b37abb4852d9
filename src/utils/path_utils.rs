//! Path component helpers for the export tree.
//!
//! Titles coming from the remote service end up as directory and file
//! names, and inside HTML anchors of the generated indexes. They must not
//! be able to climb out of their parent directory or break link markup.

use std::path::Path;

use anyhow::{Context, Result};

/// Characters removed from any title used as a path component
const FORBIDDEN_CHARS: [char; 3] = ['/', '\\', '|'];

/// Strip path separators and pipes from a title.
///
/// Nothing else is touched: the result is used verbatim both on disk and in
/// index links, so two runs must always produce the same name.
///
/// # Examples
/// ```
/// # use booklet_export::utils::sanitize_component;
/// assert_eq!(sanitize_component("Rust/Go | C\\C++"), "RustGo  CC++");
/// ```
#[must_use]
pub fn sanitize_component(title: &str) -> String {
    title.chars().filter(|c| !FORBIDDEN_CHARS.contains(c)).collect()
}

/// File name of a section document: `{index}-{title}.md`, index is 1-based
#[must_use]
pub fn section_file_name(index: usize, title: &str) -> String {
    format!("{index}-{}.md", sanitize_component(title))
}

/// Directory next to the running executable, used for the default `save_dir`
pub fn executable_dir() -> Result<std::path::PathBuf> {
    let exe = std::env::current_exe().context("Failed to resolve executable path")?;
    exe.parent()
        .map(Path::to_path_buf)
        .ok_or_else(|| anyhow::anyhow!("Executable path has no parent directory"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators_and_pipes() {
        for title in ["a/b", "a\\b", "a|b", "/|\\", "../../etc/passwd"] {
            let clean = sanitize_component(title);
            assert!(!clean.contains('/'), "{clean}");
            assert!(!clean.contains('\\'), "{clean}");
            assert!(!clean.contains('|'), "{clean}");
        }
        assert_eq!(sanitize_component("../../etc/passwd"), "....etcpasswd");
    }

    #[test]
    fn test_keeps_other_characters() {
        assert_eq!(sanitize_component("深入浅出 Rust: 第1章"), "深入浅出 Rust: 第1章");
    }

    #[test]
    fn test_section_file_name() {
        assert_eq!(section_file_name(1, "Intro / Setup"), "1-Intro  Setup.md");
        assert_eq!(section_file_name(12, "End"), "12-End.md");
    }
}
