//! Shared configuration constants for booklet exports
//!
//! Default values and fixed parts of the remote wire contract live here so
//! the client, the config layer and the tests agree on them.

use std::time::Duration;

/// Default remote API origin
pub const DEFAULT_API_BASE_URL: &str = "https://api.juejin.cn";

/// Book metadata and section list
pub const BOOK_INFO_PATH: &str = "/booklet_api/v1/booklet/get";

/// Single section document body
pub const SECTION_PATH: &str = "/booklet_api/v1/section/get";

/// Shelf listing used for remote book discovery
pub const BOOK_LIST_PATH: &str = "/booklet_api/v1/booklet/bookletshelflist";

/// Fixed query string the shelf listing expects
pub const BOOK_LIST_QUERY: &[(&str, &str)] = &[
    ("aid", "2608"),
    ("uuid", "7390948006004852278"),
    ("spider", "0"),
];

/// Web origin sent with discovery calls
pub const WEB_ORIGIN: &str = "https://juejin.cn";

/// Minimum pause after every metadata request: 1 second
///
/// The remote service throttles clients that look automated. The pause is
/// paid per call, so the effective request rate grows with the number of
/// concurrent book workers.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_secs(1);

/// Timeout for a single API request
pub const API_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Timeout for a single image download
pub const IMAGE_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(60);

/// Upper bound for one downloaded image: 20 MiB
pub const MAX_IMAGE_SIZE_BYTES: usize = 20 * 1024 * 1024;

/// Directory created next to the executable when `save_dir` is not set
pub const DEFAULT_SAVE_DIR_NAME: &str = "book";

/// Journal directory, relative to the working directory
pub const DEFAULT_LOG_DIR: &str = ".log";

/// Name of every generated index file
pub const INDEX_FILE_NAME: &str = "README.md";

/// Subdirectory of a book holding per-section assets
pub const ASSET_DIR_NAME: &str = "img";

/// Chrome user agent string sent with every request
///
/// Updated: 2025-01-29 to Chrome 132 (current stable)
pub const CHROME_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/132.0.6834.160 Safari/537.36";
