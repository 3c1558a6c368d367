// Request helpers
//
// Requests may carry loader prefixes (`style!css!./foo.css`); the module
// itself is always what follows the last `!`.

use once_cell::sync::Lazy;
use regex::Regex;

static PACKAGE_FOLDER: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\bnode_modules\b").unwrap());
static PACKAGE_FOLDER_SEGMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\bnode_modules[\\/]").unwrap());
static PACKAGE_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^((?:@[^\\/]+[\\/])?[^\\/]+)").unwrap());
static ASYNC_MARKER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^async[?!]").unwrap());

/// Strip loader prefixes from a request.
pub fn remove_loaders(request: &str) -> &str {
    match request.rfind('!') {
        Some(i) => &request[i + 1..],
        None => request,
    }
}

/// Whether a resource lives under a dependency packages folder.
pub fn is_in_package_folder(resource: &str) -> bool {
    PACKAGE_FOLDER.is_match(resource)
}

/// Name of the package owning `resource`: the segment after the innermost
/// `node_modules/`, or two segments for `@scope/name`.
pub fn extract_package_name(resource: &str) -> Option<String> {
    // Only the last folder occurrence counts; nested installs put the owning
    // package below the outer one.
    let rest = PACKAGE_FOLDER_SEGMENT
        .find_iter(resource)
        .map(|m| &resource[m.end()..])
        .find(|rest| !PACKAGE_FOLDER.is_match(rest))?;

    PACKAGE_NAME
        .captures(rest)
        .map(|caps| caps[1].replace('\\', "/"))
}

/// Whether a raw request is a code-split proxy (`async!` / `async?`).
pub fn has_async_marker(raw_request: &str) -> bool {
    ASYNC_MARKER.is_match(raw_request)
}
