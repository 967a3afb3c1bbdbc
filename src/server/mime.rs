//! Extension to Content-Type mapping.

use std::path::Path;

/// Content type for anything without a recognised extension.
///
/// This is the bare word `text`, not a full MIME type.
pub const FALLBACK_CONTENT_TYPE: &str = "text";

/// Get the Content-Type for a file extension (without the leading dot).
///
/// Matching is exact and case-sensitive.
pub fn content_type_for(extension: Option<&str>) -> &'static str {
    match extension {
        Some("html") => "text/html",
        Some("css") => "text/css",
        Some("json") => "application/json",
        _ => FALLBACK_CONTENT_TYPE,
    }
}

/// Get the Content-Type for the last component of a path.
pub fn content_type_for_path(path: &Path) -> &'static str {
    content_type_for(path.extension().and_then(|ext| ext.to_str()))
}
