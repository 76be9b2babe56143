//! Drive utility functions
//!
//! Query construction, path joining, and formatting helpers.

use crate::config::drive::FOLDER_MIME_TYPE;
use crate::drive::backend::ChildFilter;

/// Escape a value for interpolation into a Drive `q` expression.
/// Single quotes and backslashes must be backslash-escaped.
pub fn escape_query_value(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

/// Build the `q` expression for a children listing
pub fn children_query(parent_id: &str, filter: &ChildFilter) -> String {
    let mut query = format!(
        "'{}' in parents and trashed = false",
        escape_query_value(parent_id)
    );

    if filter.folders_only {
        query.push_str(&format!(" and mimeType = '{}'", FOLDER_MIME_TYPE));
    }

    if let Some(ref name) = filter.name_equals {
        query.push_str(&format!(" and name = '{}'", escape_query_value(name)));
    }

    query
}

/// Join a parent path and a name the way traversal paths are reported:
/// the root's own children have no prefix.
pub fn join_path(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", prefix, name)
    }
}

/// Split a slash-delimited path into its segments, discarding empty ones
/// so `/a//b/` and `a/b` are equivalent.
pub fn path_segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Format a byte count for display
pub fn format_size(size: i64) -> String {
    const KB: i64 = 1024;
    const MB: i64 = KB * 1024;
    const GB: i64 = MB * 1024;

    if size < KB {
        format!("{} bytes", size)
    } else if size < MB {
        format!("{} KB", (size + KB / 2) / KB)
    } else if size < GB {
        format!("{:.1} MB", size as f64 / MB as f64)
    } else {
        format!("{:.1} GB", size as f64 / GB as f64)
    }
}
