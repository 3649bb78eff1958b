//! String utility functions shared by the installer and shim stages.

/// Check if a registry field is effectively empty
///
/// Registry entries sometimes carry whitespace-only values; those count as missing.
///
/// # Examples
/// ```ignore
/// assert!(is_blank("   "));
/// assert!(!is_blank(" C:\\Tools "));
/// ```
pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Final component of a path written with either `/` or `\` separators
///
/// Registry paths are Windows paths, so [`std::path::Path::file_name`] would not split them on
/// other hosts.
pub fn base_name(path: &str) -> &str {
    path.rsplit(['/', '\\']).next().unwrap_or(path)
}

/// Turn `value` into a single directory name
///
/// Separators and the other characters Windows rejects in file names become `_`.
pub fn path_segment(value: &str) -> String {
    let segment: String = value
        .trim()
        .chars()
        .map(|c| {
            if c.is_control() || matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|') {
                '_'
            } else {
                c
            }
        })
        .collect();

    match segment.as_str() {
        "" | "." | ".." => "_".to_string(),
        _ => segment,
    }
}
