//! File id and stored-name helpers shared by storage backends.

use uuid::Uuid;

/// Generate a new file id (hyphenated UUID v4).
pub(crate) fn generate_file_id() -> String {
    Uuid::new_v4().to_string()
}

/// Extension of an uploaded filename, including the leading dot.
///
/// Only the last path component is considered and leading dots are not treated as
/// an extension separator, so `.bashrc` has no extension. Returns an empty string
/// when there is no extension.
pub(crate) fn file_extension(filename: &str) -> &str {
    let base = filename.rsplit(['/', '\\']).next().unwrap_or(filename);
    let stem_start = base.len() - base.trim_start_matches('.').len();

    match base[stem_start..].rfind('.') {
        Some(idx) => &base[stem_start + idx..],
        None => "",
    }
}
