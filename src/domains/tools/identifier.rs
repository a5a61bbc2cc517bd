//! Tool identifier derivation.
//!
//! A tool's identifier is the last segment of the path it is stored under,
//! kept exactly as written. `toolPages/json` becomes `json`,
//! `toolPages/imageToAscii/` becomes `imageToAscii`.

/// Derive the identifier from a module's storage path.
///
/// Both `/` and `\` count as separators and trailing separators are ignored.
/// Returns `None` when the path has no usable segment.
pub fn derive_identifier(path: &str) -> Option<&str> {
    path.trim_end_matches(['/', '\\'])
        .rsplit(['/', '\\'])
        .next()
        .filter(|segment| !segment.is_empty() && *segment != "." && *segment != "..")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_segment() {
        assert_eq!(derive_identifier("tools/json-formatter"), Some("json-formatter"));
        assert_eq!(derive_identifier("json-formatter"), Some("json-formatter"));
        assert_eq!(
            derive_identifier("/srv/toolbox/tools/regex-tester/"),
            Some("regex-tester")
        );
        assert_eq!(derive_identifier(r"C:\tools\s3-upload"), Some("s3-upload"));
    }

    #[test]
    fn test_case_is_preserved() {
        assert_eq!(derive_identifier("toolPages/imageToAscii"), Some("imageToAscii"));
    }

    #[test]
    fn test_unusable_paths() {
        assert_eq!(derive_identifier(""), None);
        assert_eq!(derive_identifier("///"), None);
        assert_eq!(derive_identifier("tools/.."), None);
    }
}
