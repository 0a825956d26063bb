//! Small shared helpers: filename date parsing.

/// Derive the normalized publish date from an archive file name.
///
/// Archive files are named `YYYY_MM_DD_<suffix>.html`; the first three
/// underscore-separated tokens are the date components, joined with hyphens
/// to form the `YYYY-MM-DD` store key.
///
/// No range validation is performed — a malformed file name produces a
/// malformed but harmless key rather than an error.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(parse_publish_date("2007_03_14_IW.html"), "2007-03-14");
/// ```
pub fn parse_publish_date(file_name: &str) -> String {
    file_name
        .split('_')
        .take(3)
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_publish_date() {
        assert_eq!(parse_publish_date("2007_03_14_IW.html"), "2007-03-14");
        assert_eq!(parse_publish_date("1999_12_31_nyt_extra.html"), "1999-12-31");
    }

    #[test]
    fn test_parse_publish_date_malformed_is_non_fatal() {
        // Fewer than three tokens: joins whatever is there.
        assert_eq!(parse_publish_date("readme.html"), "readme.html");
        assert_eq!(parse_publish_date("2007_03.html"), "2007-03.html");
        assert_eq!(parse_publish_date(""), "");
    }

    #[test]
    fn test_parse_publish_date_no_numeric_validation() {
        assert_eq!(parse_publish_date("2007_13_99_IW.html"), "2007-13-99");
    }
}
