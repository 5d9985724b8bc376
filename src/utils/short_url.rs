//! Rendering of externally visible short URLs.

/// Builds the short URL for `code`.
///
/// With a base address the result is `"{base}/{code}"` (trailing slashes on the
/// base are ignored); without one the relative form `"/{code}"` is returned.
pub fn compose_short_url(base_url: Option<&str>, code: &str) -> String {
    match base_url {
        Some(base) => format!("{}/{}", base.trim_end_matches('/'), code),
        None => format!("/{}", code),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_base_url() {
        assert_eq!(
            compose_short_url(Some("http://0.0.0.0:8000"), "aB3dE5gH"),
            "http://0.0.0.0:8000/aB3dE5gH"
        );
    }

    #[test]
    fn test_base_url_trailing_slashes_trimmed() {
        assert_eq!(
            compose_short_url(Some("https://s.example.com//"), "abc"),
            "https://s.example.com/abc"
        );
    }

    #[test]
    fn test_relative_without_base_url() {
        assert_eq!(compose_short_url(None, "abc"), "/abc");
    }
}
