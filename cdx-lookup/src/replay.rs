/// Builds a viewer link for the earliest capture of a URL.
///
/// The link is `<replay_base><timestamp>/<original_url>`, with the original
/// URL inserted as-is. A URL with no captures has nothing to replay, so no
/// timestamp means no link.
pub fn replay_url(
    replay_base: &str,
    original_url: &str,
    timestamp: Option<&str>,
) -> Option<String> {
    let timestamp = timestamp?;
    Some(format!("{}{}/{}", replay_base, timestamp, original_url))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn joins_base_timestamp_and_url() {
        assert_eq!(
            replay_url(
                "https://nettarkivet.nb.no/search/",
                "https://example.com/a",
                Some("20190101000000"),
            ),
            Some("https://nettarkivet.nb.no/search/20190101000000/https://example.com/a".to_string())
        );
    }

    #[test]
    fn no_timestamp_means_no_link() {
        assert_eq!(
            replay_url("https://nettarkivet.nb.no/search/", "https://example.com/a", None),
            None
        );
    }

    #[test]
    fn does_not_re_encode_the_url() {
        assert_eq!(
            replay_url("base/", "https://example.com/?q=a b&x=1", Some("20200101000000")),
            Some("base/20200101000000/https://example.com/?q=a b&x=1".to_string())
        );
    }
}
