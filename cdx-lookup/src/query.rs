/// One exact-URL query against the archive's CDX index.
///
/// The URL is carried verbatim: no normalization, no wildcard or prefix
/// matching. Encoding happens at the HTTP layer as ordinary query-parameter
/// encoding.
#[derive(Debug, Clone, PartialEq)]
pub struct CdxQuery {
    pub endpoint: String,
    pub url: String,
}

impl CdxQuery {
    pub fn new(endpoint: &str, url: &str) -> Self {
        CdxQuery {
            endpoint: endpoint.to_string(),
            url: url.to_string(),
        }
    }

    /// Query parameters requesting one JSON record per line for this URL.
    pub fn params(&self) -> [(&'static str, &str); 2] {
        [("url", self.url.as_str()), ("output", "json")]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn carries_the_url_verbatim() {
        let query = CdxQuery::new("https://archive.test/cdx", "https://example.com/a?b=c d");
        assert_eq!(query.endpoint, "https://archive.test/cdx");
        assert_eq!(
            query.params(),
            [
                ("url", "https://example.com/a?b=c d"),
                ("output", "json"),
            ]
        );
    }
}
