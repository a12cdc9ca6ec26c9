// URL construction for the `where` API.
//
// Regional deployments are inconsistent about trailing slashes on their
// advertised base URLs, and call sites are inconsistent about leading
// slashes on paths. `UrlBuilder` absorbs both, and appends the default
// query items every request must carry.

use url::Url;

/// Builds fully-qualified request URLs: base + path joined with exactly
/// one slash, plus default query items merged with per-call parameters.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: Url,
    default_query: Vec<(String, String)>,
}

impl UrlBuilder {
    pub fn new(base_url: Url, default_query: Vec<(String, String)>) -> Self {
        Self {
            base_url,
            default_query,
        }
    }

    /// The base URL this builder joins against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join `path` onto the base URL.
    ///
    /// Exactly one slash separates the base path from `path`, regardless
    /// of what either side carries.
    pub fn join(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!(
            "{}/{}",
            url.path().trim_end_matches('/'),
            path.trim_start_matches('/')
        );
        url.set_path(&joined);
        url
    }

    /// Build a request URL for `path` with the default query items plus
    /// `extra` call-specific parameters.
    ///
    /// Keys and values are percent-encoded independently for the
    /// query-allowed character set. Item order in the final query string
    /// is unspecified; only presence and value are contract.
    pub fn url(&self, path: &str, extra: &[(&str, String)]) -> Url {
        let mut url = self.join(path);
        {
            let mut pairs = url.query_pairs_mut();
            for (key, value) in &self.default_query {
                pairs.append_pair(key, value);
            }
            for (key, value) in extra {
                pairs.append_pair(key, value);
            }
        }
        url
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;

    fn builder(base: &str) -> UrlBuilder {
        UrlBuilder::new(Url::parse(base).unwrap(), Vec::new())
    }

    #[test]
    fn join_is_slash_insensitive() {
        let expected = "https://example.com/api/test.json";

        assert_eq!(builder("https://example.com/api/").join("/test.json").as_str(), expected);
        assert_eq!(builder("https://example.com/api/").join("test.json").as_str(), expected);
        assert_eq!(builder("https://example.com/api").join("/test.json").as_str(), expected);
        assert_eq!(builder("https://example.com/api").join("test.json").as_str(), expected);
    }

    #[test]
    fn join_from_host_root() {
        assert_eq!(
            builder("https://example.com").join("api/where/stop/1_100.json").as_str(),
            "https://example.com/api/where/stop/1_100.json"
        );
    }

    #[test]
    fn default_query_items_are_present() {
        let builder = UrlBuilder::new(
            Url::parse("https://www.example.com").unwrap(),
            vec![
                ("key".into(), "test".into()),
                ("app_uid".into(), "uuid-1".into()),
                ("app_ver".into(), "1.0".into()),
                ("version".into(), "2".into()),
            ],
        );

        let url = builder.url("/api/where/stop/1_100.json", &[]);

        assert_eq!(url.path(), "/api/where/stop/1_100.json");
        assert_eq!(url.as_str().matches('?').count(), 1);

        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        for expected in [
            ("key", "test"),
            ("app_uid", "uuid-1"),
            ("app_ver", "1.0"),
            ("version", "2"),
        ] {
            assert!(
                pairs.iter().any(|(k, v)| (k.as_str(), v.as_str()) == expected),
                "missing query item {expected:?} in {url}"
            );
        }
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let builder = builder("https://example.com/api");
        let url = builder.url("search.json", &[("q", "5th & Pine".to_owned())]);

        assert!(url.query().unwrap().contains("q=5th+%26+Pine") || url.query().unwrap().contains("q=5th%20%26%20Pine"));
        let (_, decoded) = url.query_pairs().next().unwrap();
        assert_eq!(decoded, "5th & Pine");
    }

    #[test]
    fn extra_items_merge_with_defaults() {
        let builder = UrlBuilder::new(
            Url::parse("https://example.com/").unwrap(),
            vec![("key".into(), "test".into())],
        );
        let url = builder.url("api/where/current-time.json", &[("minutesAfter", "65".to_owned())]);

        let query = url.query().unwrap();
        assert!(query.contains("key=test"));
        assert!(query.contains("minutesAfter=65"));
    }
}
