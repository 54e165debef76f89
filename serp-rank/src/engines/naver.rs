//! Naver — Korean portal search, the highest-priority source.
//!
//! Naver's integrated search page mixes organic results with sponsored
//! links and links back into its own vertical searches. Those are removed
//! here, and snippet whitespace (left ragged by the HTML text nodes) is
//! collapsed.

use url::Url;

use crate::engine::EnginePostProcess;
use crate::error::{RankError, Result};
use crate::types::{CandidateRecord, SearchEngine};

/// Endpoint for Naver's integrated search.
pub const SEARCH_URL: &str = "https://search.naver.com/search.naver";

/// Host serving Naver's sponsored links.
const AD_HOST: &str = "searchad.naver.com";

/// Results shown per page.
const PAGE_SIZE: u32 = 10;

/// Naver request builder and result cleanup.
pub struct NaverEngine;

impl NaverEngine {
    /// Build the GET query parameters for a Naver search.
    ///
    /// - `start` is 1-based: page 1 starts at 1, page 2 at 11.
    /// - Korean regions (`kr-*` or `*-ko`) switch on the Korean search mode.
    /// - `timelimit` of `d`, `w`, `m` or `y` restricts results to the last
    ///   day, week, month or year; anything else is ignored.
    pub fn build_payload(
        query: &str,
        region: &str,
        timelimit: Option<&str>,
        page: u32,
    ) -> Vec<(&'static str, String)> {
        let start = page
            .saturating_sub(1)
            .saturating_mul(PAGE_SIZE)
            .saturating_add(1);
        let mut payload = vec![
            ("query", query.to_string()),
            ("where", "nexearch".to_string()),
            ("start", start.to_string()),
        ];

        if let Some((country, lang)) = region.to_lowercase().split_once('-') {
            if lang == "ko" || country == "kr" {
                payload.push(("sm", "top_hty".to_string()));
            }
        }

        let period = match timelimit {
            Some("d") => Some("1d"),
            Some("w") => Some("1w"),
            Some("m") => Some("1m"),
            Some("y") => Some("1y"),
            _ => None,
        };
        if let Some(period) = period {
            payload.push(("nso", format!("so:r,p:{period}")));
        }

        payload
    }

    /// Full request URL for a Naver search.
    ///
    /// # Errors
    ///
    /// Returns [`RankError::Parse`] if the URL cannot be assembled.
    pub fn search_url(
        query: &str,
        region: &str,
        timelimit: Option<&str>,
        page: u32,
    ) -> Result<Url> {
        let payload = Self::build_payload(query, region, timelimit, page);
        Url::parse_with_params(SEARCH_URL, &payload)
            .map_err(|e| RankError::Parse(format!("invalid Naver search URL: {e}")))
    }

    fn is_internal(href: &str) -> bool {
        href.contains(AD_HOST) || href.starts_with(SEARCH_URL)
    }
}

impl EnginePostProcess for NaverEngine {
    fn engine_type(&self) -> SearchEngine {
        SearchEngine::Naver
    }

    fn post_extract(&self, results: Vec<CandidateRecord>) -> Vec<CandidateRecord> {
        let total = results.len();
        let kept: Vec<CandidateRecord> = results
            .into_iter()
            .filter(|r| !r.href().is_empty() && !r.title().is_empty())
            .filter(|r| !Self::is_internal(r.href()))
            .map(|mut r| {
                if let Some(body) = r.body.as_mut() {
                    *body = body.split_whitespace().collect::<Vec<_>>().join(" ");
                }
                r
            })
            .collect();

        tracing::debug!(kept = kept.len(), dropped = total - kept.len(), "Naver results cleaned");
        kept
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Priority;

    fn param<'a>(payload: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        payload
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn naver_is_priority_three() {
        assert_eq!(NaverEngine.priority(), Priority::Int(3));
        assert_eq!(NaverEngine.engine_type(), SearchEngine::Naver);
    }

    #[test]
    fn payload_basic_fields() {
        let payload = NaverEngine::build_payload("rust", "us-en", None, 1);
        assert_eq!(param(&payload, "query"), Some("rust"));
        assert_eq!(param(&payload, "where"), Some("nexearch"));
        assert_eq!(param(&payload, "start"), Some("1"));
        assert_eq!(param(&payload, "sm"), None);
        assert_eq!(param(&payload, "nso"), None);
    }

    #[test]
    fn payload_start_is_one_based_per_page() {
        let payload = NaverEngine::build_payload("rust", "", None, 3);
        assert_eq!(param(&payload, "start"), Some("21"));
        let payload = NaverEngine::build_payload("rust", "", None, 0);
        assert_eq!(param(&payload, "start"), Some("1"));
    }

    #[test]
    fn payload_start_saturates_for_huge_pages() {
        let payload = NaverEngine::build_payload("q", "", None, u32::MAX);
        assert_eq!(param(&payload, "start"), Some(u32::MAX.to_string().as_str()));
    }

    #[test]
    fn payload_korean_region_sets_search_mode() {
        for region in ["kr-kr", "KR-en", "us-ko"] {
            let payload = NaverEngine::build_payload("q", region, None, 1);
            assert_eq!(param(&payload, "sm"), Some("top_hty"), "region {region}");
        }
        let payload = NaverEngine::build_payload("q", "kr", None, 1);
        assert_eq!(param(&payload, "sm"), None);
    }

    #[test]
    fn payload_timelimit_mapping() {
        let payload = NaverEngine::build_payload("q", "", Some("w"), 1);
        assert_eq!(param(&payload, "nso"), Some("so:r,p:1w"));
        let payload = NaverEngine::build_payload("q", "", Some("x"), 1);
        assert_eq!(param(&payload, "nso"), None);
    }

    #[test]
    fn search_url_encodes_query() {
        let url = NaverEngine::search_url("파이썬 tips", "kr-kr", Some("d"), 2).expect("url");
        assert_eq!(url.host_str(), Some("search.naver.com"));
        assert_eq!(url.path(), "/search.naver");
        let pairs: Vec<(String, String)> = url
            .query_pairs()
            .map(|(k, v)| (k.into_owned(), v.into_owned()))
            .collect();
        assert!(pairs.contains(&("query".into(), "파이썬 tips".into())));
        assert!(pairs.contains(&("start".into(), "11".into())));
        assert!(pairs.contains(&("nso".into(), "so:r,p:1d".into())));
    }

    #[test]
    fn post_extract_drops_empty_ads_and_internal_links() {
        let results = vec![
            CandidateRecord::new("Organic", "https://example.com/a", "body"),
            CandidateRecord::new("", "https://example.com/untitled", "body"),
            CandidateRecord::new("No link", "", "body"),
            CandidateRecord::new("Ad", "https://searchad.naver.com/click?x=1", "body"),
            CandidateRecord::new(
                "Related",
                "https://search.naver.com/search.naver?query=more",
                "body",
            ),
            CandidateRecord::new("Blog", "https://blog.naver.com/post/1", "body"),
        ];
        let kept = NaverEngine.post_extract(results);
        let hrefs: Vec<&str> = kept.iter().map(CandidateRecord::href).collect();
        assert_eq!(
            hrefs,
            vec!["https://example.com/a", "https://blog.naver.com/post/1"]
        );
    }

    #[test]
    fn post_extract_collapses_body_whitespace() {
        let results = vec![CandidateRecord::new(
            "Title",
            "https://example.com",
            "  Learn \n\t python   basics  ",
        )];
        let kept = NaverEngine.post_extract(results);
        assert_eq!(kept[0].body.as_deref(), Some("Learn python basics"));
    }

    #[test]
    fn post_extract_leaves_other_fields_alone() {
        let record = CandidateRecord {
            title: Some("T".into()),
            href: Some("https://example.com".into()),
            description: Some("  kept   as is ".into()),
            ..Default::default()
        }
        .with_field("position", 4);
        let kept = NaverEngine.post_extract(vec![record.clone()]);
        assert_eq!(kept[0], record);
    }
}
