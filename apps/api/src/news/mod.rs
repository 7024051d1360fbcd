//! News fetcher: one outbound keyword search against the news API, then
//! client-side keyword filtering and ranking.
//!
//! All outbound news traffic goes through `NewsClient`; handlers only see
//! the `NewsSource` trait, so tests can substitute a canned backend.

use async_trait::async_trait;
use chrono::{Duration, NaiveDate, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub mod handlers;

const REQUEST_TIMEOUT_SECS: u64 = 20;

/// Domains excluded from every search regardless of field.
const EXCLUDE_DOMAINS: [&str; 4] = [
    "rumble.com",
    "brighteon.com",
    "apple.com",
    "facebook.com",
];

/// Whitelisted domains per field label, when the field is known.
pub fn domains_for(field: &str) -> &'static [&'static str] {
    match field {
        "Engineering" => &["ieee.org", "techcrunch.com", "arstechnica.com", "theverge.com"],
        "Science" => &[
            "nature.com",
            "sciencedaily.com",
            "scientificamerican.com",
            "arxiv.org",
        ],
        "Medical" => &["nejm.org", "thelancet.com", "who.int", "nih.gov"],
        "Arts" => &["theguardian.com", "nytimes.com", "smithsonianmag.com"],
        "Commerce" => &["ft.com", "economist.com", "wsj.com", "business-standard.com"],
        _ => &[],
    }
}

/// Default search keywords per field, used when the caller supplies none.
pub fn keywords_for(field: &str) -> Vec<String> {
    let defaults: &[&str] = match field {
        "Engineering" => &["robotics", "AI", "automation", "IoT"],
        "Science" => &["space", "physics", "biology", "chemistry"],
        "Medical" => &["healthcare", "medicine", "clinical trials", "pharma"],
        "Arts" => &["design", "media", "painting", "music"],
        "Commerce" => &["finance", "stock market", "economics", "entrepreneurship"],
        _ => return vec![field.to_string()],
    };
    defaults.iter().map(|k| k.to_string()).collect()
}

#[derive(Debug, Error)]
pub enum NewsError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("News API error (status {status}): {message}")]
    Api { status: u16, message: String },
}

/// One article as returned by the search API. Every field is optional; the
/// ranking stage normalizes.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Article {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    #[serde(default)]
    pub source: ArticleSource,
    #[serde(rename = "publishedAt")]
    pub published_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ArticleSource {
    pub name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    articles: Vec<Article>,
}

/// A surfaced news item: publish date truncated to calendar-day granularity.
#[derive(Debug, Clone, Serialize)]
pub struct NewsItem {
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub source: Option<String>,
    pub published_at: Option<NaiveDate>,
}

/// Parameters of one outbound search.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub query: String,
    pub from_date: NaiveDate,
    pub page_size: u32,
    pub domains: Vec<String>,
}

/// The outbound search seam. The live implementation is `NewsClient`; tests
/// substitute a stub returning canned articles.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, NewsError>;
}

/// Live news API backend. One GET per fetch, explicit timeout, no retry.
#[derive(Clone)]
pub struct NewsClient {
    client: Client,
    base_url: String,
    api_key: String,
}

impl NewsClient {
    pub fn new(base_url: String, api_key: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            base_url,
            api_key,
        }
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn search(&self, request: &SearchRequest) -> Result<Vec<Article>, NewsError> {
        let mut params: Vec<(&str, String)> = vec![
            ("q", request.query.clone()),
            ("searchIn", "title,description".to_string()),
            ("sortBy", "relevancy".to_string()),
            ("language", "en".to_string()),
            ("from", request.from_date.to_string()),
            ("pageSize", request.page_size.to_string()),
            ("excludeDomains", EXCLUDE_DOMAINS.join(",")),
            ("apiKey", self.api_key.clone()),
        ];
        if !request.domains.is_empty() {
            params.push(("domains", request.domains.join(",")));
        }

        debug!(query = %request.query, from = %request.from_date, "Issuing news search");
        let response = self.client.get(&self.base_url).query(&params).send().await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(NewsError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let body: SearchResponse = response.json().await?;
        Ok(body.articles)
    }
}

/// OR-combination of quoted keyword phrases.
pub fn build_query_terms(keywords: &[String]) -> String {
    keywords
        .iter()
        .map(|k| format!("\"{k}\""))
        .collect::<Vec<_>>()
        .join(" OR ")
}

/// Fetches, filters and ranks news for a field. Callers without an opinion
/// should pass a 21-day window, page size 50 and a 30-item cap. HTTP
/// failures propagate to the caller untouched; there is no retry and no
/// fallback content.
pub async fn fetch_relevant_news(
    source: &dyn NewsSource,
    field: &str,
    keywords: &[String],
    days: i64,
    page_size: u32,
    max_items: usize,
) -> Result<Vec<NewsItem>, NewsError> {
    let request = SearchRequest {
        query: build_query_terms(keywords),
        from_date: (Utc::now() - Duration::days(days)).date_naive(),
        page_size,
        domains: domains_for(field).iter().map(|d| d.to_string()).collect(),
    };
    let articles = source.search(&request).await?;
    Ok(rank_articles(articles, keywords, max_items))
}

/// Post-filter: drops articles with zero keyword hits across
/// title+description, scores the rest as hits + 0.5 × title-only hits, and
/// stable-sorts descending so equal scores keep the API's relevance order.
pub fn rank_articles(articles: Vec<Article>, keywords: &[String], max_items: usize) -> Vec<NewsItem> {
    let keywords: Vec<String> = keywords.iter().map(|k| k.to_lowercase()).collect();

    let mut scored: Vec<(f64, NewsItem)> = articles
        .into_iter()
        .filter_map(|article| {
            let title = article.title.as_deref().unwrap_or_default().to_lowercase();
            let description = article
                .description
                .as_deref()
                .unwrap_or_default()
                .to_lowercase();
            let text = format!("{title} {description}");

            let hits = keywords.iter().filter(|k| text.contains(k.as_str())).count();
            if hits == 0 {
                return None;
            }
            let title_hits = keywords.iter().filter(|k| title.contains(k.as_str())).count();
            let score = hits as f64 + 0.5 * title_hits as f64;

            Some((
                score,
                NewsItem {
                    title: article.title,
                    description: article.description,
                    url: article.url,
                    source: article.source.name,
                    published_at: article.published_at.as_deref().and_then(parse_day),
                },
            ))
        })
        .collect();

    scored.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));
    scored
        .into_iter()
        .take(max_items)
        .map(|(_, item)| item)
        .collect()
}

/// Truncates an ISO timestamp to its calendar day.
fn parse_day(timestamp: &str) -> Option<NaiveDate> {
    timestamp
        .split('T')
        .next()
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn article(title: &str, description: &str, published_at: &str) -> Article {
        Article {
            title: Some(title.to_string()),
            description: Some(description.to_string()),
            url: Some("https://example.com/a".to_string()),
            source: ArticleSource {
                name: Some("Example".to_string()),
            },
            published_at: Some(published_at.to_string()),
        }
    }

    fn kw(words: &[&str]) -> Vec<String> {
        words.iter().map(|w| w.to_string()).collect()
    }

    #[test]
    fn test_query_is_or_joined_quoted_phrases() {
        let q = build_query_terms(&kw(&["robotics", "machine learning"]));
        assert_eq!(q, "\"robotics\" OR \"machine learning\"");
    }

    #[test]
    fn test_zero_hit_articles_are_excluded() {
        let articles = vec![
            article("Quarterly earnings beat estimates", "Markets rallied.", "2026-08-20T10:00:00Z"),
            article("Robotics lab opens", "New automation research center.", "2026-08-21T09:00:00Z"),
        ];
        let items = rank_articles(articles, &kw(&["robotics", "automation"]), 30);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title.as_deref(), Some("Robotics lab opens"));
    }

    #[test]
    fn test_title_hits_outrank_description_hits() {
        let articles = vec![
            article("Weekly digest", "A long piece about robotics.", "2026-08-20T10:00:00Z"),
            article("Robotics breakthrough", "Details inside.", "2026-08-19T10:00:00Z"),
        ];
        let items = rank_articles(articles, &kw(&["robotics"]), 30);
        // 1 + 0.5 title bonus beats a description-only hit.
        assert_eq!(items[0].title.as_deref(), Some("Robotics breakthrough"));
    }

    #[test]
    fn test_equal_scores_keep_api_order() {
        let articles = vec![
            article("First robotics story", "", "2026-08-20T10:00:00Z"),
            article("Second robotics story", "", "2026-08-19T10:00:00Z"),
        ];
        let items = rank_articles(articles, &kw(&["robotics"]), 30);
        assert_eq!(items[0].title.as_deref(), Some("First robotics story"));
        assert_eq!(items[1].title.as_deref(), Some("Second robotics story"));
    }

    #[test]
    fn test_truncates_to_max_items() {
        let articles: Vec<Article> = (0..10)
            .map(|i| article(&format!("Robotics {i}"), "", "2026-08-20T10:00:00Z"))
            .collect();
        let items = rank_articles(articles, &kw(&["robotics"]), 3);
        assert_eq!(items.len(), 3);
    }

    #[test]
    fn test_publish_date_truncated_to_day() {
        let articles = vec![article("Robotics", "", "2026-08-20T10:31:02Z")];
        let items = rank_articles(articles, &kw(&["robotics"]), 30);
        assert_eq!(
            items[0].published_at,
            NaiveDate::from_ymd_opt(2026, 8, 20)
        );
    }

    #[test]
    fn test_missing_fields_tolerated() {
        let articles = vec![Article {
            title: Some("Robotics".to_string()),
            ..Article::default()
        }];
        let items = rank_articles(articles, &kw(&["robotics"]), 30);
        assert_eq!(items.len(), 1);
        assert!(items[0].published_at.is_none());
        assert!(items[0].source.is_none());
    }

    #[test]
    fn test_matching_is_case_insensitive() {
        let articles = vec![article("ROBOTICS NEWS", "", "2026-08-20T10:00:00Z")];
        let items = rank_articles(articles, &kw(&["Robotics"]), 30);
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn test_unknown_field_has_no_domain_whitelist_and_self_keyword() {
        assert!(domains_for("Engineering").contains(&"ieee.org"));
        assert!(domains_for("Underwater Basketry").is_empty());
        assert_eq!(keywords_for("Underwater Basketry"), vec!["Underwater Basketry"]);
    }
}
