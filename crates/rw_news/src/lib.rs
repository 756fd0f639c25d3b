use async_trait::async_trait;
use serde::Deserialize;
use url::Url;

use rw_core::{Article, Error, NewsSource, Result};

const LATEST_ENDPOINT: &str = "https://newsdata.io/api/1/latest";

pub const DEFAULT_QUERY: &str = "crime in pune";

// TODO: derive category/priority from article content once a classifier
// exists; until then every proxied article carries these fixed tags.
const CATEGORY: &str = "safety";
const PRIORITY: &str = "medium";

/// Credentials and search term for the newsdata.io `latest` endpoint,
/// resolved once at startup and injected into the client.
#[derive(Debug, Clone)]
pub struct NewsClientConfig {
    pub api_key: String,
    pub query: String,
}

impl NewsClientConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            query: DEFAULT_QUERY.to_string(),
        }
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }
}

pub struct NewsClient {
    http: reqwest::Client,
    config: NewsClientConfig,
}

impl NewsClient {
    pub fn new(config: NewsClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> Result<Url> {
        Url::parse_with_params(
            LATEST_ENDPOINT,
            [
                ("apikey", self.config.api_key.as_str()),
                ("q", self.config.query.as_str()),
            ],
        )
        .map_err(|e| Error::Config(format!("invalid news endpoint: {}", e)))
    }
}

#[async_trait]
impl NewsSource for NewsClient {
    async fn fetch_latest(&self) -> Result<Vec<Article>> {
        let url = self.endpoint()?;
        let response = self.http.get(url).send().await?;
        let body = response.text().await?;
        parse_latest(&body)
    }
}

fn parse_latest(body: &str) -> Result<Vec<Article>> {
    let latest: LatestResponse = serde_json::from_str(body)
        .map_err(|e| Error::UpstreamMalformed(e.to_string()))?;

    // A body without `results` is a defined upstream fallback (no hits for
    // the query), not a failure.
    let Some(results) = latest.results else {
        tracing::warn!("upstream response has no results field");
        return Ok(Vec::new());
    };

    Ok(results.into_iter().map(Article::from).collect())
}

#[derive(Debug, Deserialize)]
struct LatestResponse {
    results: Option<Vec<UpstreamArticle>>,
}

/// The subset of newsdata.io's article object we map; everything else in
/// the upstream payload is ignored.
#[derive(Debug, Default, Deserialize)]
struct UpstreamArticle {
    title: Option<String>,
    description: Option<String>,
    content: Option<String>,
    #[serde(rename = "pubDate")]
    pub_date: Option<String>,
    source_id: Option<String>,
    image_url: Option<String>,
    link: Option<String>,
}

impl From<UpstreamArticle> for Article {
    fn from(raw: UpstreamArticle) -> Self {
        Article {
            title: raw.title.unwrap_or_else(|| "No Title".to_string()),
            summary: raw.description.unwrap_or_default(),
            content: raw.content.unwrap_or_default(),
            date: raw.pub_date.unwrap_or_default(),
            location: raw.source_id.unwrap_or_else(|| "Unknown".to_string()),
            category: CATEGORY.to_string(),
            priority: PRIORITY.to_string(),
            image_url: raw.image_url,
            url: raw.link,
        }
    }
}
