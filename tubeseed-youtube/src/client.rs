//! Thin wrapper around the YouTube Data API v3 `search.list` endpoint.
//!
//! Handles API-key auth and request parameter shaping before delegating to the
//! shared HTTP client. One call, one page: `nextPageToken` is logged and
//! never followed, and failed calls are not retried.
use crate::seed::SeedToken;
use crate::types::SearchListResponse;
use async_trait::async_trait;
use std::borrow::Cow;
use std::time::{Duration, Instant};
use tubeseed_common::{Result, TubeseedError};
use tubeseed_http::{Auth, HttpClient, RequestOpts};

pub const YOUTUBE_API_BASE: &str = "https://www.googleapis.com/youtube/v3/";
const SEARCH_PATH: &str = "search";
const SEARCH_PARTS: &str = "id,snippet";
const RELATED_TYPE: &str = "video";

/// Request parameters that stay fixed for a whole run.
#[derive(Debug, Clone)]
pub struct SearchOptions {
    pub max_results: u32,
    /// `none`, `moderate` or `strict`; forwarded as given.
    pub safe_search: String,
    /// Per-request timeout; `None` keeps the HTTP client default.
    pub timeout: Option<Duration>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_results: 50,
            safe_search: "none".to_string(),
            timeout: None,
        }
    }
}

/// Fully shaped `search.list` call for one seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    pub part: &'static str,
    pub safe_search: String,
    pub max_results: u32,
    pub query: Option<String>,
    pub related_to_video_id: Option<String>,
    pub type_filter: Option<&'static str>,
}

impl SearchRequest {
    /// ```
    /// use tubeseed_youtube::{SearchOptions, SearchRequest, SeedToken};
    ///
    /// let req = SearchRequest::from_seed(&SeedToken::parse("dQw4w9WgXcQ"), &SearchOptions::default());
    /// assert_eq!(req.related_to_video_id.as_deref(), Some("dQw4w9WgXcQ"));
    /// assert_eq!(req.type_filter, Some("video"));
    /// assert!(req.query.is_none());
    /// ```
    pub fn from_seed(seed: &SeedToken, options: &SearchOptions) -> Self {
        let (query, related_to_video_id, type_filter) = match seed {
            SeedToken::Query(q) => (Some(q.clone()), None, None),
            SeedToken::RelatedId(id) => (None, Some(id.clone()), Some(RELATED_TYPE)),
        };
        Self {
            part: SEARCH_PARTS,
            safe_search: options.safe_search.clone(),
            max_results: options.max_results,
            query,
            related_to_video_id,
            type_filter,
        }
    }

    /// Query parameters in the order they are sent (auth excluded).
    pub fn params(&self) -> Vec<(&'static str, Cow<'_, str>)> {
        let mut params: Vec<(&'static str, Cow<'_, str>)> = vec![
            ("part", self.part.into()),
            ("safeSearch", self.safe_search.as_str().into()),
            ("maxResults", self.max_results.to_string().into()),
        ];
        if let Some(q) = &self.query {
            params.push(("q", q.as_str().into()));
        }
        if let Some(id) = &self.related_to_video_id {
            params.push(("relatedToVideoId", id.as_str().into()));
        }
        if let Some(t) = self.type_filter {
            params.push(("type", t.into()));
        }
        params
    }
}

/// Anything that can answer one seed with one page of results.
#[async_trait]
pub trait VideoSearch: Send + Sync {
    async fn search(&self, seed: &SeedToken) -> Result<SearchListResponse>;
}

#[derive(Clone)]
pub struct YouTubeApi {
    http: HttpClient,
    developer_key: String,
    options: SearchOptions,
}

impl YouTubeApi {
    /// Client for `base`, normally [`YOUTUBE_API_BASE`]; tests and proxies
    /// point it elsewhere.
    pub fn with_base_url(base: &str, developer_key: String, options: SearchOptions) -> Result<Self> {
        if developer_key.trim().is_empty() {
            return Err(TubeseedError::MissingDeveloperKey);
        }
        let mut http = HttpClient::new(base)
            .map_err(|e| TubeseedError::Config(format!("HttpClient init failed: {e}")))?;
        if let Some(timeout) = options.timeout {
            http = http.with_timeout(timeout);
        }
        Ok(Self {
            http,
            developer_key,
            options,
        })
    }

    pub async fn search_page(&self, req: &SearchRequest) -> Result<SearchListResponse> {
        let resp: SearchListResponse = self
            .http
            .get_json(
                SEARCH_PATH,
                RequestOpts {
                    auth: Some(Auth::Query {
                        name: "key",
                        value: Cow::Borrowed(self.developer_key.as_str()),
                    }),
                    query: Some(req.params()),
                    ..Default::default()
                },
            )
            .await?;
        Ok(resp)
    }
}

#[async_trait]
impl VideoSearch for YouTubeApi {
    async fn search(&self, seed: &SeedToken) -> Result<SearchListResponse> {
        let req = SearchRequest::from_seed(seed, &self.options);
        let started = Instant::now();
        tracing::info!(
            target: "youtube.search",
            seed = %seed,
            variant = seed.variant(),
            max_results = req.max_results,
            safe_search = %req.safe_search,
            "youtube.search.start"
        );

        match self.search_page(&req).await {
            Ok(resp) => {
                tracing::info!(
                    target: "youtube.search",
                    seed = %seed,
                    item_count = resp.items.len(),
                    total_results = ?resp.page_info.as_ref().and_then(|p| p.total_results),
                    has_more = resp.next_page_token.is_some(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "youtube.search.success"
                );
                Ok(resp)
            }
            Err(e) => {
                tracing::debug!(
                    target: "youtube.search",
                    seed = %seed,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    error = %e,
                    "youtube.search.error"
                );
                Err(e)
            }
        }
    }
}
