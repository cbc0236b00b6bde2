use crate::config::Config;
use crate::error::FetchError;
use crate::model::{Listing, Post};
use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::{debug, warn};

/// Posts requested per listing call. There is no pagination.
pub const LISTING_LIMIT: u32 = 25;

/// Where columns get their posts from.
#[async_trait]
pub trait PostSource: Send + Sync {
    async fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>, FetchError>;

    /// `true` only when the subreddit's about page answers with a success status.
    async fn exists(&self, subreddit: &str) -> bool;
}

/// Thin client over the public Reddit JSON endpoints.
pub struct RedditClient {
    http: Client,
    base: Url,
}

impl RedditClient {
    pub fn new(config: &Config) -> Result<Self, FetchError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build().map_err(FetchError::Network)?;
        let base = Url::parse(&config.api_base)
            .map_err(|e| FetchError::Decode(format!("bad api base '{}': {}", config.api_base, e)))?;
        Ok(Self { http, base })
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    pub fn listing_url(&self, subreddit: &str) -> Url {
        let mut url = self.endpoint(&["r", &format!("{}.json", subreddit)]);
        url.query_pairs_mut()
            .append_pair("limit", &LISTING_LIMIT.to_string())
            .append_pair("raw_json", "1");
        url
    }

    pub fn about_url(&self, subreddit: &str) -> Url {
        self.endpoint(&["r", subreddit, "about.json"])
    }

    async fn request_listing(&self, subreddit: &str) -> Result<Vec<Post>, FetchError> {
        let url = self.listing_url(subreddit);
        debug!(%url, "fetching listing");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        let body = response.text().await?;
        let listing: Listing =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;
        Ok(listing.into_posts())
    }

    /// Same as [`PostSource::fetch_posts`] but any failure comes back as an empty list.
    pub async fn fetch_posts_or_empty(&self, subreddit: &str) -> Vec<Post> {
        self.fetch_posts(subreddit).await.unwrap_or_default()
    }
}

#[async_trait]
impl PostSource for RedditClient {
    async fn fetch_posts(&self, subreddit: &str) -> Result<Vec<Post>, FetchError> {
        match self.request_listing(subreddit).await {
            Ok(posts) => {
                debug!(subreddit, count = posts.len(), "listing loaded");
                Ok(posts)
            }
            Err(e) => {
                warn!(subreddit, error = %e, "error fetching r/{}", subreddit);
                Err(e)
            }
        }
    }

    async fn exists(&self, subreddit: &str) -> bool {
        let url = self.about_url(subreddit);
        match self.http.get(url).send().await {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!(subreddit, error = %e, "about lookup failed");
                false
            }
        }
    }
}
