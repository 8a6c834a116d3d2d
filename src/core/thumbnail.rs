use async_trait::async_trait;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    #[error("invalid thumbnail URL {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("thumbnail request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("thumbnail returned HTTP {0}")]
    Status(reqwest::StatusCode),
    #[error("thumbnail is not an image (content type {0})")]
    NotAnImage(String),
}

/// Fetches a thumbnail image and reports whether it could be displayed.
#[async_trait]
pub trait ThumbnailLoader: Send + Sync {
    async fn load(&self, url: &str) -> Result<(), ThumbnailError>;
}

/// Loads thumbnails over HTTP. A failure is final; callers substitute a
/// fallback instead of retrying.
pub struct HttpThumbnailLoader {
    client: reqwest::Client,
}

impl HttpThumbnailLoader {
    pub fn new(user_agent: &str, timeout: Duration) -> Result<Self, ThumbnailError> {
        let client = reqwest::Client::builder()
            .user_agent(user_agent)
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        Ok(Self { client })
    }
}

#[async_trait]
impl ThumbnailLoader for HttpThumbnailLoader {
    async fn load(&self, url: &str) -> Result<(), ThumbnailError> {
        let parsed = Url::parse(url).map_err(|source| ThumbnailError::InvalidUrl {
            url: url.to_string(),
            source,
        })?;

        let response = self
            .client
            .get(parsed)
            .header("Accept", "image/avif,image/webp,image/*,*/*;q=0.8")
            .send()
            .await?;

        let status = response.status();
        debug!("Thumbnail {} answered HTTP {}", url, status);
        if !status.is_success() {
            return Err(ThumbnailError::Status(status));
        }

        if let Some(content_type) = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
        {
            if !content_type.starts_with("image/") {
                return Err(ThumbnailError::NotAnImage(content_type.to_string()));
            }
        }

        Ok(())
    }
}
