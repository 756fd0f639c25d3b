use async_trait::async_trait;

use crate::types::Article;
use crate::Result;

/// Anything that can produce the latest batch of articles.
///
/// Implemented by the newsdata.io client; handlers depend on this trait so
/// tests can swap in a canned source.
#[async_trait]
pub trait NewsSource: Send + Sync {
    async fn fetch_latest(&self) -> Result<Vec<Article>>;
}
