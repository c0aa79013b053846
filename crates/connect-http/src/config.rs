use connect_models::{config::Config, query::ConfigQuery};
use serde::de::DeserializeOwned;

use crate::{routes, HasHttp, Http, Result};

/// Fetches the configuration for a platform / version pair.
///
/// Every failure is returned as-is: nothing is retried or cached, so the
/// caller decides whether to retry, fall back or give up.
#[async_trait::async_trait]
pub trait ConfigFetcher: Send + Sync {
    async fn fetch_config(&self, platform: &str, version: &str) -> Result<Config>;
}

#[async_trait::async_trait]
impl<T> ConfigFetcher for T
where
    T: HasHttp + Send + Sync,
{
    async fn fetch_config(&self, platform: &str, version: &str) -> Result<Config> {
        self.get_http().fetch_config_as(platform, version).await
    }
}

impl Http {
    /// Same request as [`ConfigFetcher::fetch_config`], decoding the body
    /// into a caller-provided schema instead of an opaque [`Config`].
    pub async fn fetch_config_as<T: DeserializeOwned>(
        &self,
        platform: &str,
        version: &str,
    ) -> Result<T> {
        let query = match ConfigQuery::new(platform, version) {
            Ok(query) => query,
            Err(err) => {
                tracing::debug!("Not fetching config: {}", err);
                return Err(err.into());
            }
        };

        self.execute(&routes::CONFIG, &query).await
    }
}
