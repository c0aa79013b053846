use std::{result::Result as StdResult, time::Duration};

use connect_models::query::QueryError;
use reqwest::StatusCode;
use serde::{de::DeserializeOwned, Serialize};

pub mod config;
pub mod route;

pub use config::ConfigFetcher;
pub use route::{routes, Route};

#[derive(Debug, thiserror::Error)]
pub enum HttpError {
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryError),

    #[error("transport: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with {status}")]
    Server { status: StatusCode, body: String },

    #[error("decoding: {0}")]
    Decode(#[from] serde_json::Error),
}

impl HttpError {
    /// The status code, if the server answered with a non-success status.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}

pub type Result<T = ()> = StdResult<T, HttpError>;

const DEFAULT_USER_AGENT: &str = concat!("connect-http/", env!("CARGO_PKG_VERSION"));

/// Settings used to build the underlying [`reqwest::Client`].
#[derive(Clone, Debug)]
pub struct HttpConfig {
    /// Scheme and host (and optionally a base path) the routes are appended to.
    pub api_root: String,
    /// Request timeout; `None` leaves it to reqwest.
    pub timeout: Option<Duration>,
    pub user_agent: Option<String>,
}

impl HttpConfig {
    pub fn new(api_root: impl Into<String>) -> Self {
        Self {
            api_root: api_root.into(),
            timeout: None,
            user_agent: Some(DEFAULT_USER_AGENT.to_string()),
        }
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    fn build_client(&self) -> reqwest::Result<reqwest::Client> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.as_str());
        }

        builder.build()
    }
}

/// Anything that holds an [`Http`].
pub trait HasHttp {
    fn get_http(&self) -> &Http;
}

impl HasHttp for Http {
    fn get_http(&self) -> &Http {
        self
    }
}

/// The http client adapter. Holds no state besides the connection pool
/// of the inner [`reqwest::Client`], so it can be shared between tasks.
#[derive(Clone, Debug)]
pub struct Http {
    client: reqwest::Client,
    api_root: String,
}

impl Http {
    /// Creates a client with the default settings.
    pub fn new(api_root: impl Into<String>) -> Result<Self> {
        Self::with_config(HttpConfig::new(api_root))
    }

    pub fn with_config(config: HttpConfig) -> Result<Self> {
        let client = config.build_client()?;

        Ok(Self {
            client,
            api_root: config.api_root,
        })
    }

    /// Wraps an already configured client.
    pub fn from_client(client: reqwest::Client, api_root: impl Into<String>) -> Self {
        Self {
            client,
            api_root: api_root.into(),
        }
    }

    pub fn api_root(&self) -> &str {
        &self.api_root
    }

    /// Sends a request for `route` and decodes the json body.
    ///
    /// Non-2xx statuses become [`HttpError::Server`] before the body is
    /// looked at, so a json error page is never mistaken for a response.
    pub async fn execute<Q, T>(&self, route: &Route, query: &Q) -> Result<T>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = route.url(&self.api_root);
        tracing::debug!("Sending {} {}", route.method, url);

        let response = match self
            .client
            .request(route.method.clone(), &url)
            .query(query)
            .send()
            .await
        {
            Ok(response) => response,
            Err(err) => {
                tracing::error!("{} {} failed: {}", route.method, url, err);
                return Err(err.into());
            }
        };

        let status = response.status();
        if !status.is_success() {
            // the body is only kept for diagnostics
            let body = match response.text().await {
                Ok(body) => body,
                Err(err) => {
                    tracing::debug!("Cannot read error body of {} {}: {}", route.method, url, err);
                    String::new()
                }
            };
            tracing::warn!("{} {} returned {}", route.method, url, status);
            return Err(HttpError::Server { status, body });
        }

        // decoded from raw bytes, so invalid utf-8 is a decode error
        let body = response.bytes().await?;

        match serde_json::from_slice(&body) {
            Ok(value) => {
                tracing::debug!("{} {} succeeded", route.method, url);
                Ok(value)
            }
            Err(err) => {
                tracing::error!("Cannot decode body of {} {}: {}", route.method, url, err);
                Err(err.into())
            }
        }
    }
}
