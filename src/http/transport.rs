use std::time::Duration;

use async_trait::async_trait;
use futures_util::StreamExt;
use reqwest::{Client, Response};
use tracing::trace;
use url::Url;

use crate::args::DEFAULT_USER_AGENT;
use crate::error::{AppError, AppResult, HttpError};
use crate::metrics::FailureKind;

/// Issues one GET against the target and yields its status code.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn get(&self) -> Result<u16, FailureKind>;
}

/// [`Transport`] backed by one shared `reqwest` client.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    url: Url,
}

impl HttpTransport {
    /// Builds the client used by every request of the run.
    ///
    /// # Errors
    ///
    /// Returns an error when the HTTP client cannot be built.
    pub fn new(url: Url, request_timeout: Duration) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .build()
            .map_err(|err| AppError::http(HttpError::BuildClientFailed { source: err }))?;
        Ok(Self { client, url })
    }

    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn get(&self) -> Result<u16, FailureKind> {
        let response = self
            .client
            .get(self.url.clone())
            .send()
            .await
            .map_err(|err| failure_kind(&err))?;
        let status = response.status().as_u16();

        // Classified on the status line alone; the body drains detached,
        // bounded by the client timeout.
        drop(tokio::spawn(drain_body(response)));

        Ok(status)
    }
}

async fn drain_body(response: Response) {
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        if let Err(err) = chunk {
            trace!("Failed to drain response body: {}", err);
            break;
        }
    }
}

fn failure_kind(err: &reqwest::Error) -> FailureKind {
    if err.is_timeout() {
        FailureKind::Timeout
    } else {
        FailureKind::Transport
    }
}
