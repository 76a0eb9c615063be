//! Network side of the breach lookup.

use std::future::Future;
use std::time::Duration;

use secrecy::SecretString;
use tokio_util::sync::CancellationToken;

use super::{match_range, split_hash, BreachConfig, BreachError, HashPrefix, HashSuffix};
use crate::types::BreachResult;

const USER_AGENT: &str = concat!("pwd-guard/", env!("CARGO_PKG_VERSION"));

/// Something that answers range queries: given a 5-character prefix, return
/// the raw `SUFFIX:COUNT` body.
pub trait RangeSource: Send + Sync {
    fn fetch_range(
        &self,
        prefix: &HashPrefix,
    ) -> impl Future<Output = Result<String, BreachError>> + Send;
}

/// Range source backed by the Pwned Passwords HTTP API.
#[derive(Debug, Clone)]
pub struct HttpRangeSource {
    client: reqwest::Client,
    config: BreachConfig,
}

impl HttpRangeSource {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(USER_AGENT)
            .build()?;
        Ok(Self { client, config })
    }

    pub fn config(&self) -> &BreachConfig {
        &self.config
    }
}

impl RangeSource for HttpRangeSource {
    async fn fetch_range(&self, prefix: &HashPrefix) -> Result<String, BreachError> {
        let mut request = self.client.get(self.config.range_url(prefix.as_str()));
        if self.config.padding {
            request = request.header("Add-Padding", "true");
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(BreachError::Status(status.as_u16()));
        }
        Ok(response.text().await?)
    }
}

/// Runs k-anonymity lookups against a [`RangeSource`].
///
/// Every failure resolves to an indeterminate result; nothing is retried.
#[derive(Debug, Clone)]
pub struct BreachChecker<S = HttpRangeSource> {
    source: S,
    timeout: Duration,
}

impl BreachChecker<HttpRangeSource> {
    pub fn new(config: BreachConfig) -> Result<Self, BreachError> {
        let timeout = config.timeout;
        Ok(Self {
            source: HttpRangeSource::new(config)?,
            timeout,
        })
    }

    /// Builds a checker from `PWD_GUARD_PWNED_*` environment variables.
    pub fn from_env() -> Result<Self, BreachError> {
        Self::new(BreachConfig::from_env()?)
    }
}

impl<S: RangeSource> BreachChecker<S> {
    pub fn with_source(source: S, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Looks the password up and returns its breach count.
    ///
    /// Unlike [`check`](Self::check), failures are returned as errors.
    pub async fn lookup(&self, password: &SecretString) -> Result<u64, BreachError> {
        let (prefix, suffix) = split_hash(password);
        self.lookup_split(&prefix, &suffix).await
    }

    async fn lookup_split(
        &self,
        prefix: &HashPrefix,
        suffix: &HashSuffix,
    ) -> Result<u64, BreachError> {
        let body = tokio::time::timeout(self.timeout, self.source.fetch_range(prefix))
            .await
            .map_err(|_| BreachError::Timeout(self.timeout))??;
        match_range(&body, suffix)
    }

    /// Checks the password; `count` is `None` when the answer is unknown.
    pub async fn check(&self, password: &SecretString) -> BreachResult {
        let (prefix, suffix) = split_hash(password);

        match self.lookup_split(&prefix, &suffix).await {
            Ok(count) => {
                #[cfg(feature = "tracing")]
                tracing::debug!("breach lookup for prefix {}: count={}", prefix, count);
                BreachResult::found(count)
            }
            Err(_e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("breach lookup for prefix {} indeterminate: {}", prefix, _e);
                BreachResult::indeterminate()
            }
        }
    }

    /// Like [`check`](Self::check), but gives up as soon as `token` is cancelled.
    pub async fn check_cancellable(
        &self,
        password: &SecretString,
        token: CancellationToken,
    ) -> BreachResult {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                #[cfg(feature = "tracing")]
                tracing::warn!("{}", BreachError::Cancelled);
                BreachResult::indeterminate()
            }
            result = self.check(password) => result,
        }
    }
}

/// Checks the password against the public service with default settings.
pub async fn check_breach(password: &SecretString) -> BreachResult {
    match BreachChecker::new(BreachConfig::default()) {
        Ok(checker) => checker.check(password).await,
        Err(_e) => {
            #[cfg(feature = "tracing")]
            tracing::error!("breach checker initialization FAILED: {}", _e);
            BreachResult::indeterminate()
        }
    }
}
