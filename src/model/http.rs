/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/

use crate::application::config::{Config, RateLimiterConfig};
use crate::application::rate_limiter::RateLimiter;
use crate::constants::{
    API_PREFIX, DEFAULT_TIMEOUT_SECONDS, FORM_SUCCESS_MAX_STATUS, JSON_CONTENT_TYPE, USER_AGENT,
};
use crate::error::AppError;
use crate::model::form::Form;
use crate::model::responses::{Group, Response, Single, parse_multiple, parse_single};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Client, Method, StatusCode};
use serde::Serialize;
use std::time::Duration;
use tracing::instrument::WithSubscriber;
use tracing::{Dispatch, debug, error};

/// Connection to a BookStack instance
///
/// Holds the base URL, the API token, the rate limiter, the logger and its own
/// HTTP client. Cloning is cheap; clones share the rate limiter and the
/// connection pool, so a single `Bookstack` can serve concurrent callers.
#[derive(Clone)]
pub struct Bookstack {
    url: String,
    token_id: String,
    token_secret: String,
    limiter: RateLimiter,
    logger: Dispatch,
    insecure: bool,
    http_client: Client,
}

/// Builder collecting the client options
///
/// Nothing is validated here: a wrong URL or token only fails when a request
/// is sent.
#[derive(Debug, Clone)]
pub struct BookstackBuilder {
    url: String,
    token_id: String,
    token_secret: String,
    rate_limit: RateLimiterConfig,
    logger: Dispatch,
    insecure: bool,
    timeout: Duration,
    user_agent: String,
}

impl Default for BookstackBuilder {
    fn default() -> Self {
        Self {
            url: String::new(),
            token_id: String::new(),
            token_secret: String::new(),
            rate_limit: RateLimiterConfig::default(),
            logger: Dispatch::none(),
            insecure: false,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

impl BookstackBuilder {
    /// Sets the URL of the site to control
    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the API token
    #[must_use]
    pub fn token(mut self, id: impl Into<String>, secret: impl Into<String>) -> Self {
        self.token_id = id.into();
        self.token_secret = secret.into();
        self
    }

    /// Sets where the client's log events go
    ///
    /// Defaults to [`Dispatch::none`], which discards them.
    #[must_use]
    pub fn logger(mut self, logger: impl Into<Dispatch>) -> Self {
        self.logger = logger.into();
        self
    }

    /// Sets the number of requests admitted per second
    #[must_use]
    pub fn rate_limit(mut self, limit: u32) -> Self {
        self.rate_limit = RateLimiterConfig::per_second(limit);
        self
    }

    /// Sets the full rate limiter configuration
    #[must_use]
    pub fn rate_limiter(mut self, config: RateLimiterConfig) -> Self {
        self.rate_limit = config;
        self
    }

    /// Skips TLS certificate verification for this client
    #[must_use]
    pub fn insecure(mut self, insecure: bool) -> Self {
        self.insecure = insecure;
        self
    }

    /// Sets the timeout of a single round trip
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the user agent
    #[must_use]
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Builds the client
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] when the HTTP transport cannot be initialised.
    pub fn build(self) -> Result<Bookstack, AppError> {
        let http_client = Client::builder()
            .user_agent(self.user_agent)
            .timeout(self.timeout)
            .danger_accept_invalid_certs(self.insecure)
            .build()?;

        Ok(Bookstack {
            url: self.url,
            token_id: self.token_id,
            token_secret: self.token_secret,
            limiter: RateLimiter::new(&self.rate_limit),
            logger: self.logger,
            insecure: self.insecure,
            http_client,
        })
    }
}

impl Bookstack {
    /// Starts building a client
    #[must_use]
    pub fn builder() -> BookstackBuilder {
        BookstackBuilder::default()
    }

    /// Builds a client from a [`Config`]
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Http`] when the HTTP transport cannot be initialised.
    pub fn with_config(config: &Config) -> Result<Self, AppError> {
        Self::builder()
            .url(config.rest_api.base_url.as_str())
            .token(
                config.credentials.token_id.as_str(),
                config.credentials.token_secret.as_str(),
            )
            .rate_limiter(config.rate_limiter.clone())
            .insecure(config.rest_api.insecure)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()
    }

    /// Base URL of the site
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Whether TLS certificate verification is skipped
    #[must_use]
    pub fn is_insecure(&self) -> bool {
        self.insecure
    }

    /// Rate limiter shared by every request of this client
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    /// Dispatch receiving this client's log events
    #[must_use]
    pub fn logger(&self) -> &Dispatch {
        &self.logger
    }

    /// Value of the `Authorization` header
    #[must_use]
    pub fn authorization(&self) -> String {
        format!("Token {}:{}", self.token_id, self.token_secret)
    }

    /// Absolute URL of an API path
    ///
    /// ```
    /// use bookstack_client::model::http::Bookstack;
    ///
    /// let bookstack = Bookstack::builder().url("https://wiki.example.com/").build().unwrap();
    /// assert_eq!(bookstack.endpoint("/books/1"), "https://wiki.example.com/api/books/1");
    /// ```
    #[must_use]
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.url.trim_end_matches('/'),
            API_PREFIX,
            path.trim_start_matches('/')
        )
    }

    /// Sends a request with an optional JSON body
    ///
    /// Waits for a rate-limit token first. Returns the raw response body on
    /// `200 OK` and `204 No Content`; any other status is decoded as an error
    /// envelope.
    ///
    /// # Errors
    ///
    /// * [`AppError::Http`] on transport failure
    /// * [`AppError::Api`] when the API reports an error
    /// * [`AppError::Json`] when the error envelope is malformed
    /// * [`AppError::Unexpected`] when the envelope carries no error
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        data: Option<&[u8]>,
    ) -> Result<Vec<u8>, AppError> {
        self.send_json(method, path, data)
            .with_subscriber(self.logger.clone())
            .await
    }

    /// Serializes `body` to JSON and sends it with [`Bookstack::request`]
    ///
    /// # Errors
    ///
    /// [`AppError::Json`] when `body` cannot be serialized, otherwise as
    /// [`Bookstack::request`].
    pub async fn request_json<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
    ) -> Result<Vec<u8>, AppError> {
        let data = serde_json::to_vec(body)?;
        self.request(method, path, Some(&data)).await
    }

    /// Sends a request whose body is produced by a [`Form`] encoder
    ///
    /// Same as [`Bookstack::request`] except that the `Content-Type` comes from
    /// the encoder and every status from 200 to 226 counts as success.
    ///
    /// # Errors
    ///
    /// As [`Bookstack::request`], plus whatever the encoder returns.
    pub async fn form<F: Form + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        data: &F,
    ) -> Result<Vec<u8>, AppError> {
        self.send_form(method, path, data)
            .with_subscriber(self.logger.clone())
            .await
    }

    /// GETs a path and decodes a bare entity
    pub async fn get_single<S: Single>(&self, path: &str) -> Result<S, AppError> {
        let raw = self.request(Method::GET, path, None).await?;
        parse_single(&raw)
    }

    /// GETs a path and decodes the list in the envelope
    pub async fn get_multiple<G: Group>(&self, path: &str) -> Result<G, AppError> {
        let raw = self.request(Method::GET, path, None).await?;
        parse_multiple(&raw)
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        data: Option<&[u8]>,
    ) -> Result<Vec<u8>, AppError> {
        self.limiter.wait().await;

        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, self.authorization());

        if let Some(body) = data.filter(|body| !body.is_empty()) {
            request = request
                .header(CONTENT_TYPE, JSON_CONTENT_TYPE)
                .body(body.to_vec());
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.bytes().await?.to_vec();
        debug!("Response status: {} ({} bytes)", status, raw.len());

        if status == StatusCode::OK || status == StatusCode::NO_CONTENT {
            return Ok(raw);
        }

        Err(failure(status, &raw))
    }

    async fn send_form<F: Form + Sync + ?Sized>(
        &self,
        method: Method,
        path: &str,
        data: &F,
    ) -> Result<Vec<u8>, AppError> {
        self.limiter.wait().await;

        let url = self.endpoint(path);
        let form = data.form()?;
        debug!("{} {} ({})", method, url, form.content_type);

        let response = self
            .http_client
            .request(method, &url)
            .header(AUTHORIZATION, self.authorization())
            .header(CONTENT_TYPE, form.content_type)
            .body(form.body)
            .send()
            .await?;
        let status = response.status();
        let raw = response.bytes().await?.to_vec();
        debug!("Response status: {} ({} bytes)", status, raw.len());

        if (StatusCode::OK.as_u16()..=FORM_SUCCESS_MAX_STATUS).contains(&status.as_u16()) {
            return Ok(raw);
        }

        Err(failure(status, &raw))
    }
}

impl std::fmt::Debug for Bookstack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Bookstack")
            .field("url", &self.url)
            .field("token_id", &self.token_id)
            .field("token_secret", &"<redacted>")
            .field("limiter", &self.limiter)
            .field("insecure", &self.insecure)
            .finish_non_exhaustive()
    }
}

/// Turns a failed response into the error it describes
fn failure(status: StatusCode, raw: &[u8]) -> AppError {
    match Response::from_slice(raw) {
        Ok(envelope) => match envelope.error() {
            Some(err) => {
                error!("Request failed with status {}: {}", status, err);
                err
            }
            None => {
                error!("Request failed with status {} and no error object", status);
                AppError::Unexpected(status)
            }
        },
        Err(err) => {
            error!("Request failed with status {}, undecodable body: {}", status, err);
            err
        }
    }
}
