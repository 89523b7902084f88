//! HTTP helpers for the JSON API with a consistent timeout and error handling.
//! Every response goes through [`check_status`] then [`parse_json`], so a
//! non-2xx status, a malformed body, and a transport failure all come back as
//! an [`AppError`]. Session tokens travel as the `access_token` query parameter
//! and are kept out of spans and logs.

use super::{config::AppConfig, errors::AppError};
use crate::APP_USER_AGENT;
use reqwest::{header::ACCEPT, Client, Response};
use secrecy::{ExposeSecret, SecretString};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Maximum number of error body characters kept in an `AppError`.
const MAX_ERROR_CHARS: usize = 200;
const ACCESS_TOKEN_PARAM: &str = "access_token";
const JSON: &str = "application/json";

/// JSON API client bound to one base URL.
#[derive(Clone, Debug)]
pub struct ApiClient {
    client: Client,
    base_url: Url,
}

impl ApiClient {
    /// Builds a client for `config.api_base_url`.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the base URL is not an absolute http(s)
    /// URL or the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self, AppError> {
        let base_url = parse_base_url(&config.api_base_url)?;
        let client = Client::builder()
            .user_agent(APP_USER_AGENT)
            .timeout(config.request_timeout)
            .build()
            .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))?;

        debug!(base_url = %base_url, "API client ready");

        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolves `path` against the base URL.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the result is not a valid URL.
    pub fn endpoint(&self, path: &str) -> Result<Url, AppError> {
        let url = build_url_with_base(self.base_url.as_str(), path);
        Url::parse(&url).map_err(|err| AppError::Config(format!("Invalid endpoint {path}: {err}")))
    }

    fn endpoint_with_token(&self, path: &str, token: &SecretString) -> Result<Url, AppError> {
        let mut url = self.endpoint(path)?;
        url.query_pairs_mut()
            .append_pair(ACCESS_TOKEN_PARAM, token.expose_secret());
        Ok(url)
    }

    /// Posts JSON and parses a JSON response.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let span = info_span!("api.request", http.method = "POST", path);
        let response = self
            .client
            .post(url)
            .header(ACCEPT, JSON)
            .json(body)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        parse_json(check_status(response).await?).await
    }

    /// Fetches JSON for the session identified by `token`.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures, non-2xx statuses, and
    /// undecodable bodies.
    pub async fn get_json_with_token<T: DeserializeOwned>(
        &self,
        path: &str,
        token: &SecretString,
    ) -> Result<T, AppError> {
        let url = self.endpoint_with_token(path, token)?;
        let span = info_span!("api.request", http.method = "GET", path);
        let response = self
            .client
            .get(url)
            .header(ACCEPT, JSON)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)?;

        parse_json(check_status(response).await?).await
    }

    /// Replaces a whole document and parses the response, if any.
    /// An empty body yields `None`.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures, non-2xx statuses, and
    /// undecodable non-empty bodies.
    pub async fn put_json_with_token<B, T>(
        &self,
        path: &str,
        token: &SecretString,
        body: &B,
    ) -> Result<Option<T>, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self.send_put(path, token, body).await?;
        parse_optional_json(check_status(response).await?).await
    }

    /// Puts JSON and ignores the response body.
    ///
    /// # Errors
    /// Returns an `AppError` for transport failures and non-2xx statuses.
    pub async fn put_json_with_token_empty<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &SecretString,
        body: &B,
    ) -> Result<(), AppError> {
        let response = self.send_put(path, token, body).await?;
        check_status(response).await.map(|_| ())
    }

    async fn send_put<B: Serialize + ?Sized>(
        &self,
        path: &str,
        token: &SecretString,
        body: &B,
    ) -> Result<Response, AppError> {
        let url = self.endpoint_with_token(path, token)?;
        let span = info_span!("api.request", http.method = "PUT", path);
        self.client
            .put(url)
            .header(ACCEPT, JSON)
            .json(body)
            .send()
            .instrument(span)
            .await
            .map_err(map_request_error)
    }
}

/// Passes 2xx responses through and turns anything else into
/// `AppError::Http` with a sanitized body.
///
/// # Errors
/// Returns `AppError::Http` for non-2xx statuses.
pub async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    debug!(status = status.as_u16(), "API returned an error status");
    Err(AppError::Http {
        status: status.as_u16(),
        message: sanitize_body(&body),
    })
}

/// Decodes a JSON body.
///
/// # Errors
/// Returns `AppError::Parse` if the body is not valid JSON for `T`.
pub async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    response
        .json::<T>()
        .await
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

async fn parse_optional_json<T: DeserializeOwned>(response: Response) -> Result<Option<T>, AppError> {
    let bytes = response
        .bytes()
        .await
        .map_err(|err| AppError::Network(format!("Failed to read response: {err}")))?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }

    serde_json::from_slice(&bytes)
        .map(Some)
        .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
}

fn parse_base_url(value: &str) -> Result<Url, AppError> {
    let url = Url::parse(value.trim())
        .map_err(|err| AppError::Config(format!("Invalid API base URL {value}: {err}")))?;

    match url.scheme() {
        "http" | "https" => {}
        scheme => {
            return Err(AppError::Config(format!(
                "Unsupported API URL scheme: {scheme}"
            )))
        }
    }

    if url.host().is_none() {
        return Err(AppError::Config(format!("API base URL has no host: {value}")));
    }

    Ok(url)
}

/// Builds a URL from an explicit base URL and the provided path.
fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

/// Trims and truncates HTTP error bodies.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
