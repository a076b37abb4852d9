//! HTTP client for the booklet API
//!
//! Every call is a JSON POST. After each call, successful or not, the
//! client sleeps for its configured `request_delay` before returning. The
//! pause belongs to the calling task only; there is no global throttle.

use std::time::Duration;

use log::debug;
use reqwest::Client;
use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, CONTENT_TYPE, COOKIE, ORIGIN, REFERER};
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::errors::ApiError;
use super::types::{
    BookId, BookInfoData, BookInfoRequest, BookInfoResult, Envelope, SectionData, SectionRequest,
    ShelfEntry,
};
use crate::config::ExportConfig;
use crate::utils::constants::{
    API_REQUEST_TIMEOUT, BOOK_INFO_PATH, BOOK_LIST_PATH, BOOK_LIST_QUERY, CHROME_USER_AGENT,
    SECTION_PATH, WEB_ORIGIN,
};

/// Authenticated client for book discovery, metadata and section bodies
#[derive(Debug, Clone)]
pub struct BookletClient {
    http: Client,
    base_url: String,
    /// `sessionid=<sid>; <raw cookie>`
    auth_cookie: String,
    /// Raw cookie string, used verbatim for discovery
    raw_cookie: String,
    request_delay: Duration,
}

impl BookletClient {
    /// Create a client against `base_url` (no trailing slash needed)
    pub fn new(
        base_url: impl Into<String>,
        session_id: &str,
        raw_cookie: impl Into<String>,
        request_delay: Duration,
    ) -> Result<Self, ApiError> {
        let http = Client::builder()
            .user_agent(CHROME_USER_AGENT)
            .timeout(API_REQUEST_TIMEOUT)
            .build()
            .map_err(ApiError::Client)?;

        let raw_cookie = raw_cookie.into();
        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            auth_cookie: format!("sessionid={session_id}; {raw_cookie}"),
            raw_cookie,
            request_delay,
        })
    }

    /// Create a client from the run configuration
    pub fn from_config(config: &ExportConfig) -> Result<Self, ApiError> {
        Self::new(
            config.api_base_url(),
            config.session_id(),
            config.cookie(),
            config.request_delay(),
        )
    }

    /// Shared HTTP connection pool, reused for asset downloads
    #[must_use]
    pub fn http(&self) -> &Client {
        &self.http
    }

    /// Pause paid by the calling task after every API call
    #[must_use]
    pub fn request_delay(&self) -> Duration {
        self.request_delay
    }

    /// List every book on the session's shelf
    pub async fn list_books(&self) -> Result<Vec<BookId>, ApiError> {
        let result = self.list_books_once().await;
        self.pause().await;
        result
    }

    async fn list_books_once(&self) -> Result<Vec<BookId>, ApiError> {
        let request = self
            .http
            .post(self.url(BOOK_LIST_PATH))
            .query(BOOK_LIST_QUERY)
            .header(ACCEPT, "*/*")
            .header(ACCEPT_LANGUAGE, "zh-CN,zh;q=0.9")
            .header(CONTENT_TYPE, "application/json")
            .header(COOKIE, &self.raw_cookie)
            .header(ORIGIN, WEB_ORIGIN)
            .header(REFERER, format!("{WEB_ORIGIN}/"))
            .json(&serde_json::json!({}));

        let envelope: Envelope<Vec<ShelfEntry>> = send_json(request, BOOK_LIST_PATH).await?;
        let entries = envelope.data.ok_or(ApiError::MissingField {
            endpoint: BOOK_LIST_PATH,
            field: "data",
        })?;

        Ok(entries.into_iter().map(|entry| entry.booklet_id).collect())
    }

    /// Fetch a book's title and ordered section list.
    ///
    /// A 2xx response without `data` means the book is not published yet;
    /// that is reported as [`BookInfoResult::NotYetAvailable`], not an error.
    pub async fn get_book_info(&self, id: &BookId) -> Result<BookInfoResult, ApiError> {
        let envelope: Envelope<BookInfoData> = self
            .post(BOOK_INFO_PATH, &BookInfoRequest { booklet_id: id.as_str() })
            .await?;

        Ok(match envelope.data {
            Some(data) => BookInfoResult::Available(data.into()),
            None => BookInfoResult::NotYetAvailable {
                reason: envelope.err_msg,
            },
        })
    }

    /// Fetch the Markdown body of one section
    pub async fn get_section_body(&self, section_id: &str) -> Result<String, ApiError> {
        let envelope: Envelope<SectionData> = self
            .post(SECTION_PATH, &SectionRequest { section_id })
            .await?;

        envelope
            .data
            .ok_or(ApiError::MissingField {
                endpoint: SECTION_PATH,
                field: "data",
            })?
            .section
            .markdown_show
            .ok_or(ApiError::MissingField {
                endpoint: SECTION_PATH,
                field: "data.section.markdown_show",
            })
    }

    async fn post<B, T>(&self, endpoint: &'static str, body: &B) -> Result<Envelope<T>, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self
            .http
            .post(self.url(endpoint))
            .header(COOKIE, &self.auth_cookie)
            .json(body);

        let result = send_json(request, endpoint).await;
        self.pause().await;
        result
    }

    async fn pause(&self) {
        if !self.request_delay.is_zero() {
            tokio::time::sleep(self.request_delay).await;
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    endpoint: &'static str,
) -> Result<T, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|source| ApiError::Request { endpoint, source })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ApiError::Status { endpoint, status });
    }

    let body = response
        .bytes()
        .await
        .map_err(|source| ApiError::Request { endpoint, source })?;

    debug!("{endpoint} answered {} bytes", body.len());

    serde_json::from_slice(&body).map_err(|source| ApiError::Decode { endpoint, source })
}
