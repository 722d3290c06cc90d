//! HTTP client for the Open Data Platform of Namur.

use std::time::Duration;

use reqwest::{
    header::{ACCEPT, CONTENT_TYPE, USER_AGENT},
    Method,
};
use tokio::sync::OnceCell;
use url::Url;

use crate::{
    query::{ParkingQuery, Query},
    session::{Session, SessionHandle},
    types::{ParkingSpot, ParkingType, SearchResponse},
    user_agent::get_user_agent,
    Error,
};

/// Base URL of the records API, version 1.0.
pub const BASE_API_URL: &str = "https://data.namur.be/api/records/1.0/";

/// Default time allowed for a single request.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP client for the Open Data Platform of Namur.
///
/// The client either uses a [`Session`] supplied by the caller or lazily
/// creates its own on first request. An owned session is closed by
/// [`Client::close`], which also runs when the client is dropped; a borrowed
/// one is left untouched.
pub struct Client {
    /// Base URL for the API. Defaults to [`BASE_API_URL`].
    base_api_url: String,
    request_timeout: Duration,
    session: OnceCell<SessionHandle>,
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl Client {
    /// Creates a new client pointing at the production Open Data Platform.
    pub fn new() -> Self {
        Self {
            base_api_url: BASE_API_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            session: OnceCell::new(),
        }
    }

    /// Creates a new client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Self {
        let mut base_api_url = base_url.to_string();
        if !base_api_url.ends_with('/') {
            base_api_url.push('/');
        }
        Self {
            base_api_url,
            request_timeout: DEFAULT_TIMEOUT,
            session: OnceCell::new(),
        }
    }

    /// Uses a caller-owned session. The client never closes it.
    pub fn with_session(mut self, session: Session) -> Self {
        self.session = OnceCell::new_with(Some(SessionHandle::Borrowed(session)));
        self
    }

    /// Sets the timeout applied to each request.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    /// The session in use, if one was supplied or already created.
    pub fn session(&self) -> Option<&Session> {
        self.session.get().map(SessionHandle::session)
    }

    /// Closes the session if the client created it. Safe to call repeatedly.
    ///
    /// This only marks the session closed so that no further request goes
    /// out. `reqwest` has no explicit shutdown: the connection pool and its
    /// idle sockets are freed when the last clone of the session is dropped,
    /// i.e. when the `Client` itself is dropped.
    pub fn close(&self) {
        if let Some(handle) = self.session.get() {
            handle.release();
        }
    }

    async fn session_handle(&self) -> Result<&SessionHandle, Error> {
        self.session
            .get_or_try_init(|| async {
                tracing::debug!("Creating owned HTTP session");
                Session::new().map(SessionHandle::Owned)
            })
            .await
    }

    fn get_url<Q: Query>(&self, uri: &str, query: Option<&Q>) -> Result<Url, Error> {
        let url = Url::parse(&self.base_api_url)
            .and_then(|base| base.join(uri))
            .map_err(|e| {
                tracing::error!("Invalid URL constructed: {}", e);
                Error::Generic {
                    message: format!("Invalid request URL: {}", e),
                    content_type: None,
                    body: None,
                }
            })?;
        Ok(match query {
            Some(query) => query.add_to_url(&url),
            None => url,
        })
    }

    /// Sends a request to `uri` (relative to the API base) and returns the JSON body.
    ///
    /// Fails with [`Error::Connection`] on timeout, transport failure or a
    /// non-success status, and with [`Error::Generic`] when the response is
    /// not `application/json`.
    pub async fn request<Q: Query>(
        &self,
        uri: &str,
        method: Method,
        query: Option<&Q>,
    ) -> Result<serde_json::Value, Error> {
        let url = self.get_url(uri, query)?;
        let http = self.session_handle().await?.session().http()?;

        tracing::debug!("{} {}", method, url);
        let resp = http
            .request(method, url)
            .header(ACCEPT, "application/json, text/plain")
            .header(USER_AGENT, get_user_agent())
            .timeout(self.request_timeout)
            .send()
            .await
            .map_err(transport_error)?;

        let status = resp.status();
        let content_type = resp
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string();
        let body = resp.text().await.map_err(transport_error)?;

        if !status.is_success() {
            let snippet = truncate_body(&body);
            tracing::error!("Request failed with status {}: {}", status, snippet);
            return Err(Error::Connection {
                message: format!(
                    "Error occurred while communicating with the Open Data Platform API (HTTP {})",
                    status.as_u16()
                ),
                status: Some(status.as_u16()),
            });
        }

        if !content_type.contains("application/json") {
            tracing::error!("Unexpected content type: {:?}", content_type);
            return Err(Error::Generic {
                message: "Unexpected content type response from the Open Data Platform API"
                    .to_string(),
                content_type: Some(content_type),
                body: Some(body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            let snippet = truncate_body(&body);
            tracing::error!("Failed to parse response: {} | body: {}", e, snippet);
            Error::Generic {
                message: format!("Failed to parse response: {}", e),
                content_type: Some(content_type),
                body: Some(body.clone()),
            }
        })
    }

    /// Fetches parking spots of one type, up to `limit` rows.
    ///
    /// Fails with [`Error::NoResults`] when the dataset has no matching spot.
    pub async fn parking_spaces(
        &self,
        limit: u32,
        parking_type: ParkingType,
    ) -> Result<Vec<ParkingSpot>, Error> {
        let query = ParkingQuery::default()
            .with_limit(limit)
            .with_parking_type(parking_type);
        self.search(&query).await
    }

    /// Like [`Client::parking_spaces`], with the type given as its numeric code.
    ///
    /// An unknown code fails before any request is sent.
    pub async fn parking_spaces_by_code(
        &self,
        limit: u32,
        code: i64,
    ) -> Result<Vec<ParkingSpot>, Error> {
        let parking_type = ParkingType::from_code(code)?;
        self.parking_spaces(limit, parking_type).await
    }

    /// Runs a prepared parking query. Spots keep the order the server returned.
    pub async fn search(&self, query: &ParkingQuery) -> Result<Vec<ParkingSpot>, Error> {
        let body = self.request("search/", Method::GET, Some(query)).await?;
        let response: SearchResponse = serde_json::from_value(body).map_err(|e| {
            tracing::error!("Unexpected search response shape: {}", e);
            Error::MalformedRecord(e.to_string())
        })?;

        let spots = response
            .records
            .into_iter()
            .map(ParkingSpot::from_record)
            .collect::<Result<Vec<_>, _>>()?;

        if spots.is_empty() {
            tracing::debug!("No {} parking spots found", query.parking_type);
            return Err(Error::NoResults);
        }
        Ok(spots)
    }
}

impl Drop for Client {
    fn drop(&mut self) {
        self.close();
    }
}

fn transport_error(e: reqwest::Error) -> Error {
    if e.is_timeout() {
        tracing::error!("Request timed out: {}", e);
        Error::connection("Timeout occurred while connecting to the Open Data Platform API.")
    } else {
        tracing::error!("Failed to get resource: {}", e);
        Error::connection("Error occurred while communicating with the Open Data Platform API.")
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
