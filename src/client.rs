use std::fmt;
use std::time::Duration;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Method, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::ClientError;
use crate::config::{API_VERSION, ClientOptions};
use crate::envelope::{Envelope, encode_path_segment};
use crate::error::ApiErrorPayload;
use crate::models::{Collection, ItemsPage, RawItemsPage, Site};

const ACCEPT_VERSION: &str = "accept-version";

/// Blocking client for the Webflow CMS API.
///
/// Configuration is fixed at construction. The client holds no mutable state,
/// so one instance can be shared by reference across threads.
pub struct WebflowClient {
    token: String,
    base_url: Url,
    timeout: Duration,
    page_size: u32,
    http: reqwest::blocking::Client,
}

impl WebflowClient {
    /// Creates a client with default options.
    pub fn new(token: impl Into<String>) -> Result<Self, ClientError> {
        Self::with_options(token, ClientOptions::default())
    }

    /// Creates a client, applying `options` over the defaults.
    ///
    /// Fails with [`ClientError::MissingToken`] when `token` is empty and with
    /// [`ClientError::InvalidBaseUrl`] when the base URL does not parse.
    pub fn with_options(
        token: impl Into<String>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let token = token.into();
        if token.is_empty() {
            return Err(ClientError::MissingToken);
        }

        let options = options.resolve();
        let parsed = Url::parse(&options.base_url)
            .map_err(|_| ClientError::InvalidBaseUrl(options.base_url.clone()))?;
        let http = reqwest::blocking::Client::builder()
            .timeout(options.timeout)
            .build()?;

        Ok(Self {
            token,
            base_url: ensure_trailing_slash(parsed),
            timeout: options.timeout,
            page_size: options.page_size,
            http,
        })
    }

    /// Base URL every endpoint path is resolved against.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Timeout applied to each request.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Number of items requested per page by [`Self::paginate_items`].
    pub fn page_size(&self) -> u32 {
        self.page_size
    }

    /// Lists the sites the token has access to.
    pub fn sites(&self) -> Result<Vec<Site>, ClientError> {
        self.request(&Envelope::get("/sites"))
    }

    /// Fetches a single site.
    pub fn site(&self, site_id: &str) -> Result<Site, ClientError> {
        self.request(&Envelope::get(format!(
            "/sites/{}",
            encode_path_segment(site_id)?
        )))
    }

    /// Lists the collections of a site, without field schemas.
    pub fn collections(&self, site_id: &str) -> Result<Vec<Collection>, ClientError> {
        self.request(&Envelope::get(format!(
            "/sites/{}/collections",
            encode_path_segment(site_id)?
        )))
    }

    /// Fetches a single collection including its field schema.
    pub fn collection(&self, collection_id: &str) -> Result<Collection, ClientError> {
        self.request(&Envelope::get(format!(
            "/collections/{}",
            encode_path_segment(collection_id)?
        )))
    }

    /// Fetches one window of collection items decoded into `T`.
    ///
    /// The page counters are decoded first; the items are then decoded into
    /// `T`, failing with [`ClientError::Decode`] when they do not match.
    pub fn items<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        limit: u32,
        offset: u64,
    ) -> Result<ItemsPage<T>, ClientError> {
        let raw: RawItemsPage = self.request(&Envelope::get(format!(
            "/collections/{}/items?limit={limit}&offset={offset}",
            encode_path_segment(collection_id)?
        )))?;
        raw.decode().map_err(ClientError::Decode)
    }

    /// Fetches the zero-based `page` of a collection using the configured page size.
    ///
    /// Pages past the end are not rejected; the API answers them with an
    /// empty page.
    pub fn paginate_items<T: DeserializeOwned>(
        &self,
        collection_id: &str,
        page: u32,
    ) -> Result<ItemsPage<T>, ClientError> {
        let limit = self.page_size;
        self.items(collection_id, limit, page_offset(page, limit))
    }

    /// Sends one envelope and decodes the success body into `T`.
    ///
    /// Non-2xx responses are decoded as the API error shape and returned as
    /// [`ClientError::Api`].
    pub fn request<B, T>(&self, envelope: &Envelope<B>) -> Result<T, ClientError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let body = envelope
            .encode_body()
            .map_err(ClientError::Serialization)?;
        let url = self.build_url(envelope.path())?;
        debug!(method = envelope.method().as_str(), %url, "sending request");

        let mut request = self
            .http
            .request(Method::from(envelope.method()), url)
            .bearer_auth(&self.token)
            .header(ACCEPT_VERSION, API_VERSION)
            .header(ACCEPT, "application/json");

        if let Some(bytes) = body {
            request = request.header(CONTENT_TYPE, "application/json").body(bytes);
        }

        let response = request.send()?;
        let status = response.status();
        let payload = response.bytes()?;

        if status.is_success() {
            return serde_json::from_slice(&payload).map_err(ClientError::Decode);
        }

        let error: ApiErrorPayload =
            serde_json::from_slice(&payload).map_err(ClientError::Decode)?;
        debug!(%status, code = error.code, name = %error.name, "api returned an error");
        Err(error.into_error(status))
    }

    /// Resolves `path` under the base URL.
    ///
    /// Absolute URLs pointing elsewhere are rejected so the token never leaves
    /// the configured origin.
    fn build_url(&self, path: &str) -> Result<Url, ClientError> {
        let relative = path.trim_start_matches('/');
        let url = self
            .base_url
            .join(relative)
            .map_err(|_| ClientError::InvalidPath(path.to_owned()))?;
        if url.origin() != self.base_url.origin() {
            return Err(ClientError::InvalidPath(path.to_owned()));
        }
        Ok(url)
    }
}

impl fmt::Debug for WebflowClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebflowClient")
            .field("token", &"<redacted>")
            .field("base_url", &self.base_url.as_str())
            .field("timeout", &self.timeout)
            .field("page_size", &self.page_size)
            .finish_non_exhaustive()
    }
}

fn page_offset(page: u32, limit: u32) -> u64 {
    u64::from(page) * u64::from(limit)
}

fn ensure_trailing_slash(mut url: Url) -> Url {
    if !url.path().ends_with('/') {
        let mut path = url.path().to_owned();
        path.push('/');
        url.set_path(&path);
    }
    url
}
