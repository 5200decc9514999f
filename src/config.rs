use std::time::Duration;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.webflow.com";
/// Value sent in the `Accept-Version` header.
pub const API_VERSION: &str = "1.0.0";
/// Items requested per page by [`crate::WebflowClient::paginate_items`].
pub const DEFAULT_PAGE_SIZE: u32 = 20;
/// Per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Optional settings applied on top of the defaults when building a client.
///
/// Every field left as `None` keeps its default:
///
/// | field       | default                    |
/// |-------------|----------------------------|
/// | `base_url`  | [`DEFAULT_BASE_URL`]       |
/// | `timeout`   | [`DEFAULT_TIMEOUT`] (10 s) |
/// | `page_size` | [`DEFAULT_PAGE_SIZE`] (20) |
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    /// API host, for example a local mock or a proxy.
    pub base_url: Option<String>,
    /// Upper bound on one request, connection through body read.
    pub timeout: Option<Duration>,
    /// Items per page used by pagination.
    pub page_size: Option<u32>,
}

impl ClientOptions {
    /// Sets [`Self::base_url`].
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets [`Self::timeout`].
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets [`Self::page_size`].
    #[must_use]
    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub(crate) fn resolve(self) -> ResolvedOptions {
        ResolvedOptions {
            base_url: self.base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_owned()),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            page_size: self.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
        }
    }
}

#[derive(Debug)]
pub(crate) struct ResolvedOptions {
    pub base_url: String,
    pub timeout: Duration,
    pub page_size: u32,
}
