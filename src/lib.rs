//! Blocking client library for the Webflow CMS REST API.
//!
//! Public API layers:
//! - [`WebflowClient`]: typed accessors for sites, collections and items.
//! - [`Envelope`]: one outbound call, routed through [`WebflowClient::request`].
//! - [`ClientOptions`]: optional settings applied over documented defaults.
//! - [`ClientError`]: unified error type used by all operations.
//!
//! ```no_run
//! use webflow_client::{ClientOptions, WebflowClient};
//!
//! let client = WebflowClient::with_options("token", ClientOptions::default().with_page_size(50))?;
//! for site in client.sites()? {
//!     for collection in client.collections(&site.id)? {
//!         let page = client.paginate_items::<serde_json::Value>(&collection.id, 0)?;
//!         println!("{}: {} of {} items", collection.name, page.count, page.total);
//!     }
//! }
//! # Ok::<(), webflow_client::ClientError>(())
//! ```

mod client;
mod config;
mod envelope;
mod error;
mod models;

/// Blocking Webflow API client.
pub use client::WebflowClient;
pub use config::{API_VERSION, ClientOptions, DEFAULT_BASE_URL, DEFAULT_PAGE_SIZE, DEFAULT_TIMEOUT};
pub use envelope::{Envelope, HttpMethod};
/// Error type returned by all client operations.
pub use error::ClientError;
pub use models::{Collection, CollectionField, ItemsPage, Site};
