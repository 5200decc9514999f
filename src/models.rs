//! Typed shapes returned by the CMS endpoints.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::value::RawValue;

/// A Webflow site.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Site {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub short_name: String,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub last_published: Option<String>,
    #[serde(default)]
    pub preview_url: Option<String>,
    #[serde(default)]
    pub timezone: Option<String>,
}

/// A CMS collection belonging to a site.
///
/// `fields` is only filled by [`crate::WebflowClient::collection`]; the
/// site-level listing omits the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Collection {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub slug: String,
    #[serde(default)]
    pub singular_name: Option<String>,
    #[serde(default)]
    pub created_on: Option<String>,
    #[serde(default)]
    pub last_updated: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fields: Vec<CollectionField>,
}

/// One field of a collection schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionField {
    pub id: String,
    pub slug: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub required: bool,
    #[serde(default)]
    pub editable: Option<bool>,
}

/// Page envelope as sent on the wire; `items` stays undecoded.
#[derive(Debug, Deserialize)]
pub(crate) struct RawItemsPage {
    pub items: Box<RawValue>,
    pub offset: u64,
    pub count: u64,
    pub total: u64,
}

impl RawItemsPage {
    /// Second decode stage: turn the raw items into the caller's item type.
    pub(crate) fn decode<T: DeserializeOwned>(self) -> Result<ItemsPage<T>, serde_json::Error> {
        let items = serde_json::from_str(self.items.get())?;
        Ok(ItemsPage {
            items,
            offset: self.offset,
            count: self.count,
            total: self.total,
        })
    }
}

/// One page of collection items decoded into `T`.
///
/// Item schemas differ per collection, so `T` is chosen by the caller
/// (a `serde_json::Value` works for ad-hoc access).
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ItemsPage<T> {
    pub items: Vec<T>,
    pub offset: u64,
    pub count: u64,
    pub total: u64,
}

impl<T> ItemsPage<T> {
    /// Whether items exist past this page, according to the server counters.
    pub fn has_next_page(&self) -> bool {
        has_next_page(self.offset, self.count, self.total)
    }
}

pub(crate) fn has_next_page(offset: u64, count: u64, total: u64) -> bool {
    offset.saturating_add(count) < total
}
