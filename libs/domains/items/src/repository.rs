use async_trait::async_trait;
use mongodb::bson::oid::ObjectId;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item};

/// Data access for items.
///
/// Implementations report connection and query failures as
/// `ItemError::StoreUnavailable`; a missing record is `Ok(None)`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert one item and return it with its assigned id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>>;

    /// Every item, in store natural order
    async fn list(&self) -> ItemResult<Vec<Item>>;
}
