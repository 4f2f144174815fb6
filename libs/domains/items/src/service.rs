//! Item Service - Business logic layer

use mongodb::bson::oid::ObjectId;
use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ServiceStatus};
use crate::repository::ItemRepository;

/// Item service providing business logic operations.
///
/// Input is validated here before the repository is touched, so malformed
/// names or identifiers never cost a round-trip to the store.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Fixed liveness token. Never touches the store.
    pub fn health_check(&self) -> ServiceStatus {
        ServiceStatus::ok()
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self) -> ItemResult<Vec<Item>> {
        self.repository.list().await
    }

    /// Look up an item by its hex identifier.
    ///
    /// The identifier is parsed before the store is queried; anything that
    /// is not a 24-character hex ObjectId is `InvalidIdentifier`.
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: &str) -> ItemResult<Item> {
        let object_id = parse_id(id)?;

        self.repository
            .get_by_id(object_id)
            .await?
            .ok_or_else(|| ItemError::NotFound(id.to_string()))
    }
}

/// Parse a 24-character hex ObjectId
pub fn parse_id(id: &str) -> ItemResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| ItemError::InvalidIdentifier(id.to_string()))
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
