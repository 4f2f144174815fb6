//! MongoDB implementation of ItemRepository

use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::{Collection, Database, bson::doc, bson::oid::ObjectId};
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemDocument};
use crate::repository::ItemRepository;

/// Default collection name
pub const COLLECTION: &str = "items";

/// MongoDB implementation of the ItemRepository
#[derive(Clone)]
pub struct MongoItemRepository {
    collection: Collection<ItemDocument>,
}

impl MongoItemRepository {
    /// ```ignore
    /// let config = database::mongodb::MongoConfig::new("mongodb://localhost:27017");
    /// let client = database::mongodb::connect_from_config(&config).await?;
    /// let repo = MongoItemRepository::new(client.database("items_db"));
    /// ```
    pub fn new(db: Database) -> Self {
        Self {
            collection: db.collection::<ItemDocument>(COLLECTION),
        }
    }
}

fn into_item(document: ItemDocument) -> ItemResult<Item> {
    Item::try_from(document)
        .map_err(|_| ItemError::StoreUnavailable("stored item is missing its _id".to_string()))
}

#[async_trait]
impl ItemRepository for MongoItemRepository {
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let document = ItemDocument::new(input);

        let result = self.collection.insert_one(&document).await?;
        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            ItemError::StoreUnavailable(format!(
                "unexpected inserted id: {}",
                result.inserted_id
            ))
        })?;

        tracing::info!(item_id = %id, "Item created successfully");
        Ok(document.into_item(id))
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        self.collection
            .find_one(doc! { "_id": id })
            .await?
            .map(into_item)
            .transpose()
    }

    #[instrument(skip(self))]
    async fn list(&self) -> ItemResult<Vec<Item>> {
        let cursor = self.collection.find(doc! {}).await?;
        let documents: Vec<ItemDocument> = cursor.try_collect().await?;

        tracing::debug!(count = documents.len(), "Listed items");
        documents.into_iter().map(into_item).collect()
    }
}
