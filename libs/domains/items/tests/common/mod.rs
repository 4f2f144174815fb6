//! In-memory `ItemRepository` for tests that exercise the full
//! handler → service → repository path without a database.

use async_trait::async_trait;
use domain_items::{CreateItem, Item, ItemDocument, ItemError, ItemRepository, ItemResult};
use mongodb::bson::oid::ObjectId;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    documents: Arc<Mutex<Vec<ItemDocument>>>,
    lookups: Arc<AtomicUsize>,
    unavailable: bool,
}

#[allow(dead_code)]
impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every operation fails as if the store were down
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Self::default()
        }
    }

    /// Number of `get_by_id` calls that reached the repository
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }

    fn check_available(&self) -> ItemResult<()> {
        if self.unavailable {
            return Err(ItemError::StoreUnavailable("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        self.check_available()?;

        let id = ObjectId::new();
        let mut document = ItemDocument::new(input);
        document.id = Some(id);

        self.documents.lock().unwrap().push(document.clone());
        Ok(document.into_item(id))
    }

    async fn get_by_id(&self, id: ObjectId) -> ItemResult<Option<Item>> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        self.check_available()?;

        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .find(|doc| doc.id == Some(id))
            .cloned()
            .map(|doc| doc.into_item(id)))
    }

    async fn list(&self) -> ItemResult<Vec<Item>> {
        self.check_available()?;

        let documents = self.documents.lock().unwrap();
        Ok(documents
            .iter()
            .cloned()
            .filter_map(|doc| Item::try_from(doc).ok())
            .collect())
    }
}
