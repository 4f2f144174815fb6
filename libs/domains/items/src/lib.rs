//! Items Domain
//!
//! Create, list and fetch items stored in a MongoDB collection.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Validation of names and identifiers
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + MongoDB implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Wire types, stored documents
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_items::{handlers, mongodb::MongoItemRepository, service::ItemService};
//! use mongodb::Client;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::with_uri_str("mongodb://localhost:27017").await?;
//! let repository = MongoItemRepository::new(client.database("items_db"));
//! let router = handlers::router(ItemService::new(repository));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod handlers;
pub mod models;
pub mod mongodb;
pub mod repository;
pub mod service;

pub use error::{ItemError, ItemResult};
pub use handlers::ApiDoc;
pub use models::{CreateItem, Item, ItemDocument, ServiceStatus};
pub use mongodb::MongoItemRepository;
pub use repository::ItemRepository;
pub use service::ItemService;
