//! Items API routes
//!
//! Wires the items domain onto the shared MongoDB database.

use axum::Router;
use domain_items::{ItemService, MongoItemRepository, handlers};

use crate::state::AppState;

pub fn router(state: &AppState) -> Router {
    let repository = MongoItemRepository::new(state.db.clone());
    let service = ItemService::new(repository);

    handlers::router(service)
}
