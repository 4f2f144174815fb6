use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use axum_helpers::{
    ValidatedJson,
    errors::responses::{
        BadRequestIdentifierResponse, BadRequestValidationResponse, NotFoundResponse,
        StoreUnavailableResponse,
    },
};
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, ServiceStatus};
use crate::repository::ItemRepository;
use crate::service::ItemService;

/// OpenAPI documentation for Items API
#[derive(OpenApi)]
#[openapi(
    paths(health_check, list_items, create_item, get_item),
    components(
        schemas(Item, CreateItem, ServiceStatus),
        responses(
            BadRequestValidationResponse,
            BadRequestIdentifierResponse,
            NotFoundResponse,
            StoreUnavailableResponse
        )
    ),
    tags(
        (name = "Items", description = "Item endpoints (MongoDB)")
    )
)]
pub struct ApiDoc;

/// Router with `/`, `/items` and `/items/{id}`
pub fn router<R: ItemRepository + 'static>(service: ItemService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(health_check))
        .route("/items", get(list_items).post(create_item))
        .route("/items/{id}", get(get_item))
        .with_state(shared_service)
}

/// Service status
#[utoipa::path(
    get,
    path = "/",
    tag = "Items",
    responses(
        (status = 200, description = "Service is up", body = ServiceStatus)
    )
)]
async fn health_check<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> Json<ServiceStatus> {
    Json(service.health_check())
}

/// List all items
#[utoipa::path(
    get,
    path = "/items",
    tag = "Items",
    responses(
        (status = 200, description = "All items", body = Vec<Item>),
        (status = 500, response = StoreUnavailableResponse)
    )
)]
async fn list_items<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
) -> ItemResult<Json<Vec<Item>>> {
    let items = service.list_items().await?;
    Ok(Json(items))
}

/// Create a new item
#[utoipa::path(
    post,
    path = "/items",
    tag = "Items",
    request_body = CreateItem,
    responses(
        (status = 201, description = "Item created", body = Item),
        (status = 400, response = BadRequestValidationResponse),
        (status = 500, response = StoreUnavailableResponse)
    )
)]
async fn create_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    ValidatedJson(input): ValidatedJson<CreateItem>,
) -> ItemResult<impl IntoResponse> {
    let item = service.create_item(input).await?;
    Ok((StatusCode::CREATED, Json(item)))
}

/// Get an item by ID
#[utoipa::path(
    get,
    path = "/items/{id}",
    tag = "Items",
    params(
        ("id" = String, Path, description = "Item ID (24-character hex ObjectId)")
    ),
    responses(
        (status = 200, description = "Item found", body = Item),
        (status = 400, response = BadRequestIdentifierResponse),
        (status = 404, response = NotFoundResponse),
        (status = 500, response = StoreUnavailableResponse)
    )
)]
async fn get_item<R: ItemRepository>(
    State(service): State<Arc<ItemService<R>>>,
    Path(id): Path<String>,
) -> ItemResult<Json<Item>> {
    let item = service.get_item(&id).await?;
    Ok(Json(item))
}
