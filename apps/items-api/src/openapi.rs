//! OpenAPI documentation configuration

use utoipa::OpenApi;

use crate::api::health::ReadyResponse;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Items API",
        version = "0.1.0",
        description = "Create, list and fetch items stored in MongoDB",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(crate::api::health::readiness_check),
    components(schemas(ReadyResponse)),
    tags(
        (name = "Health", description = "Liveness and readiness checks")
    )
)]
struct ServiceDoc;

/// Combined OpenAPI documentation: service-level routes plus the items domain
pub struct ApiDoc;

impl OpenApi for ApiDoc {
    fn openapi() -> utoipa::openapi::OpenApi {
        let mut doc = ServiceDoc::openapi();
        doc.merge(domain_items::ApiDoc::openapi());
        doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_openapi_lists_all_routes() {
        let doc = ApiDoc::openapi();
        for path in ["/", "/items", "/items/{id}", "/ready"] {
            assert!(doc.paths.paths.contains_key(path), "missing {path}");
        }
    }
}
