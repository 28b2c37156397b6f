use utoipa::OpenApi;

use crate::handlers;
use crate::models::{HealthResponse, Item, UnhealthyResponse};

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "dynamo-items API",
        version = "1.0.0",
        description = "CRUD over a single DynamoDB item table"
    ),
    paths(
        handlers::health::health_handler,
        handlers::create::create_handler,
        handlers::list::list_handler,
        handlers::get::get_handler,
        handlers::update::update_handler,
        handlers::delete::delete_handler
    ),
    components(
        schemas(
            Item,
            HealthResponse,
            UnhealthyResponse
        )
    ),
    tags(
        (name = "health", description = "Health check operations"),
        (name = "items", description = "Item store operations")
    )
)]
pub struct ApiDoc;
