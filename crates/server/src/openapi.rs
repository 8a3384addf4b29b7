use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Car payload; `id` is ignored on create and must match the path on update.
#[derive(ToSchema)]
pub struct CarDoc {
    pub id: Option<String>,
    pub make: String,
    pub model: String,
    pub package: String,
    pub color: String,
    pub category: String,
    pub year: i64,
    pub mileage: i64,
    pub price: i64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::cars::list,
        crate::routes::cars::create,
        crate::routes::cars::get,
        crate::routes::cars::update,
        crate::routes::cars::delete,
    ),
    components(schemas(HealthResponse, CarDoc)),
    tags((name = "cars", description = "Car record CRUD"))
)]
pub struct ApiDoc;
