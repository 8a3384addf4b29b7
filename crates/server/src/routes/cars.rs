use axum::{extract::{rejection::JsonRejection, Path, State}, http::StatusCode, Json};
use models::Car;
use tracing::info;

use crate::errors::JsonApiError;
use crate::observability::{CARS_CREATED_TOTAL, CARS_DELETED_TOTAL, CARS_UPDATED_TOTAL};
use crate::state::AppState;

#[utoipa::path(
    get, path = "/api/v1/cars", tag = "cars",
    responses(
        (status = 200, description = "List OK", body = [crate::openapi::CarDoc]),
        (status = 500, description = "List Failed")
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<Car>>, JsonApiError> {
    let cars = state.cars.get_cars()?;
    info!(count = cars.len(), "list cars");
    Ok(Json(cars))
}

#[utoipa::path(
    post, path = "/api/v1/cars", tag = "cars",
    request_body = crate::openapi::CarDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::CarDoc),
        (status = 400, description = "Bad Request")
    )
)]
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<Car>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), JsonApiError> {
    let Json(input) = payload?;
    let car = state.cars.create_car(input)?;
    CARS_CREATED_TOTAL.inc();
    Ok((StatusCode::CREATED, Json(car)))
}

#[utoipa::path(
    get, path = "/api/v1/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::CarDoc),
        (status = 404, description = "Not Found")
    )
)]
pub async fn get(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Car>, JsonApiError> {
    Ok(Json(state.cars.get_car(&id)?))
}

#[utoipa::path(
    put, path = "/api/v1/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car ID")),
    request_body = crate::openapi::CarDoc,
    responses(
        (status = 202, description = "Updated", body = crate::openapi::CarDoc),
        (status = 400, description = "Bad Request / id mismatch"),
        (status = 404, description = "Not Found")
    )
)]
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<Car>, JsonRejection>,
) -> Result<(StatusCode, Json<Car>), JsonApiError> {
    let Json(input) = payload?;
    let car = state.cars.update_car(&id, input)?;
    CARS_UPDATED_TOTAL.inc();
    Ok((StatusCode::ACCEPTED, Json(car)))
}

/// Deleting an unknown id still answers 204.
#[utoipa::path(
    delete, path = "/api/v1/cars/{id}", tag = "cars",
    params(("id" = String, Path, description = "Car ID")),
    responses(
        (status = 204, description = "Deleted"),
        (status = 500, description = "Delete Failed")
    )
)]
pub async fn delete(State(state): State<AppState>, Path(id): Path<String>) -> Result<StatusCode, JsonApiError> {
    state.cars.delete_car(&id)?;
    CARS_DELETED_TOTAL.inc();
    Ok(StatusCode::NO_CONTENT)
}
