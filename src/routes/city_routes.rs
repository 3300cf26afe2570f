use crate::controllers::city_controller::CityController;
use crate::dto::city_dto::{CityResponse, CreateCityRequest, UpdateCityRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_city_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_city))
        .route("/", get(list_cities))
        .route("/:id", get(get_city))
        .route("/:id", put(update_city))
        .route("/:id", delete(delete_city))
}

async fn create_city(
    State(state): State<AppState>,
    Json(request): Json<CreateCityRequest>,
) -> Result<Json<CityResponse>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<CityResponse>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_cities(State(state): State<AppState>) -> Result<Json<Vec<CityResponse>>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateCityRequest>,
) -> Result<Json<CityResponse>, AppError> {
    let controller = CityController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_city(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CityController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ciudad eliminada exitosamente"
    })))
}
