use crate::controllers::review_controller::ReviewController;
use crate::dto::review_dto::{CreateReviewRequest, ReviewResponse, UpdateReviewRequest};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Json, Router,
};

pub fn create_review_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_review))
        .route("/", get(list_reviews))
        .route("/:id", get(get_review))
        .route("/:id", put(update_review))
        .route("/:id", delete(delete_review))
}

async fn create_review(
    State(state): State<AppState>,
    Json(request): Json<CreateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn get_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<ReviewResponse>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_reviews(
    State(state): State<AppState>,
) -> Result<Json<Vec<ReviewResponse>>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}

async fn update_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(request): Json<UpdateReviewRequest>,
) -> Result<Json<ReviewResponse>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    let response = controller.update(id, request).await?;
    Ok(Json(response))
}

async fn delete_review(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ReviewController::new(state.pool.clone());
    controller.delete(id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Reseña eliminada exitosamente"
    })))
}
