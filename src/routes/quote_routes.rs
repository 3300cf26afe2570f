use crate::controllers::quote_controller::QuoteController;
use crate::dto::quote_dto::{CreateQuoteRequest, QuoteResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;
use axum::{
    extract::State,
    routing::{get, post},
    Json, Router,
};

pub fn create_quote_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_quote))
        .route("/", get(list_quotes))
}

async fn create_quote(
    State(state): State<AppState>,
    Json(request): Json<CreateQuoteRequest>,
) -> Result<Json<QuoteResponse>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok(Json(response))
}

async fn list_quotes(State(state): State<AppState>) -> Result<Json<Vec<QuoteResponse>>, AppError> {
    let controller = QuoteController::new(state.pool.clone());
    let response = controller.list().await?;
    Ok(Json(response))
}
