use super::types::{ErrorResponse, RecipeResponse};
use crate::{generator::TextGenerator, recipe};
use axum::{
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::Json,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{error, info};

#[derive(Clone)]
pub struct AppState {
    /// `None` when the model failed to load at startup.
    pub generator: Option<Arc<dyn TextGenerator>>,
}

impl AppState {
    pub fn new(generator: Option<Arc<dyn TextGenerator>>) -> Self {
        Self { generator }
    }
}

type HandlerError = (StatusCode, Json<ErrorResponse>);

fn failure(status: StatusCode, message: impl Into<String>) -> HandlerError {
    (status, Json(ErrorResponse::new(message)))
}

pub async fn generate_recipe(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<RecipeResponse>, HandlerError> {
    info!("Received recipe request");

    let Json(body) = payload.map_err(|rejection| {
        error!("Rejected recipe request: {}", rejection.body_text());
        failure(rejection.status(), rejection.body_text())
    })?;

    let Some(fields) = body.as_object() else {
        return Err(failure(
            StatusCode::UNPROCESSABLE_ENTITY,
            "Request body must be a JSON object",
        ));
    };

    let ingredients = recipe::ingredients_text(fields.get("ingredients"))
        .ok_or_else(|| failure(StatusCode::INTERNAL_SERVER_ERROR, recipe::INGREDIENTS_MISSING))?;

    let generator = state
        .generator
        .as_ref()
        .ok_or_else(|| failure(StatusCode::INTERNAL_SERVER_ERROR, recipe::MODEL_UNAVAILABLE))?;

    let prompt = recipe::recipe_prompt(&ingredients);
    match generator.generate(&prompt).await {
        Ok(recipe) => {
            info!("Generated recipe ({} bytes)", recipe.len());
            Ok(Json(RecipeResponse { recipe }))
        }
        Err(e) => {
            error!("Error generating recipe: {}", e);
            Err(failure(
                StatusCode::INTERNAL_SERVER_ERROR,
                recipe::GENERATION_FAILED,
            ))
        }
    }
}
