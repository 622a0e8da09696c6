//! Form API endpoints.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::errors::AppError;
use crate::models::{DeleteFormResponse, FieldDefinition, FormSchema, SaveFormRequest};
use crate::AppState;

/// Reject a save body with a missing/empty title or a missing fields key.
/// An empty fields array is valid: a form can be saved before any fields
/// are added. Only the empty string is rejected; a whitespace-only title
/// counts as present.
fn validate_save_request(request: &SaveFormRequest) -> Result<(&str, &[FieldDefinition]), AppError> {
    let title = request
        .title
        .as_deref()
        .filter(|t| !t.is_empty())
        .ok_or_else(|| AppError::Validation("Title and fields are required".to_string()))?;
    let fields = request
        .fields
        .as_deref()
        .ok_or_else(|| AppError::Validation("Title and fields are required".to_string()))?;
    Ok((title, fields))
}

/// GET /api/forms - List all forms, most recently updated first.
pub async fn list_forms(State(state): State<AppState>) -> Result<Json<Vec<FormSchema>>, AppError> {
    let forms = state.repo.list_forms().await?;
    Ok(Json(forms))
}

/// GET /api/forms/:id - Get a single form.
pub async fn get_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<FormSchema>, AppError> {
    match state.repo.get_form(&id).await? {
        Some(form) => Ok(Json(form)),
        None => Err(AppError::NotFound(format!("Form {} not found", id))),
    }
}

/// POST /api/forms - Create a new form.
pub async fn create_form(
    State(state): State<AppState>,
    Json(request): Json<SaveFormRequest>,
) -> Result<(StatusCode, Json<FormSchema>), AppError> {
    let (title, fields) = validate_save_request(&request)?;
    let form = state.repo.create_form(title, fields).await?;
    tracing::info!("Created form {}", form.id.as_deref().unwrap_or(""));
    Ok((StatusCode::CREATED, Json(form)))
}

/// PUT /api/forms/:id - Update a form.
pub async fn update_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(request): Json<SaveFormRequest>,
) -> Result<Json<FormSchema>, AppError> {
    let (title, fields) = validate_save_request(&request)?;
    let form = state.repo.update_form(&id, title, fields).await?;
    Ok(Json(form))
}

/// DELETE /api/forms/:id - Delete a form.
pub async fn delete_form(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<DeleteFormResponse>, AppError> {
    state.repo.delete_form(&id).await?;
    Ok(Json(DeleteFormResponse {
        message: "Form deleted successfully".to_string(),
    }))
}
