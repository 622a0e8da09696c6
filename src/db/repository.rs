//! Database repository for form CRUD operations.
//!
//! The `schema` column stores the field list wrapped in a `{"fields": [...]}`
//! envelope. The repository flattens and unflattens that envelope so the
//! in-memory `FormSchema` never exposes it.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use crate::errors::AppError;
use crate::models::{FieldDefinition, FormSchema};

/// Envelope shape of the `schema` column.
#[derive(Debug, Serialize, Deserialize)]
struct SchemaEnvelope {
    fields: Vec<FieldDefinition>,
}

/// Database repository for all form operations.
#[derive(Clone)]
pub struct Repository {
    pool: SqlitePool,
}

impl Repository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List all forms, most recently updated first.
    pub async fn list_forms(&self) -> Result<Vec<FormSchema>, AppError> {
        let rows = sqlx::query(
            "SELECT id, title, schema, created_at, updated_at FROM forms ORDER BY updated_at DESC",
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(form_from_row).collect()
    }

    /// Get a form by ID.
    pub async fn get_form(&self, id: &str) -> Result<Option<FormSchema>, AppError> {
        let row = sqlx::query(
            "SELECT id, title, schema, created_at, updated_at FROM forms WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(form_from_row).transpose()
    }

    /// Create a new form with a server-assigned id and timestamps.
    pub async fn create_form(
        &self,
        title: &str,
        fields: &[FieldDefinition],
    ) -> Result<FormSchema, AppError> {
        let id = uuid::Uuid::new_v4().to_string();
        let now = Utc::now().to_rfc3339();
        let schema_json = serde_json::to_string(&SchemaEnvelope {
            fields: fields.to_vec(),
        })?;

        sqlx::query(
            "INSERT INTO forms (id, title, schema, created_at, updated_at) VALUES (?, ?, ?, ?, ?)",
        )
        .bind(&id)
        .bind(title)
        .bind(&schema_json)
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        Ok(FormSchema {
            id: Some(id),
            title: title.to_string(),
            fields: fields.to_vec(),
            created_at: Some(now.clone()),
            updated_at: Some(now),
        })
    }

    /// Replace a form's title and fields, refreshing `updated_at`.
    pub async fn update_form(
        &self,
        id: &str,
        title: &str,
        fields: &[FieldDefinition],
    ) -> Result<FormSchema, AppError> {
        let existing = self
            .get_form(id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Form {} not found", id)))?;

        let now = Utc::now().to_rfc3339();
        let schema_json = serde_json::to_string(&SchemaEnvelope {
            fields: fields.to_vec(),
        })?;

        sqlx::query("UPDATE forms SET title = ?, schema = ?, updated_at = ? WHERE id = ?")
            .bind(title)
            .bind(&schema_json)
            .bind(&now)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(FormSchema {
            id: Some(id.to_string()),
            title: title.to_string(),
            fields: fields.to_vec(),
            created_at: existing.created_at,
            updated_at: Some(now),
        })
    }

    /// Delete a form by ID.
    pub async fn delete_form(&self, id: &str) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM forms WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound(format!("Form {} not found", id)));
        }

        Ok(())
    }
}

/// Build a `FormSchema` from a database row, unwrapping the schema envelope.
fn form_from_row(row: &SqliteRow) -> Result<FormSchema, AppError> {
    let schema_json: String = row.get("schema");
    let envelope: SchemaEnvelope = serde_json::from_str(&schema_json)
        .map_err(|e| AppError::Internal(format!("Corrupt schema column: {}", e)))?;

    Ok(FormSchema {
        id: Some(row.get("id")),
        title: row.get("title"),
        fields: envelope.fields,
        created_at: Some(row.get("created_at")),
        updated_at: Some(row.get("updated_at")),
    })
}
