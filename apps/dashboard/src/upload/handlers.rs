use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::state::AppState;
use crate::upload::csv_preview::{preview_csv, validate_csv_file, CsvPreview};
use crate::upload::{DatasetKind, UploadedFile};

#[derive(Debug, Serialize)]
pub struct FilePreview {
    pub dataset: DatasetKind,
    pub file_name: String,
    pub preview: CsvPreview,
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: String,
    pub files: Vec<FilePreview>,
}

/// POST /api/v1/upload
///
/// Multipart fields `employees` and/or `projects`. Every file is validated
/// before anything is forwarded; one bad file rejects the whole upload.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, AppError> {
    let mut files = Vec::new();

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        let Some(kind) = field.name().and_then(DatasetKind::from_field_name) else {
            warn!("Ignoring unexpected upload field {:?}", field.name());
            continue;
        };

        let file_name = field.file_name().unwrap_or(kind.field_name()).to_string();
        validate_csv_file(&file_name, field.content_type())?;

        let content = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Could not read '{file_name}': {e}")))?;

        files.push(UploadedFile {
            kind,
            file_name,
            content,
        });
    }

    if files.is_empty() {
        return Err(AppError::Validation(
            "Upload at least one of 'employees' or 'projects'".to_string(),
        ));
    }

    let previews = files
        .iter()
        .map(|file| FilePreview {
            dataset: file.kind,
            file_name: file.file_name.clone(),
            preview: preview_csv(&String::from_utf8_lossy(&file.content)),
        })
        .collect();

    let message = state.backend.upload(&files).await?;
    info!("Forwarded {} CSV file(s) to the matching service", files.len());

    Ok(Json(UploadResponse {
        message: message.unwrap_or_else(|| "Files uploaded successfully".to_string()),
        files: previews,
    }))
}
