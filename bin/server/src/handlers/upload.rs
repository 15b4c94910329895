use crate::handlers::error::{handle_error, handle_server_error};
use crate::state::AppState;
use actix_multipart::form::tempfile::TempFile;
use actix_multipart::form::MultipartForm;
use actix_web::{post, web, HttpResponse, Result as ActixResult};
use common::file_utils;
use tracing::{error, info};
use uuid::Uuid;

/// Multipart form for document upload
#[derive(MultipartForm)]
pub struct DocumentForm {
    /// The XML document to validate
    #[multipart(limit = "10MB")]
    pub file: Option<TempFile>,
}

/// Validate an uploaded XML document against the RELAX NG grammar and hand
/// the converted body onward
#[post("/documents")]
pub async fn upload(
    form: MultipartForm<DocumentForm>,
    state: web::Data<AppState>,
) -> ActixResult<HttpResponse> {
    let DocumentForm { file } = form.into_inner();

    // Fail before any staging or subprocess work when no file arrived
    let file = file.ok_or_else(|| {
        error!("POST /documents - No file provided");
        actix_web::error::ErrorBadRequest("No file provided")
    })?;

    let request_id = Uuid::new_v4();
    info!(
        %request_id,
        filename = ?file.file_name,
        size = file.size,
        "POST /documents - Request received"
    );

    // Validate client-supplied filename metadata to prevent path traversal
    if let Some(name) = file.file_name.as_deref() {
        file_utils::validate_filename(name)
            .map_err(|e| handle_error("Invalid upload filename", e))?;
    }

    // Read document bytes from the multipart temp file
    let bytes = std::fs::read(file.file.path())
        .map_err(|e| handle_server_error("Failed to read uploaded file", e))?;

    // Lenient decode: malformed sequences become replacement characters,
    // never an explicit error
    let document = String::from_utf8_lossy(&bytes).into_owned();

    let outcome = state
        .validator
        .validate(&document)
        .await
        .map_err(|e| handle_server_error("Failed to run validation", e))?;

    info!(
        %request_id,
        valid = outcome.valid,
        "POST /documents - Validation finished"
    );

    if !outcome.valid {
        error!(%request_id, "Validation failed: {}", outcome.joined());
        return Err(actix_web::error::ErrorBadRequest(format!(
            "XML Errors: {}",
            outcome.joined()
        )));
    }

    // Replace the body with the structured document for the consumer
    let body = xmljson::to_value(&document)
        .map_err(|e| handle_server_error("Failed to convert XML", e))?;

    Ok(HttpResponse::Ok().json(body))
}
