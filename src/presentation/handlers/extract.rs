use std::sync::Arc;

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use crate::application::ports::WorkbookReader;
use crate::application::services::ExtractionError;
use crate::domain::ExtractionResult;
use crate::presentation::state::AppState;

const PARSE_FAILURE_HELP: &str = "Verifica que el archivo sea un Excel válido (.xls o .xlsx)";

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub file: Option<String>,
}

#[derive(Serialize)]
pub struct ExtractResponse {
    pub success: bool,
    #[serde(flatten)]
    pub result: ExtractionResult,
}

#[derive(Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tipo_error: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ayuda: Option<&'static str>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
            tipo_error: None,
            ayuda: None,
        }
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn extract_handler<R>(
    State(state): State<AppState<R>>,
    payload: Result<Json<ExtractRequest>, JsonRejection>,
) -> Response
where
    R: WorkbookReader + 'static,
{
    let file = match payload {
        Ok(Json(request)) => request.file,
        Err(rejection) if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE => {
            tracing::warn!(error = %rejection.body_text(), "Spreadsheet upload too large");
            return (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorResponse::new(
                    "El archivo supera el tamaño máximo permitido",
                )),
            )
                .into_response();
        }
        Err(rejection) => {
            return error_response(&ExtractionError::InvalidInput(format!(
                "Cuerpo JSON inválido: {}",
                rejection.body_text()
            )));
        }
    };

    tracing::debug!(
        payload_len = file.as_deref().map_or(0, str::len),
        "Spreadsheet upload received"
    );

    let service = Arc::clone(&state.extraction_service);
    let span = tracing::Span::current();
    let outcome =
        tokio::task::spawn_blocking(move || span.in_scope(|| service.extract(file.as_deref())))
            .await;

    let result = outcome.unwrap_or_else(|e| {
        Err(ExtractionError::ParseFailure(format!(
            "Error inesperado procesando el Excel: {e}"
        )))
    });

    match result {
        Ok(result) => (
            StatusCode::OK,
            Json(ExtractResponse {
                success: true,
                result,
            }),
        )
            .into_response(),
        Err(e) => error_response(&e),
    }
}

/// Answers a CORS preflight that the CORS layer did not short-circuit.
pub async fn preflight_handler() -> StatusCode {
    StatusCode::OK
}

pub async fn method_not_allowed_handler() -> Response {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        Json(ErrorResponse::new("Method not allowed")),
    )
        .into_response()
}

fn error_response(error: &ExtractionError) -> Response {
    if error.is_client_error() {
        tracing::warn!(error = %error, kind = error.kind(), "Rejected spreadsheet upload");
        return (StatusCode::BAD_REQUEST, Json(ErrorResponse::new(error.to_string())))
            .into_response();
    }

    tracing::error!(error = %error, kind = error.kind(), "Failed to process spreadsheet");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            success: false,
            error: error.to_string(),
            tipo_error: Some(error.kind()),
            ayuda: Some(PARSE_FAILURE_HELP),
        }),
    )
        .into_response()
}
