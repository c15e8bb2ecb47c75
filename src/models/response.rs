use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

/// Envelope for command results. Both fields are omitted when a command had
/// nothing to report, such as a dismissed prompt.
#[derive(Debug, Clone, Serialize)]
pub struct GenericResponse<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<T>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub results: Option<Vec<T>>,
}

impl<T> GenericResponse<T> {
    pub fn result(result: T) -> Self {
        GenericResponse {
            result: Some(result),
            results: None,
        }
    }

    pub fn results(results: Vec<T>) -> Self {
        GenericResponse {
            result: None,
            results: Some(results),
        }
    }

    pub fn empty() -> Self {
        GenericResponse {
            result: None,
            results: None,
        }
    }
}

impl<T> IntoResponse for GenericResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> axum::response::Response {
        (StatusCode::OK, Json(self)).into_response()
    }
}
