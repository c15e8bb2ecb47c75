use axum::http::StatusCode;
use axum::{response::IntoResponse, Json};
use serde::Serialize;

use crate::errors::command::CommandError;
use crate::errors::{ExplorerError, HasErrorCode};

#[derive(Serialize)]
struct Problem<'a> {
    title: &'a str,
    detail: String,
    code: &'a str,
}

fn map_error(err: &ExplorerError) -> StatusCode {
    use ExplorerError::*;
    match err {
        Engine(_) => StatusCode::BAD_GATEWAY,
        Terminal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        Command(CommandError::NodeNotFound { .. }) => StatusCode::NOT_FOUND,
        Command(_) => StatusCode::UNPROCESSABLE_ENTITY,
    }
}

impl IntoResponse for ExplorerError {
    fn into_response(self) -> axum::response::Response {
        let status = map_error(&self);
        let problem = Problem {
            title: status.canonical_reason().unwrap_or("error"),
            detail: self.to_string(),
            code: self.error_code(),
        };
        (status, Json(problem)).into_response()
    }
}
