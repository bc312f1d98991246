use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

/// An error response: a status code and an optional plain-text body.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    message: Option<String>,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn not_found() -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: None,
        }
    }

    /// Sets the body of the response.
    pub fn message<S: Into<String>>(mut self, msg: S) -> Self {
        self.message = Some(msg.into());
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self.message {
            Some(msg) => (self.status, msg).into_response(),
            None => self.status.into_response(),
        }
    }
}
