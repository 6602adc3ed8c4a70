use axum::Json;
use axum::response::{IntoResponse, Response};
use http::StatusCode;

use super::types::ErrorBody;

/// 错误类别
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// 路径 ID 或请求体格式不合法
    InvalidInput,
    /// ID 合法但没有对应记录
    NotFound,
}

/// 学生服务错误类型
#[derive(Debug, thiserror::Error)]
pub enum StudentError {
    #[error("Invalid ID")]
    InvalidId,
    #[error("Provide valid name (string), age (number), dept (string)")]
    InvalidFields,
    #[error("Invalid JSON body")]
    MalformedBody(String),
    #[error("Student not found")]
    NotFound,
}

impl StudentError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StudentError::InvalidId | StudentError::InvalidFields | StudentError::MalformedBody(_) => {
                ErrorKind::InvalidInput
            }
            StudentError::NotFound => ErrorKind::NotFound,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::InvalidInput => StatusCode::BAD_REQUEST,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for StudentError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if let StudentError::MalformedBody(e) = &self {
            tracing::debug!(reason = %e, "Rejected malformed request body");
        }

        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kind_mapping() {
        assert_eq!(StudentError::InvalidId.kind(), ErrorKind::InvalidInput);
        assert_eq!(StudentError::InvalidFields.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(StudentError::NotFound.kind(), ErrorKind::NotFound);
        assert_eq!(StudentError::NotFound.status_code(), StatusCode::NOT_FOUND);
    }
}
