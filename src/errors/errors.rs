//! 애플리케이션 전역 에러 타입
//!
//! 모든 계층은 `AppResult<T>`를 반환하며, 핸들러에서는 `actix_web::ResponseError`
//! 구현을 통해 HTTP 상태 코드와 `{"error": "..."}` JSON 본문으로 변환됩니다.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Authentication error: {0}")]
    AuthenticationError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// 클라이언트에게 전달되는 메시지 (접두사 없이 원문 그대로)
    pub fn message(&self) -> &str {
        match self {
            AppError::DatabaseError(msg)
            | AppError::ValidationError(msg)
            | AppError::NotFound(msg)
            | AppError::AuthenticationError(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// 예기치 못한 오류(DB, 내부)에 작업 이름을 붙여 `InternalError`로 바꿉니다.
    ///
    /// 클라이언트 입력 오류, 인증 오류, Not Found는 그대로 유지됩니다.
    pub fn during(self, operation: &str) -> Self {
        match self {
            AppError::DatabaseError(msg) | AppError::InternalError(msg) => {
                AppError::InternalError(format!("{}: {}", operation, msg))
            }
            other => other,
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::DatabaseError(e.to_string())
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code())
            .json(serde_json::json!({
                "error": self.message()
            }))
    }
}

pub type AppResult<T> = Result<T, AppError>;

/// 하위 계층 에러에 작업 맥락을 붙여 `InternalError`로 변환합니다.
pub trait ErrorContext<T> {
    fn context(self, msg: &str) -> AppResult<T>;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }
}
