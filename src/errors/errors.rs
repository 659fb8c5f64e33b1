//! 애플리케이션 전역 에러 타입
//!
//! 모든 계층(검증, 서비스, 리포지토리)이 같은 `AppError`를 반환하며,
//! 핸들러는 `?` 연산자만으로 적절한 HTTP 응답을 만들 수 있습니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn get_user(&self, id: i64) -> Result<UserResponse, AppError> {
//!     let user = self.user_repo
//!         .find(id)
//!         .await?
//!         .ok_or(AppError::NotFound)?;
//!
//!     Ok(UserResponse::render(user, true))
//! }
//! ```

use actix_web::error::JsonPayloadError;
use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use thiserror::Error;

/// 비밀번호 길이 검증 실패 메시지
pub const INVALID_PASSWORD_MESSAGE: &str = "Password must be at least 8 characters in length.";

/// 이메일 형식 검증 실패 메시지
pub const INVALID_EMAIL_MESSAGE: &str = "Email is not valid.";

/// 이메일 중복 메시지
pub const DUPLICATE_EMAIL_MESSAGE: &str = "Email is already registered.";

/// 애플리케이션 전역 에러 타입
///
/// 클라이언트 입력 오류(400, 404, 409)는 모두 복구 가능한 에러로,
/// 올바른 입력으로 다시 요청하면 성공합니다.
/// 서버 측 오류(500)는 로그에만 상세 내용을 남기고 응답에는 노출하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드 누락 (400 Bad Request)
    ///
    /// 메시지에는 누락된 필드 이름이 포함됩니다.
    #[error("{0}")]
    MissingField(String),

    /// 비밀번호 길이 미달 (400 Bad Request)
    #[error("Password must be at least 8 characters in length.")]
    InvalidPassword,

    /// 이메일 형식 오류 (400 Bad Request)
    #[error("Email is not valid.")]
    InvalidEmail,

    /// JSON 본문 파싱 실패 또는 필드 타입 불일치 (400 Bad Request)
    #[error("{0}")]
    MalformedBody(String),

    /// 리소스 없음 (404 Not Found, 빈 본문)
    #[error("Not found")]
    NotFound,

    /// 이메일 중복 (409 Conflict)
    #[error("Email is already registered.")]
    DuplicateEmail,

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingField(_)
            | AppError::InvalidPassword
            | AppError::InvalidEmail
            | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound => StatusCode::NOT_FOUND,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 404는 빈 본문, 500 계열은 고정 메시지, 나머지는 에러 메시지를
    /// `{"message": ...}` 형태로 반환합니다.
    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::NotFound => HttpResponse::build(status).finish(),
            AppError::DatabaseError(_) | AppError::InternalError(_) => {
                log::error!("요청 처리 중 서버 오류: {}", self);
                HttpResponse::build(status).json(serde_json::json!({
                    "message": "Internal server error."
                }))
            }
            _ => HttpResponse::build(status).json(serde_json::json!({
                "message": self.to_string()
            })),
        }
    }
}

impl From<sqlx::Error> for AppError {
    fn from(error: sqlx::Error) -> Self {
        match &error {
            sqlx::Error::Database(db_error) if db_error.is_unique_violation() => {
                AppError::DuplicateEmail
            }
            sqlx::Error::RowNotFound => AppError::NotFound,
            _ => AppError::DatabaseError(error.to_string()),
        }
    }
}

/// JSON 추출기 에러 핸들러
///
/// `web::JsonConfig`에 등록되어 본문 파싱 실패를 `MalformedBody`로 변환합니다.
pub fn json_error_handler(error: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    log::debug!("JSON 본문 파싱 실패: {}", error);
    AppError::MalformedBody(format!("Request body is not valid JSON: {}", error)).into()
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 외부 라이브러리 에러를 AppError로 변환하는 확장 trait
pub trait ErrorContext<T> {
    /// 컨텍스트 정보와 함께 에러를 변환합니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", msg, e)))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::InternalError(format!("{}: {}", f(), e)))
    }
}
