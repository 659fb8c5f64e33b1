//! # 사용자 생성 요청 DTO
//!
//! `POST /users` 본문을 표현하고 검증합니다.
//!
//! ## 검증 규칙
//!
//! 규칙은 `name` → `password` → `email` 순서로 확인되며 첫 번째 실패가 응답이 됩니다.
//!
//! | 필드 | 규칙 | 실패 |
//! |------|------|------|
//! | `name` | 필수, 빈 문자열 불가 | `MissingField` |
//! | `password` | 필수, 8자 이상 | `MissingField` / `InvalidPassword` |
//! | `email` | 필수, `local@domain.tld` 형식 | `MissingField` / `InvalidEmail` |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! let request: CreateUserRequest = serde_json::from_str(
//!     r#"{"name": "doge", "email": "doge@wow.com", "password": "much secret"}"#,
//! )?;
//! let new_user = request.into_validated()?;
//! ```

use serde::Deserialize;
use validator::Validate;

use super::validation::{first_rejection, validate_email_format, validate_password_length};
use crate::errors::AppError;

/// 새로운 사용자 생성을 위한 요청 DTO
///
/// 누락된 필드를 `MissingField`로 구분하기 위해 모든 필드를 `Option`으로 받습니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(code = "missing_field", message = "No user name provided"),
        length(min = 1, code = "missing_field", message = "No user name provided")
    )]
    pub name: Option<String>,

    /// 평문 비밀번호 (해싱 후 폐기)
    #[validate(
        required(code = "missing_field", message = "No password provided"),
        custom(function = "validate_password_length")
    )]
    pub password: Option<String>,

    #[validate(
        required(code = "missing_field", message = "No email provided"),
        custom(function = "validate_email_format")
    )]
    pub email: Option<String>,
}

/// 검증을 통과한 생성 인자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl CreateUserRequest {
    const FIELD_ORDER: [&'static str; 3] = ["name", "password", "email"];

    /// 요청을 검증하고 타입이 확정된 인자로 변환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::MissingField` - 필드 누락 또는 빈 이름
    /// * `AppError::InvalidPassword` - 8자 미만 비밀번호
    /// * `AppError::InvalidEmail` - 형식이 맞지 않는 이메일
    pub fn into_validated(self) -> Result<NewUser, AppError> {
        self.validate()
            .map_err(|errors| first_rejection(&errors, &Self::FIELD_ORDER))?;

        match (self.name, self.password, self.email) {
            (Some(name), Some(password), Some(email)) => Ok(NewUser {
                name,
                email,
                password,
            }),
            _ => Err(AppError::MissingField(
                "Missing required parameter".to_string(),
            )),
        }
    }
}
