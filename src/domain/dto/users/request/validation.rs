//! # 사용자 입력 검증 규칙
//!
//! 요청 DTO의 `#[validate(custom(...))]`에서 호출하는 규칙 함수와,
//! `validator::ValidationErrors`를 `AppError` 종류로 변환하는 함수를 제공합니다.
//!
//! ## 에러 코드
//!
//! | 코드 | AppError | 메시지 |
//! |------|----------|--------|
//! | `missing_field` | `MissingField` | 필드별 메시지 (필드 이름 포함) |
//! | `invalid_password` | `InvalidPassword` | `Password must be at least 8 characters in length.` |
//! | `invalid_email` | `InvalidEmail` | `Email is not valid.` |
//!
//! `ValidationErrors`는 필드 순서를 보존하지 않으므로 [`first_rejection`]은
//! 호출자가 넘긴 필드 순서대로 첫 번째 실패를 고릅니다.

use once_cell::sync::Lazy;
use regex::Regex;
use validator::{ValidationError, ValidationErrors};

use crate::errors::{AppError, INVALID_EMAIL_MESSAGE, INVALID_PASSWORD_MESSAGE};

/// 최소 비밀번호 길이 (문자 수 기준)
pub const MIN_PASSWORD_LENGTH: usize = 8;

pub const CODE_MISSING_FIELD: &str = "missing_field";
pub const CODE_INVALID_PASSWORD: &str = "invalid_password";
pub const CODE_INVALID_EMAIL: &str = "invalid_email";

/// `local@domain.tld` 형태의 단순 이메일 패턴
pub static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[\w.+-]+@[\w-]+\.[\w.-]+$").expect("email regex must compile")
});

/// 이메일 형식 여부
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}

/// 비밀번호 길이를 검증합니다.
///
/// 바이트가 아닌 유니코드 문자 수로 셉니다.
///
/// ```rust,ignore
/// assert!(validate_password_length("1234567").is_err());
/// assert!(validate_password_length("12345678").is_ok());
/// ```
pub fn validate_password_length(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::new(CODE_INVALID_PASSWORD)
            .with_message(INVALID_PASSWORD_MESSAGE.into()));
    }
    Ok(())
}

/// 이메일 형식을 검증합니다.
pub fn validate_email_format(email: &str) -> Result<(), ValidationError> {
    if !is_valid_email(email) {
        return Err(ValidationError::new(CODE_INVALID_EMAIL)
            .with_message(INVALID_EMAIL_MESSAGE.into()));
    }
    Ok(())
}

/// 검증 실패 목록에서 첫 번째 거절 사유를 `AppError`로 변환합니다.
///
/// `field_order` 순서로 필드를 확인하며, 순서에 없는 필드만 실패한 경우
/// 전체 에러 메시지를 `MalformedBody`로 반환합니다.
pub fn first_rejection(errors: &ValidationErrors, field_order: &[&str]) -> AppError {
    let field_errors = errors.field_errors();

    for field in field_order {
        if let Some(error) = field_errors.get(*field).and_then(|list| list.first()) {
            return rejection_for(field, error);
        }
    }

    AppError::MalformedBody(errors.to_string())
}

fn rejection_for(field: &str, error: &ValidationError) -> AppError {
    match error.code.as_ref() {
        CODE_INVALID_PASSWORD => AppError::InvalidPassword,
        CODE_INVALID_EMAIL => AppError::InvalidEmail,
        CODE_MISSING_FIELD | "required" => AppError::MissingField(
            error
                .message
                .as_ref()
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("Missing required parameter: {}", field)),
        ),
        other => AppError::MalformedBody(format!("Invalid value for {}: {}", field, other)),
    }
}
