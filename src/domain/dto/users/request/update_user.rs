//! # 사용자 수정 요청 DTO
//!
//! - `PUT /users/{id}`: [`ReplaceUserRequest`] - `name`, `email` 모두 필수 (전체 교체)
//! - `PATCH /users/{id}`: [`PatchUserRequest`] - 두 필드 모두 선택
//!
//! 비밀번호는 두 경로 모두에서 받지 않으며, 본문에 있어도 무시됩니다.
//! 수정 경로는 이메일 형식을 검사하지 않습니다. 형식 검사는 생성 시점에만 적용됩니다.

use serde::Deserialize;
use validator::Validate;

use super::validation::first_rejection;
use crate::errors::AppError;
use crate::utils::string_utils::deserialize_non_empty_string;

/// 전체 교체 요청
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ReplaceUserRequest {
    #[validate(
        required(code = "missing_field", message = "No user name provided"),
        length(min = 1, code = "missing_field", message = "No user name provided")
    )]
    pub name: Option<String>,

    #[validate(required(code = "missing_field", message = "No email provided"))]
    pub email: Option<String>,
}

/// 검증을 통과한 전체 교체 인자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserReplacement {
    pub name: String,
    pub email: String,
}

impl ReplaceUserRequest {
    const FIELD_ORDER: [&'static str; 2] = ["name", "email"];

    pub fn into_validated(self) -> Result<UserReplacement, AppError> {
        self.validate()
            .map_err(|errors| first_rejection(&errors, &Self::FIELD_ORDER))?;

        match (self.name, self.email) {
            (Some(name), Some(email)) => Ok(UserReplacement { name, email }),
            _ => Err(AppError::MissingField(
                "Missing required parameter".to_string(),
            )),
        }
    }
}

/// 부분 수정 요청
///
/// 누락, `null`, 빈 문자열은 모두 "변경 없음"으로 처리됩니다.
/// 따라서 PATCH로 필드를 빈 값으로 만들 수는 없습니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchUserRequest {
    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_non_empty_string")]
    pub email: Option<String>,
}

/// 검증을 통과한 부분 수정 인자
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl PatchUserRequest {
    /// 부분 수정은 거절 사유가 없으므로 항상 성공합니다.
    pub fn into_validated(self) -> UserPatch {
        UserPatch {
            name: self.name,
            email: self.email,
        }
    }
}

impl UserPatch {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }
}
