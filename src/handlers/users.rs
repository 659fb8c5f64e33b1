//! # 사용자 리소스 핸들러
//!
//! `/users` 스코프 아래의 HTTP 엔드포인트를 정의합니다.
//! 핸들러는 요청 본문을 DTO로 받아 검증하고, `UserService`에 위임한 뒤
//! 결과를 상태 코드와 함께 JSON으로 돌려줍니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 성공 | 실패 |
//! |--------|------|------|------|
//! | `GET` | `/users` | 200 사용자 배열 | - |
//! | `POST` | `/users` | 201 생성된 사용자 | 400, 409 |
//! | `GET` | `/users/{id}` | 200 사용자 | 404 |
//! | `HEAD` | `/users/{id}` | 200 빈 본문 | 404 |
//! | `PUT` | `/users/{id}` | 200 사용자 | 400, 404, 409 |
//! | `PATCH` | `/users/{id}` | 200 사용자 | 404, 409 |
//! | `DELETE` | `/users/{id}` | 204 빈 본문 | 404 |
//!
//! `{id}`가 정수가 아니면 경로가 매칭되지 않은 것으로 보고 404를 반환합니다.
//!
//! ## 서비스 주입
//!
//! `UserService`는 애플리케이션 시작 시 한 번 만들어져 `web::Data`로 등록됩니다.
//!
//! ```rust,ignore
//! let service = web::Data::new(UserService::new(repo, PasswordConfig::bcrypt_cost()));
//!
//! App::new()
//!     .app_data(service.clone())
//!     .configure(configure_all_routes)
//! ```

use actix_web::{delete, get, head, patch, post, put, web, HttpResponse};

use crate::domain::dto::users::request::{CreateUserRequest, PatchUserRequest, ReplaceUserRequest};
use crate::errors::AppError;
use crate::services::users::UserService;

/// 사용자 목록 핸들러
///
/// `GET /users`
///
/// 저장된 모든 사용자를 배열로 반환합니다. 비밀번호는 포함되지 않습니다.
#[get("")]
pub async fn list_users(service: web::Data<UserService>) -> Result<HttpResponse, AppError> {
    let users = service.list_users().await?;

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 생성 핸들러
///
/// `POST /users`
///
/// # 요청 본문
///
/// ```json
/// {
///   "name": "doge",
///   "email": "doge@wow.com",
///   "password": "much secret"
/// }
/// ```
///
/// # 응답
///
/// ## 성공 (201 Created)
/// ```json
/// {
///   "name": "doge",
///   "email": "doge@wow.com",
///   "uri": "/users/3"
/// }
/// ```
///
/// ## 실패 (400 Bad Request)
/// ```json
/// {
///   "message": "Password must be at least 8 characters in length."
/// }
/// ```
#[post("")]
pub async fn create_user(
    service: web::Data<UserService>,
    payload: web::Json<CreateUserRequest>,
) -> Result<HttpResponse, AppError> {
    let new_user = payload.into_inner().into_validated()?;
    let response = service.create_user(new_user).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 사용자 조회 핸들러
///
/// `GET /users/{id}`
#[get("/{id}")]
pub async fn get_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    let user = service.get_user(id.into_inner()).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 존재 확인 핸들러
///
/// `HEAD /users/{id}`
///
/// 본문 없이 상태 코드만 반환합니다.
#[head("/{id}")]
pub async fn head_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.ensure_exists(id.into_inner()).await?;

    Ok(HttpResponse::Ok().finish())
}

/// 사용자 전체 교체 핸들러
///
/// `PUT /users/{id}`
///
/// `name`, `email` 모두 필요합니다. `password`는 무시됩니다.
#[put("/{id}")]
pub async fn replace_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: web::Json<ReplaceUserRequest>,
) -> Result<HttpResponse, AppError> {
    let id = id.into_inner();
    // 존재 확인이 본문 검증보다 먼저
    service.ensure_exists(id).await?;

    let replacement = payload.into_inner().into_validated()?;
    let user = service.replace_user(id, replacement).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 부분 수정 핸들러
///
/// `PATCH /users/{id}`
///
/// 값이 있는 필드만 바뀝니다. 빈 문자열과 `null`은 "변경 없음"입니다.
#[patch("/{id}")]
pub async fn patch_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
    payload: web::Json<PatchUserRequest>,
) -> Result<HttpResponse, AppError> {
    let patch = payload.into_inner().into_validated();
    let user = service.patch_user(id.into_inner(), patch).await?;

    Ok(HttpResponse::Ok().json(user))
}

/// 사용자 삭제 핸들러
///
/// `DELETE /users/{id}`
///
/// 물리적 삭제(Hard Delete)이며 복구할 수 없습니다.
///
/// ## 성공 (204 No Content)
/// ```text
/// HTTP/1.1 204 No Content
/// Content-Length: 0
/// ```
#[delete("/{id}")]
pub async fn delete_user(
    service: web::Data<UserService>,
    id: web::Path<i64>,
) -> Result<HttpResponse, AppError> {
    service.delete_user(id.into_inner()).await?;

    Ok(HttpResponse::NoContent().finish())
}
