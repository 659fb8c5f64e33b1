//! API 라우트 설정 모듈
//!
//! 사용자 리소스 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Features
//!
//! - 사용자 CRUD API 엔드포인트 (`/users`)
//! - JSON 본문 파싱 실패를 `{"message": ...}` 400 응답으로 변환
//! - 헬스체크 엔드포인트 (`/health`)
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(user_service))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use serde_json::json;

use crate::errors::json_error_handler;
use crate::handlers;
use crate::services::users::UserService;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler));

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `GET /users` - 사용자 목록
/// - `POST /users` - 사용자 생성
/// - `GET /users/{id}` - 사용자 조회
/// - `HEAD /users/{id}` - 사용자 존재 확인
/// - `PUT /users/{id}` - 전체 교체
/// - `PATCH /users/{id}` - 부분 수정
/// - `DELETE /users/{id}` - 사용자 삭제
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"name":"doge","email":"doge@wow.com","password":"much secret"}'
///
/// curl -X PATCH http://localhost:8080/users/1 \
///   -H "Content-Type: application/json" \
///   -d '{"name":"wow"}'
/// ```
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::head_user)
            .service(handlers::users::replace_user)
            .service(handlers::users::patch_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `storage`: 사용 중인 저장소 종류
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "users_api",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "storage": "sqlite"
/// }
/// ```
#[get("/health")]
async fn health_check(service: web::Data<UserService>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "storage": service.backend().as_str(),
    }))
}
