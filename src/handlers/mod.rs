//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 정의하는 모듈입니다.
//! ActixWeb 프레임워크를 기반으로 구현되었습니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! HTTP Layer Architecture
//! ┌─────────────────────────────────────────────┐
//!   Client (curl, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근 (메모리 / SQLite)     ← Repository Layer
//! ├─────────────────────────────────────────────┤
//!   Entities - 도메인 모델                         ← Domain Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 핸들러 규칙
//!
//! - 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환합니다.
//! - 서비스는 `web::Data<UserService>` 추출기로 주입받습니다.
//! - 본문 검증은 DTO의 `into_validated()`가 담당하며, 핸들러는 `?`로 전파만 합니다.
//! - 에러의 상태 코드와 본문은 `AppError`의 `ResponseError` 구현이 결정합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`]: `/users` 리소스 CRUD

pub mod users;
