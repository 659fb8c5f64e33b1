//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 주고받는 데이터 구조를 정의합니다.
//!
//! | 역할 | 모듈 | 도구 |
//! |------|------|------|
//! | HTTP 요청 본문 매핑 | `users::request` | `serde::Deserialize` |
//! | 입력값 검증 | `users::request::validation` | `validator` crate |
//! | HTTP 응답 본문 매핑 | `users::response` | `serde::Serialize` |
//!
//! 요청 DTO는 검증 후 타입이 확정된 인자(`NewUser`, `UserReplacement`, `UserPatch`)로
//! 변환되며, 서비스 계층은 검증되지 않은 본문을 보지 않습니다.

pub mod users;

pub use users::*;
