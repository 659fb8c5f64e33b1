//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 검증 실패, 리소스 없음,
//! 저장소 오류를 일관된 HTTP 응답으로 변환합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 본문 |
//! |----------|-------------|------|
//! | `MissingField` | 400 Bad Request | `{"message": ...}` |
//! | `InvalidPassword` | 400 Bad Request | `{"message": ...}` |
//! | `InvalidEmail` | 400 Bad Request | `{"message": ...}` |
//! | `MalformedBody` | 400 Bad Request | `{"message": ...}` |
//! | `NotFound` | 404 Not Found | 빈 본문 |
//! | `DuplicateEmail` | 409 Conflict | `{"message": ...}` |
//! | `DatabaseError` | 500 Internal Server Error | 고정 메시지 |
//! | `InternalError` | 500 Internal Server Error | 고정 메시지 |

pub mod errors;

pub use errors::*;
