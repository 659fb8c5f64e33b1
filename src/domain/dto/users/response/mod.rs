//! # 사용자 응답 DTO 모듈
//!
//! 엔티티를 외부 공개용 표현으로 변환합니다.
//! 응답 타입에는 비밀번호 관련 필드가 아예 존재하지 않습니다.
//!
//! ```json
//! {
//!   "id": 1,
//!   "name": "user1",
//!   "email": "user1@example.com",
//!   "uri": "/users/1"
//! }
//! ```
//!
//! `id`는 영속 저장소(SQLite)를 사용할 때만 포함됩니다.

pub mod user_response;

pub use user_response::UserResponse;
