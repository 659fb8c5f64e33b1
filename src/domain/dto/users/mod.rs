//! # User Data Transfer Objects Module
//!
//! ## 모듈 구조
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── create_user.rs     # POST 본문 + 검증
//! │   ├── update_user.rs     # PUT / PATCH 본문 + 검증
//! │   └── validation.rs      # 비밀번호 길이, 이메일 패턴, 에러 변환
//! └── response/
//!     └── user_response.rs   # 공개 응답 (비밀번호 제외, uri 포함)
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
