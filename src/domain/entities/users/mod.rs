//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티를 정의하는 모듈입니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::{NewUserRecord, User};
//!
//! let record = NewUserRecord {
//!     name: "doge".to_string(),
//!     email: "doge@wow.com".to_string(),
//!     password_hash: hashed_password,
//! };
//! let user: User = record.with_id(3);
//! assert_eq!(user.uri(), "/users/3");
//! ```

pub mod user;
