//! 사용자 관리 서비스 모듈
//!
//! 사용자 리소스의 lookup-or-404, 비밀번호 해싱, 전체/부분 수정 규칙,
//! 응답 렌더링을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::MemoryUserRepository;
//! use crate::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MemoryUserRepository::new()), 4);
//! let created = service.create_user(new_user).await?;
//! assert_eq!(created.uri, "/users/1");
//! ```

pub mod user_service;

pub use user_service::UserService;
