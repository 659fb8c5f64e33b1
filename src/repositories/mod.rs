//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 서비스 계층은 [`UserRepository`](users::user_repo::UserRepository) trait에만 의존하며,
//! 실제 저장소는 시작 시점에 설정에 따라 선택되어 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::repositories::users::{MemoryUserRepository, UserRepository};
//!
//! let repo: Arc<dyn UserRepository> = Arc::new(MemoryUserRepository::new());
//! let users = repo.list().await?;
//! ```

pub mod users;
