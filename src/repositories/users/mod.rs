//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`MemoryUserRepository`] - `BTreeMap` 기반 메모리 저장소
//! - [`SqliteUserRepository`] - `users` 테이블 기반 SQLite 저장소

pub mod user_repo;
pub mod memory_user_repo;
pub mod sqlite_user_repo;

pub use user_repo::UserRepository;
pub use memory_user_repo::MemoryUserRepository;
pub use sqlite_user_repo::SqliteUserRepository;
