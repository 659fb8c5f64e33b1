//! 사용자 관리 API 백엔드
//!
//! 사용자 리소스(`/users`)의 생성, 조회, 수정, 삭제를 제공하는 REST 서비스입니다.
//!
//! # Features
//!
//! - **사용자 CRUD**: 목록, 생성, 조회, 존재 확인, 전체 교체, 부분 수정, 삭제
//! - **입력 검증**: 필수 필드, 비밀번호 길이, 이메일 형식
//! - **비밀번호 해싱**: bcrypt, 응답에는 절대 포함되지 않음
//! - **저장소 선택**: 프로세스 메모리 또는 SQLite (`sqlx`)
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← lookup-or-404, 해싱, 수정 규칙
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← Arc<dyn UserRepository>
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Memory | SQLite │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use users_api::repositories::users::MemoryUserRepository;
//! use users_api::services::users::UserService;
//!
//! let service = UserService::new(Arc::new(MemoryUserRepository::new()), 4);
//! service.seed_default_users().await?;
//! let users = service.list_users().await?;
//! ```

pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
