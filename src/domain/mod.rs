//! # Domain Layer Module
//!
//! 사용자 리소스의 엔티티와 요청/응답 DTO를 담는 도메인 계층입니다.
//!
//! ## 아키텍처 개요
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── entities     - 저장되는 User 엔티티
//! └── dto          - 요청 검증(request)과 응답 렌더링(response)
//!      │
//!      ▼
//! Application Layer (services)
//!      │
//!      ▼
//! Infrastructure Layer (repositories, db)
//! ```
//!
//! ## 요청 한 건의 흐름
//!
//! ```text
//! JSON 본문 ──▶ CreateUserRequest ──into_validated()──▶ NewUser
//!                                                        │
//!                                      UserService::create_user
//!                                                        │
//!                                    NewUserRecord ──▶ UserRepository
//!                                                        │
//!                     UserResponse ◀──render()── User ◀──┘
//! ```

pub mod entities;
pub mod dto;
