//! # Domain Entities Module
//!
//! 비즈니스 도메인의 핵심 엔티티들을 정의합니다.
//! 엔티티는 저장소 표현과 1:1로 대응되며, 외부 응답 형태는 `dto` 모듈이 담당합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (저장되는 엔티티)
//! └── dto/          ← 요청 검증 및 응답 렌더링
//! ```

pub mod users;
