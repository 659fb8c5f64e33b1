//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문을 구조화된 타입으로 변환하고 검증합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (`serde`, 실패 시 `MalformedBody`)
//! 2. **형식 검증**: 필수 여부, 비밀번호 길이, 이메일 패턴 (`validator`)
//! 3. **저장소 검증**: 이메일 중복 (리포지토리, 실패 시 `DuplicateEmail`)
//!
//! 각 요청 DTO의 `into_validated()`는 `Result<인자, AppError>`를 반환하며,
//! 실패 시 저장소에 접근하기 전에 요청이 종료됩니다.

pub mod create_user;
pub mod update_user;
pub mod validation;

pub use create_user::{CreateUserRequest, NewUser};
pub use update_user::{PatchUserRequest, ReplaceUserRequest, UserPatch, UserReplacement};
