//! # 사용자 리포지토리 인터페이스
//!
//! 사용자 엔티티의 CRUD 연산을 정의합니다.
//! 서비스 계층은 이 trait 객체(`Arc<dyn UserRepository>`)만 알고 있으므로
//! 메모리 저장소와 SQLite 저장소를 같은 방식으로 사용할 수 있습니다.
//!
//! ## 공통 계약
//!
//! - `create`는 새 `id`를 할당하며, 이미 사용 중인 이메일이면 `AppError::DuplicateEmail`
//! - `update`는 `name`, `email`만 갱신하며 비밀번호 해시는 그대로 둡니다
//! - `update`, `delete`는 대상이 없으면 각각 `Ok(None)`, `Ok(false)`를 반환합니다
//! - `list`는 `id` 오름차순입니다

use async_trait::async_trait;

use crate::config::StorageBackend;
use crate::domain::entities::users::user::{NewUserRecord, User};
use crate::errors::AppError;

/// 사용자 데이터 액세스 리포지토리
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 저장소 종류
    fn backend(&self) -> StorageBackend;

    /// 모든 사용자를 `id` 오름차순으로 조회합니다.
    async fn list(&self) -> Result<Vec<User>, AppError>;

    /// 새 사용자를 저장하고 `id`가 할당된 엔티티를 반환합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DuplicateEmail` - 이메일이 이미 사용 중
    /// * `AppError::DatabaseError` - 저장소 오류
    async fn create(&self, record: NewUserRecord) -> Result<User, AppError>;

    /// `id`로 사용자를 조회합니다.
    async fn find(&self, id: i64) -> Result<Option<User>, AppError>;

    /// 사용자의 `name`, `email`을 갱신합니다.
    ///
    /// # Returns
    ///
    /// * `Ok(Some(User))` - 갱신된 사용자
    /// * `Ok(None)` - 해당 `id`의 사용자가 없음
    async fn update(&self, user: &User) -> Result<Option<User>, AppError>;

    /// 사용자를 삭제합니다. 삭제된 행이 있으면 `true`.
    async fn delete(&self, id: i64) -> Result<bool, AppError>;
}
