//! # 사용자 관리 서비스 구현
//!
//! 사용자 리소스의 조회, 생성, 전체/부분 수정, 삭제를 구현합니다.
//!
//! ## 서비스 구조
//!
//! ```text
//! ┌───────────────────────────────────────────────────────┐
//! │                      UserService                      │
//! │  • lookup-or-404 (find_or_404)                        │
//! │  • bcrypt 해싱 (create_user)                          │
//! │  • 전체 교체 / 부분 수정 규칙                         │
//! │  • UserResponse 렌더링 (id 노출 여부는 저장소별)      │
//! └───────────────────────────────────────────────────────┘
//!                            │
//!                            ▼
//! ┌───────────────────────────────────────────────────────┐
//! │          Arc<dyn UserRepository>                      │
//! │  MemoryUserRepository  |  SqliteUserRepository        │
//! └───────────────────────────────────────────────────────┘
//! ```
//!
//! ## 상태
//!
//! 사용자는 `Existing`, `Deleted` 두 상태만 가집니다.
//! 삭제 이후 같은 `id`에 대한 모든 연산은 `AppError::NotFound`입니다.

use std::sync::Arc;
use std::time::Instant;

use bcrypt::hash;

use crate::config::StorageBackend;
use crate::domain::dto::users::request::{NewUser, UserPatch, UserReplacement};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::{NewUserRecord, User};
use crate::errors::{AppError, ErrorContext};
use crate::repositories::users::UserRepository;
use crate::utils::string_utils::mask_email;

/// 시드 사용자 기본 비밀번호
pub const SEED_PASSWORD: &str = "changeme123";

/// 사용자 관리 비즈니스 로직 서비스
///
/// 모든 메서드는 `Result<T, AppError>`를 반환합니다.
///
/// - **NotFound**: 해당 `id`의 사용자가 없음
/// - **DuplicateEmail**: 다른 사용자가 이미 쓰는 이메일
/// - **DatabaseError / InternalError**: 저장소 또는 해싱 실패
#[derive(Clone)]
pub struct UserService {
    user_repo: Arc<dyn UserRepository>,
    bcrypt_cost: u32,
    render_id: bool,
}

impl UserService {
    /// 리포지토리를 주입하여 서비스를 생성합니다.
    ///
    /// 응답의 `id` 노출 여부는 리포지토리의 백엔드 종류로 결정됩니다.
    pub fn new(user_repo: Arc<dyn UserRepository>, bcrypt_cost: u32) -> Self {
        let render_id = user_repo.backend().renders_id();

        Self {
            user_repo,
            bcrypt_cost,
            render_id,
        }
    }

    /// 저장소 종류
    pub fn backend(&self) -> StorageBackend {
        self.user_repo.backend()
    }

    fn render(&self, user: User) -> UserResponse {
        UserResponse::render(user, self.render_id)
    }

    /// lookup-or-404
    ///
    /// 사용자가 없으면 요청 전체를 `AppError::NotFound`로 종료합니다.
    async fn find_or_404(&self, id: i64) -> Result<User, AppError> {
        self.user_repo
            .find(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// 전체 사용자 목록
    pub async fn list_users(&self) -> Result<Vec<UserResponse>, AppError> {
        let users = self.user_repo.list().await?;

        Ok(users.into_iter().map(|user| self.render(user)).collect())
    }

    /// 새 사용자 생성
    ///
    /// 비밀번호를 bcrypt로 해싱한 뒤 저장합니다. 평문 비밀번호는 저장되지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 생성된 사용자 (`uri` 포함)
    /// * `Err(AppError::DuplicateEmail)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 로깅
    ///
    /// ```text
    /// [INFO] Password hashing took: 3.2ms
    /// [INFO] 사용자 생성: id=3, email=d***@wow.com
    /// ```
    pub async fn create_user(&self, new_user: NewUser) -> Result<UserResponse, AppError> {
        let hash_start = Instant::now();
        let password_hash = hash(&new_user.password, self.bcrypt_cost)
            .context("비밀번호 해싱 실패")?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let record = NewUserRecord {
            name: new_user.name,
            email: new_user.email,
            password_hash,
        };

        let created = self.user_repo.create(record).await?;
        log::info!("사용자 생성: id={}, email={}", created.id, mask_email(&created.email));

        Ok(self.render(created))
    }

    /// ID로 사용자 조회
    pub async fn get_user(&self, id: i64) -> Result<UserResponse, AppError> {
        let user = self.find_or_404(id).await?;

        Ok(self.render(user))
    }

    /// 존재 여부만 확인 (HEAD)
    pub async fn ensure_exists(&self, id: i64) -> Result<(), AppError> {
        self.find_or_404(id).await.map(|_| ())
    }

    /// 전체 교체 (PUT)
    ///
    /// `name`, `email`을 무조건 덮어씁니다. 비밀번호는 바뀌지 않습니다.
    pub async fn replace_user(
        &self,
        id: i64,
        replacement: UserReplacement,
    ) -> Result<UserResponse, AppError> {
        let mut user = self.find_or_404(id).await?;

        user.name = replacement.name;
        user.email = replacement.email;

        self.save(user).await
    }

    /// 부분 수정 (PATCH)
    ///
    /// 값이 있는 필드만 교체하고 나머지는 기존 값을 유지합니다.
    pub async fn patch_user(&self, id: i64, patch: UserPatch) -> Result<UserResponse, AppError> {
        let mut user = self.find_or_404(id).await?;

        if patch.is_empty() {
            log::debug!("변경 사항 없는 PATCH: id={}", id);
            return Ok(self.render(user));
        }

        if let Some(name) = patch.name {
            user.name = name;
        }
        if let Some(email) = patch.email {
            user.email = email;
        }

        self.save(user).await
    }

    async fn save(&self, user: User) -> Result<UserResponse, AppError> {
        let updated = self
            .user_repo
            .update(&user)
            .await?
            // 조회와 갱신 사이에 삭제된 경우
            .ok_or(AppError::NotFound)?;

        log::info!("사용자 수정: id={}", updated.id);

        Ok(self.render(updated))
    }

    /// 사용자 삭제
    ///
    /// 물리적 삭제이며 복구할 수 없습니다.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        let deleted = self.user_repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound);
        }

        log::info!("사용자 삭제: id={}", id);
        Ok(())
    }

    /// 저장소가 비어 있으면 기본 사용자 2명(`user1`, `user2`)을 생성합니다.
    ///
    /// 생성한 사용자 수를 반환합니다.
    pub async fn seed_default_users(&self) -> Result<usize, AppError> {
        if !self.user_repo.list().await?.is_empty() {
            return Ok(0);
        }

        let password_hash = hash(SEED_PASSWORD, self.bcrypt_cost).context("비밀번호 해싱 실패")?;

        for n in 1..=2 {
            self.user_repo
                .create(NewUserRecord {
                    name: format!("user{}", n),
                    email: format!("user{}@example.com", n),
                    password_hash: password_hash.clone(),
                })
                .await?;
        }

        log::info!("기본 사용자 2명 생성");
        Ok(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::Database;
    use crate::repositories::users::{MemoryUserRepository, SqliteUserRepository};

    async fn seeded_memory_service() -> UserService {
        let service = UserService::new(Arc::new(MemoryUserRepository::new()), 4);
        service.seed_default_users().await.unwrap();
        service
    }

    fn new_user(name: &str, email: &str) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            password: "12345678".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_seed_only_when_empty() {
        let service = seeded_memory_service().await;

        assert_eq!(service.list_users().await.unwrap().len(), 2);
        assert_eq!(service.seed_default_users().await.unwrap(), 0);
        assert_eq!(service.list_users().await.unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_create_hashes_password() {
        let repo = Arc::new(MemoryUserRepository::new());
        let service = UserService::new(repo.clone(), 4);

        let created = service.create_user(new_user("doge", "doge@wow.com")).await.unwrap();
        assert_eq!(created.uri, "/users/1");
        assert!(created.id.is_none());

        let stored = repo.find(1).await.unwrap().unwrap();
        assert_ne!(stored.password_hash, "12345678");
        assert!(bcrypt::verify("12345678", &stored.password_hash).unwrap());
    }

    #[actix_web::test]
    async fn test_list_grows_by_one_with_unique_ids() {
        let service = seeded_memory_service().await;

        let created = service.create_user(new_user("doge", "doge@wow.com")).await.unwrap();
        let users = service.list_users().await.unwrap();

        assert_eq!(users.len(), 3);
        assert_eq!(created.uri, "/users/3");
        assert_eq!(users.iter().filter(|u| u.uri == created.uri).count(), 1);
    }

    #[actix_web::test]
    async fn test_patch_name_only_keeps_email() {
        let service = seeded_memory_service().await;

        let patched = service
            .patch_user(1, UserPatch { name: Some("X".to_string()), email: None })
            .await
            .unwrap();

        assert_eq!(patched.name, "X");
        assert_eq!(patched.email, "user1@example.com");
    }

    #[actix_web::test]
    async fn test_empty_patch_changes_nothing() {
        let service = seeded_memory_service().await;

        let patched = service.patch_user(2, UserPatch::default()).await.unwrap();
        assert_eq!(patched.name, "user2");
        assert_eq!(patched.email, "user2@example.com");
    }

    #[actix_web::test]
    async fn test_replace_sets_both_fields() {
        let service = seeded_memory_service().await;

        let replaced = service
            .replace_user(1, UserReplacement { name: "X".to_string(), email: "Y".to_string() })
            .await
            .unwrap();

        assert_eq!(replaced.name, "X");
        assert_eq!(replaced.email, "Y");
        assert_eq!(service.get_user(1).await.unwrap(), replaced);
    }

    #[actix_web::test]
    async fn test_deleted_user_is_gone_for_every_operation() {
        let service = seeded_memory_service().await;

        service.delete_user(2).await.unwrap();

        assert!(matches!(service.get_user(2).await, Err(AppError::NotFound)));
        assert!(matches!(service.ensure_exists(2).await, Err(AppError::NotFound)));
        assert!(matches!(service.delete_user(2).await, Err(AppError::NotFound)));
        assert!(matches!(
            service.patch_user(2, UserPatch::default()).await,
            Err(AppError::NotFound)
        ));
        assert!(matches!(
            service
                .replace_user(2, UserReplacement { name: "X".to_string(), email: "Y".to_string() })
                .await,
            Err(AppError::NotFound)
        ));

        let first = service.get_user(1).await.unwrap();
        assert_eq!(first.name, "user1");
        assert_eq!(first.email, "user1@example.com");
    }

    #[actix_web::test]
    async fn test_sqlite_backend_renders_id() {
        let repo = SqliteUserRepository::new(Database::in_memory().await.unwrap());
        let service = UserService::new(Arc::new(repo), 4);

        let created = service.create_user(new_user("doge", "doge@wow.com")).await.unwrap();

        assert_eq!(created.id, Some(1));
        assert_eq!(created.uri, "/users/1");
    }

    #[actix_web::test]
    async fn test_duplicate_email_on_create() {
        let service = seeded_memory_service().await;

        let error = service
            .create_user(new_user("copy", "user1@example.com"))
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::DuplicateEmail));
    }
}
