//! # 메모리 사용자 리포지토리
//!
//! `id`를 키로 하는 `BTreeMap`에 사용자를 보관합니다.
//! 모든 연산은 잠금을 한 번만 잡으므로 `id` 할당과 이메일 중복 검사가 한 연산 안에서 끝납니다.
//! 재시작하면 데이터가 사라집니다.

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::user_repo::UserRepository;
use crate::config::StorageBackend;
use crate::domain::entities::users::user::{NewUserRecord, User};
use crate::errors::AppError;

#[derive(Debug, Default)]
pub struct MemoryUserRepository {
    users: RwLock<BTreeMap<i64, User>>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<i64, User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<i64, User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::InternalError("사용자 저장소 잠금이 손상되었습니다".to_string()))
    }
}

fn email_taken(users: &BTreeMap<i64, User>, email: &str, except_id: Option<i64>) -> bool {
    users
        .values()
        .any(|user| user.email == email && Some(user.id) != except_id)
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Memory
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        Ok(self.read()?.values().cloned().collect())
    }

    async fn create(&self, record: NewUserRecord) -> Result<User, AppError> {
        let mut users = self.write()?;

        if email_taken(&users, &record.email, None) {
            return Err(AppError::DuplicateEmail);
        }

        // 가장 큰 id + 1 (비어 있으면 1)
        let id = users.keys().next_back().map_or(1, |last| last + 1);
        let user = record.with_id(id);
        users.insert(id, user.clone());

        Ok(user)
    }

    async fn find(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.read()?.get(&id).cloned())
    }

    async fn update(&self, user: &User) -> Result<Option<User>, AppError> {
        let mut users = self.write()?;

        if !users.contains_key(&user.id) {
            return Ok(None);
        }

        if email_taken(&users, &user.email, Some(user.id)) {
            return Err(AppError::DuplicateEmail);
        }

        let Some(stored) = users.get_mut(&user.id) else {
            return Ok(None);
        };
        stored.name = user.name.clone();
        stored.email = user.email.clone();

        Ok(Some(stored.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        Ok(self.write()?.remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_ids_follow_max_existing_id() {
        let repo = MemoryUserRepository::new();

        let first = repo.create(record("user1", "user1@example.com")).await.unwrap();
        let second = repo.create(record("user2", "user2@example.com")).await.unwrap();
        assert_eq!((first.id, second.id), (1, 2));

        // 중간 id를 지워도 다음 id는 최댓값 + 1
        repo.delete(1).await.unwrap();
        let third = repo.create(record("user3", "user3@example.com")).await.unwrap();
        assert_eq!(third.id, 3);
    }

    #[actix_web::test]
    async fn test_list_in_id_order() {
        let repo = MemoryUserRepository::new();
        repo.create(record("a", "a@example.com")).await.unwrap();
        repo.create(record("b", "b@example.com")).await.unwrap();

        let names: Vec<String> = repo.list().await.unwrap().into_iter().map(|u| u.name).collect();
        assert_eq!(names, vec!["a", "b"]);
    }

    #[actix_web::test]
    async fn test_duplicate_email_rejected() {
        let repo = MemoryUserRepository::new();
        repo.create(record("a", "same@example.com")).await.unwrap();

        let error = repo.create(record("b", "same@example.com")).await.unwrap_err();
        assert!(matches!(error, AppError::DuplicateEmail));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_keeps_password_hash() {
        let repo = MemoryUserRepository::new();
        let mut user = repo.create(record("a", "a@example.com")).await.unwrap();

        user.name = "renamed".to_string();
        user.password_hash = "ignored".to_string();
        let updated = repo.update(&user).await.unwrap().unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.password_hash, "hash");
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_rejected() {
        let repo = MemoryUserRepository::new();
        repo.create(record("a", "a@example.com")).await.unwrap();
        let mut b = repo.create(record("b", "b@example.com")).await.unwrap();

        // 자기 자신의 이메일로 갱신은 허용
        assert!(repo.update(&b).await.unwrap().is_some());

        b.email = "a@example.com".to_string();
        assert!(matches!(repo.update(&b).await.unwrap_err(), AppError::DuplicateEmail));
    }

    #[actix_web::test]
    async fn test_missing_user() {
        let repo = MemoryUserRepository::new();
        let ghost = record("ghost", "ghost@example.com").with_id(42);

        assert!(repo.find(42).await.unwrap().is_none());
        assert!(repo.update(&ghost).await.unwrap().is_none());
        assert!(!repo.delete(42).await.unwrap());
    }
}
