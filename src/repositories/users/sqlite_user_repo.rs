//! # SQLite 사용자 리포지토리
//!
//! `users(id, name, email, password)` 테이블을 사용합니다.
//!
//! ## 트랜잭션
//!
//! 쓰기 연산(`create`, `update`, `delete`)은 각각 하나의 트랜잭션으로 실행됩니다.
//! 성공하면 커밋하고, 에러로 함수가 끝나면 트랜잭션이 drop되면서 롤백됩니다.
//! 요청 간에 트랜잭션을 공유하지 않습니다.
//!
//! ## 제약 조건
//!
//! - `id INTEGER PRIMARY KEY AUTOINCREMENT`: 삭제된 id는 재사용되지 않음
//! - `email UNIQUE`: 위반 시 `AppError::DuplicateEmail`로 변환

use async_trait::async_trait;
use log::debug;

use super::user_repo::UserRepository;
use crate::config::StorageBackend;
use crate::db::Database;
use crate::domain::entities::users::user::{NewUserRecord, User};
use crate::errors::AppError;

const SELECT_COLUMNS: &str = "SELECT id, name, email, password FROM users";

#[derive(Clone)]
pub struct SqliteUserRepository {
    db: Database,
}

impl SqliteUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    fn backend(&self) -> StorageBackend {
        StorageBackend::Sqlite
    }

    async fn list(&self) -> Result<Vec<User>, AppError> {
        let users = sqlx::query_as::<_, User>(&format!("{} ORDER BY id", SELECT_COLUMNS))
            .fetch_all(self.db.pool())
            .await?;

        Ok(users)
    }

    async fn create(&self, record: NewUserRecord) -> Result<User, AppError> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query("INSERT INTO users (name, email, password) VALUES (?, ?, ?)")
            .bind(&record.name)
            .bind(&record.email)
            .bind(&record.password_hash)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        let id = result.last_insert_rowid();
        debug!("users 행 추가: id={}", id);

        Ok(record.with_id(id))
    }

    async fn find(&self, id: i64) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(id)
            .fetch_optional(self.db.pool())
            .await?;

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<Option<User>, AppError> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query("UPDATE users SET name = ?, email = ? WHERE id = ?")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.id)
            .execute(&mut *tx)
            .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let updated = sqlx::query_as::<_, User>(&format!("{} WHERE id = ?", SELECT_COLUMNS))
            .bind(user.id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(Some(updated))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut tx = self.db.pool().begin().await?;

        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn repo() -> SqliteUserRepository {
        SqliteUserRepository::new(Database::in_memory().await.unwrap())
    }

    fn record(name: &str, email: &str) -> NewUserRecord {
        NewUserRecord {
            name: name.to_string(),
            email: email.to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_create_and_find() {
        let repo = repo().await;

        let created = repo.create(record("user1", "user1@example.com")).await.unwrap();
        let found = repo.find(created.id).await.unwrap().unwrap();

        assert_eq!(found, created);
        assert_eq!(found.password_hash, "hash");
    }

    #[actix_web::test]
    async fn test_autoincrement_ids_are_not_reused() {
        let repo = repo().await;

        let first = repo.create(record("a", "a@example.com")).await.unwrap();
        let second = repo.create(record("b", "b@example.com")).await.unwrap();
        assert!(second.id > first.id);

        repo.delete(second.id).await.unwrap();
        let third = repo.create(record("c", "c@example.com")).await.unwrap();
        assert!(third.id > second.id);
    }

    #[actix_web::test]
    async fn test_unique_email_maps_to_duplicate() {
        let repo = repo().await;
        repo.create(record("a", "same@example.com")).await.unwrap();

        let error = repo.create(record("b", "same@example.com")).await.unwrap_err();
        assert!(matches!(error, AppError::DuplicateEmail));
        assert_eq!(repo.list().await.unwrap().len(), 1);
    }

    #[actix_web::test]
    async fn test_update_returns_stored_row() {
        let repo = repo().await;
        let mut user = repo.create(record("a", "a@example.com")).await.unwrap();

        user.name = "renamed".to_string();
        user.password_hash = "ignored".to_string();
        let updated = repo.update(&user).await.unwrap().unwrap();

        assert_eq!(updated.name, "renamed");
        assert_eq!(updated.password_hash, "hash");
    }

    #[actix_web::test]
    async fn test_update_to_taken_email_is_rolled_back() {
        let repo = repo().await;
        repo.create(record("a", "a@example.com")).await.unwrap();
        let mut b = repo.create(record("b", "b@example.com")).await.unwrap();

        b.name = "changed".to_string();
        b.email = "a@example.com".to_string();
        assert!(matches!(repo.update(&b).await.unwrap_err(), AppError::DuplicateEmail));

        let stored = repo.find(b.id).await.unwrap().unwrap();
        assert_eq!(stored.name, "b");
        assert_eq!(stored.email, "b@example.com");
    }

    #[actix_web::test]
    async fn test_missing_user() {
        let repo = repo().await;
        let ghost = record("ghost", "ghost@example.com").with_id(42);

        assert!(repo.find(42).await.unwrap().is_none());
        assert!(repo.update(&ghost).await.unwrap().is_none());
        assert!(!repo.delete(42).await.unwrap());
    }
}
