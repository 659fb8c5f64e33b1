//! SQLite 연결 관리 모듈
//!
//! `sqlx` 커넥션 풀을 생성하고, 시작 시점에 `users` 테이블이 없으면 만듭니다.
//! 스키마 마이그레이션 도구는 사용하지 않으며 테이블은 하나뿐입니다.

use std::str::FromStr;
use std::time::Duration;

use log::info;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};

use crate::config::StorageConfig;
use crate::errors::AppError;

/// `users` 테이블 스키마
pub const USERS_TABLE_DDL: &str = r#"
CREATE TABLE IF NOT EXISTS users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    email TEXT NOT NULL UNIQUE,
    password TEXT NOT NULL
)
"#;

/// SQLite 데이터베이스 핸들
///
/// 내부의 `SqlitePool`은 참조 카운팅되므로 `Clone` 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
    database_url: String,
}

impl Database {
    /// 설정에 따라 풀을 생성하고 스키마를 준비합니다.
    ///
    /// 파일이 없으면 새로 만듭니다. `:memory:` URL은 연결마다 별도 데이터베이스가
    /// 생기므로 연결 1개로 고정합니다.
    pub async fn connect(config: &StorageConfig) -> Result<Self, AppError> {
        let options = SqliteConnectOptions::from_str(&config.database_url)?
            .create_if_missing(true);

        let max_connections = if is_memory_url(&config.database_url) {
            1
        } else {
            config.max_connections
        };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(None::<Duration>)
            .max_lifetime(None::<Duration>)
            .connect_with(options)
            .await?;

        let database = Self {
            pool,
            database_url: config.database_url.clone(),
        };
        database.ensure_schema().await?;

        info!("✅ SQLite 연결 성공: {} (최대 연결 {})", database.database_url, max_connections);

        Ok(database)
    }

    /// 프로세스 메모리에만 존재하는 SQLite 데이터베이스
    pub async fn in_memory() -> Result<Self, AppError> {
        let config = StorageConfig {
            backend: crate::config::StorageBackend::Sqlite,
            database_url: "sqlite::memory:".to_string(),
            max_connections: 1,
            seed_users: false,
        };
        Self::connect(&config).await
    }

    async fn ensure_schema(&self) -> Result<(), AppError> {
        sqlx::query(USERS_TABLE_DDL).execute(&self.pool).await?;
        Ok(())
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    pub fn database_url(&self) -> &str {
        &self.database_url
    }
}

fn is_memory_url(url: &str) -> bool {
    url.contains(":memory:") || url.contains("mode=memory")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_url_detection() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://file?mode=memory"));
        assert!(!is_memory_url("sqlite://users.db"));
    }

    #[actix_web::test]
    async fn test_in_memory_database_has_users_table() {
        let database = Database::in_memory().await.unwrap();

        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM users")
            .fetch_one(database.pool())
            .await
            .unwrap();

        assert_eq!(count.0, 0);
    }
}
