//! 저장소 설정 관리 모듈
//!
//! 사용자 데이터를 어디에 보관할지 결정합니다.
//!
//! - `memory`: 프로세스 메모리의 맵 (재시작 시 초기화)
//! - `sqlite`: `users` 테이블을 가진 SQLite 파일
//!
//! SQLite 파일 위치는 `DATABASE_URL`로 직접 지정하거나,
//! 지정하지 않으면 실행 환경(모드 플래그)에 따라 테스트용/운영용 파일 중 하나가 선택됩니다.

use std::env;

use super::Environment;

/// 운영용 SQLite 파일
pub const PRODUCTION_DATABASE_URL: &str = "sqlite://users.db";

/// 테스트 환경용 SQLite 파일
pub const TEST_DATABASE_URL: &str = "sqlite://users_test.db";

/// 저장소 백엔드 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Sqlite,
}

impl StorageBackend {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "memory" | "in-memory" | "inmemory" => Some(StorageBackend::Memory),
            "sqlite" | "sql" => Some(StorageBackend::Sqlite),
            _ => None,
        }
    }

    /// 응답에 `id` 필드를 포함하는지 여부
    ///
    /// 영속 저장소만 `id`를 노출하고, 메모리 저장소는 `uri`로만 식별합니다.
    pub fn renders_id(&self) -> bool {
        matches!(self, StorageBackend::Sqlite)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StorageBackend::Memory => "memory",
            StorageBackend::Sqlite => "sqlite",
        }
    }
}

/// 저장소 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub database_url: String,
    pub max_connections: u32,
    /// 빈 저장소에 기본 사용자 2명을 생성할지 여부
    pub seed_users: bool,
}

impl StorageConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Self {
        Self::from_lookup(Environment::current(), |key| env::var(key).ok())
    }

    /// 주어진 조회 함수로 설정을 구성합니다.
    ///
    /// 잘못된 값은 경고 로그를 남기고 기본값으로 대체합니다.
    pub fn from_lookup<F>(environment: Environment, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => StorageBackend::parse(&raw).unwrap_or_else(|| {
                log::warn!("알 수 없는 STORAGE_BACKEND 값: {}. sqlite 사용", raw);
                StorageBackend::Sqlite
            }),
            None => StorageBackend::Sqlite,
        };

        let database_url = lookup("DATABASE_URL")
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| Self::database_url_for_env(&environment).to_string());

        let max_connections = lookup("DATABASE_MAX_CONNECTIONS")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|size| *size > 0)
            .unwrap_or(5);

        let seed_users = lookup("SEED_USERS")
            .and_then(|raw| parse_flag(&raw))
            .unwrap_or(backend == StorageBackend::Memory);

        Self {
            backend,
            database_url,
            max_connections,
            seed_users,
        }
    }

    /// 모드 플래그에 따른 데이터베이스 파일
    pub fn database_url_for_env(environment: &Environment) -> &'static str {
        if environment.is_test() {
            TEST_DATABASE_URL
        } else {
            PRODUCTION_DATABASE_URL
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(environment: Environment, vars: &[(&str, &str)]) -> StorageConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        StorageConfig::from_lookup(environment, |key| vars.get(key).cloned())
    }

    #[test]
    fn test_defaults_to_production_sqlite_file() {
        let config = config_from(Environment::Production, &[]);

        assert_eq!(config.backend, StorageBackend::Sqlite);
        assert_eq!(config.database_url, PRODUCTION_DATABASE_URL);
        assert_eq!(config.max_connections, 5);
        assert!(!config.seed_users);
    }

    #[test]
    fn test_mode_flag_selects_test_database() {
        let config = config_from(Environment::Test, &[]);
        assert_eq!(config.database_url, TEST_DATABASE_URL);
    }

    #[test]
    fn test_database_url_override_wins() {
        let config = config_from(Environment::Test, &[("DATABASE_URL", "sqlite::memory:")]);
        assert_eq!(config.database_url, "sqlite::memory:");
    }

    #[test]
    fn test_memory_backend_seeds_by_default() {
        let config = config_from(Environment::Development, &[("STORAGE_BACKEND", "memory")]);

        assert_eq!(config.backend, StorageBackend::Memory);
        assert!(config.seed_users);
    }

    #[test]
    fn test_seed_flag_and_pool_size_overrides() {
        let config = config_from(
            Environment::Development,
            &[
                ("STORAGE_BACKEND", "memory"),
                ("SEED_USERS", "off"),
                ("DATABASE_MAX_CONNECTIONS", "0"),
            ],
        );

        assert!(!config.seed_users);
        assert_eq!(config.max_connections, 5);
    }

    #[test]
    fn test_unknown_backend_falls_back_to_sqlite() {
        let config = config_from(Environment::Development, &[("STORAGE_BACKEND", "mongodb")]);
        assert_eq!(config.backend, StorageBackend::Sqlite);
    }

    #[test]
    fn test_only_sqlite_renders_id() {
        assert!(StorageBackend::Sqlite.renders_id());
        assert!(!StorageBackend::Memory.renders_id());
    }
}
