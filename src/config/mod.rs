//! # Configuration Module
//!
//! 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, 비밀번호 해싱 설정
//! - [`storage_config`] - 저장소 백엔드 선택, SQLite 경로, 시드 데이터 설정
//!
//! ## 환경 변수
//!
//! | 변수 | 기본값 | 설명 |
//! |------|--------|------|
//! | `ENVIRONMENT` | `production` | `development`, `test`, `staging`, `production` |
//! | `HOST` | `127.0.0.1` | 바인딩 주소 |
//! | `PORT` | `8080` | 바인딩 포트 |
//! | `WORKERS` | `4` | actix 워커 수 |
//! | `BCRYPT_COST` | 환경별 | 4~15 범위만 허용 |
//! | `STORAGE_BACKEND` | `sqlite` | `memory` 또는 `sqlite` |
//! | `DATABASE_URL` | 환경별 | 지정 시 모드 플래그보다 우선 |
//! | `DATABASE_MAX_CONNECTIONS` | `5` | SQLite 풀 크기 |
//! | `SEED_USERS` | 백엔드별 | 빈 저장소에 기본 사용자 2명 생성 |
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{Environment, ServerConfig, StorageConfig};
//!
//! let env = Environment::current();
//! let storage = StorageConfig::from_env();
//! println!("{:?} 환경, 저장소: {:?}", env, storage.backend);
//! println!("바인딩: {}", ServerConfig::bind_address());
//! ```

pub mod data_config;
pub mod storage_config;

pub use data_config::*;
pub use storage_config::*;
