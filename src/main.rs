//! 사용자 관리 API 메인 애플리케이션
//!
//! Actix-web 기반의 HTTP 서버를 구동하고 저장소와 서비스를 초기화합니다.
//! 저장소는 `STORAGE_BACKEND`에 따라 메모리 또는 SQLite를 사용합니다.

use std::io;
use std::sync::Arc;

use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use users_api::config::{PasswordConfig, ServerConfig, StorageBackend, StorageConfig};
use users_api::db::Database;
use users_api::errors::AppError;
use users_api::repositories::users::{MemoryUserRepository, SqliteUserRepository, UserRepository};
use users_api::routes::configure_all_routes;
use users_api::services::users::UserService;
use users_api::utils::display_terminal::print_startup_summary;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // 환경 설정 및 로깅 초기화
    load_env_file();
    init_logging();

    info!("🚀 사용자 API 시작중...");

    let storage_config = StorageConfig::from_env();

    let (user_repo, location) = initialize_repository(&storage_config)
        .await
        .map_err(|e| {
            error!("저장소 초기화 실패: {}", e);
            io::Error::other(e.to_string())
        })?;

    let user_service = UserService::new(user_repo, PasswordConfig::bcrypt_cost());

    let seeded = if storage_config.seed_users {
        user_service.seed_default_users().await.map_err(|e| {
            error!("기본 사용자 생성 실패: {}", e);
            io::Error::other(e.to_string())
        })?
    } else {
        0
    };

    info!("✅ 서비스 초기화 완료");

    print_startup_summary(
        storage_config.backend.as_str(),
        &location,
        &ServerConfig::bind_address(),
        seeded,
    );

    // HTTP 서버 시작
    start_http_server(web::Data::new(user_service)).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(user_service: web::Data<UserService>) -> io::Result<()> {
    let bind_address = ServerConfig::bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(user_service.clone())
            .configure(configure_all_routes)
    })
    .bind(&bind_address)?
    .workers(ServerConfig::workers())
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// # Environment Variables
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과는 표준 에러로 출력합니다.
fn load_env_file() {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    eprintln!("Current profile: {}", profile);

    match profile.as_str() {
        "prod" => match dotenv::from_filename(".env.prod") {
            Ok(_) => eprintln!(".env.prod 파일 로드 됨"),
            Err(e) => eprintln!(".env.prod 파일 로드 실패: {}", e),
        },
        "dev" => match dotenv::from_filename(".env.dev") {
            Ok(_) => eprintln!(".env.dev 파일 로드 됨"),
            Err(e) => eprintln!(".env.dev 파일 로드 실패: {}", e),
        },
        _ => {
            dotenv().ok();
            eprintln!("기본 .env 파일 로드");
        }
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
///
/// ```bash
/// RUST_LOG=users_api::services=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// 설정된 백엔드의 리포지토리를 생성합니다
///
/// 리포지토리와 함께 시작 요약에 표시할 저장 위치를 반환합니다.
async fn initialize_repository(
    config: &StorageConfig,
) -> Result<(Arc<dyn UserRepository>, String), AppError> {
    match config.backend {
        StorageBackend::Memory => {
            info!("🧠 메모리 저장소 사용");
            Ok((Arc::new(MemoryUserRepository::new()), "process memory".to_string()))
        }
        StorageBackend::Sqlite => {
            info!("📡 데이터베이스 연결 중...");
            let database = Database::connect(config).await?;
            let location = database.database_url().to_string();
            Ok((Arc::new(SqliteUserRepository::new(database)), location))
        }
    }
}

/// CORS 설정을 구성합니다
///
/// 로컬 개발용 프론트엔드 Origin만 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allowed_origin("http://localhost:3000")
        .allowed_origin("http://127.0.0.1:3000")
        .allowed_origin("http://localhost:8080")
        .allowed_origin("http://127.0.0.1:8080")
        .allowed_methods(vec!["GET", "HEAD", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![header::ACCEPT, header::CONTENT_TYPE])
        .max_age(3600)
}
