//! 비즈니스 로직 서비스 모듈
//!
//! - [`users`] - 사용자 리소스의 조회/생성/수정/삭제
//!
//! 서비스는 리포지토리를 `Arc<dyn UserRepository>`로 주입받으며,
//! actix-web의 `web::Data`를 통해 핸들러와 공유됩니다.

pub mod users;
