//! 공통 유틸리티 함수 모듈
//!
//! # Modules
//!
//! - [`string_utils`] - 요청 필드 정리, 로그용 이메일 마스킹
//! - [`display_terminal`] - 시작 요약 터미널 출력

pub mod string_utils;
pub mod display_terminal;
