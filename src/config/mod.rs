//! # Configuration Module
//!
//! 백엔드 서비스의 설정 관리를 담당하는 모듈입니다.
//! 환경 변수 기반의 설정값들을 중앙집중식으로 관리합니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 서버 바인딩 관련 설정
//! - [`storage_config`] - 외부 파일 스토리지 연동 및 Rate Limit 예산 설정
//!
//! ## 설계 원칙
//!
//! ### 1. 환경 분리
//!
//! `PROFILE` 환경 변수에 따라 `.env.dev` / `.env.prod`를 구분 로드하여
//! 개발과 프로덕션 설정을 분리합니다.
//!
//! ### 2. 안전한 기본값
//!
//! 모든 설정은 개발 환경에서 바로 동작하는 기본값을 가지며,
//! 프로덕션에서는 환경 변수로 덮어씁니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export PORT="8080"
//! export WORKERS="4"
//!
//! # 스토리지 벤더 연동
//! export STORAGE_API_BASE_URL="https://api.storage-vendor.example.com"
//! export STORAGE_API_TOKEN="your-api-token"
//!
//! # Rate Limit 예산 (선택)
//! export STORAGE_RATE_LIMIT_GENERAL_MAX="30"
//! export STORAGE_RATE_LIMIT_UPLOAD_MAX="10"
//! export STORAGE_RATE_LIMIT_WINDOW_MS="60000"
//! ```

pub mod data_config;
pub mod storage_config;

pub use data_config::*;
pub use storage_config::*;
