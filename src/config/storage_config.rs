//! 외부 파일 스토리지 및 Rate Limit 설정 관리 모듈
//!
//! 프로젝트 파일을 보관하는 써드파티 클라우드 스토리지 벤더와의 연동 설정과,
//! 해당 API를 보호하는 고정 윈도우 Rate Limit 예산을 관리합니다.

use std::env;
use std::time::Duration;

/// 외부 파일 스토리지 벤더 연동 설정
///
/// 프로젝트 도면, 납품물, 완료 보고서 등의 파일은 써드파티 클라우드
/// 스토리지에 저장되며, 이 서비스는 해당 벤더 API의 게이트웨이 역할만 합니다.
pub struct StorageConfig;

impl StorageConfig {
    /// 스토리지 벤더 API 베이스 URL을 반환합니다.
    ///
    /// 환경 변수 `STORAGE_API_BASE_URL` (기본값: "https://api.storage-vendor.example.com")
    pub fn base_url() -> String {
        env::var("STORAGE_API_BASE_URL")
            .unwrap_or_else(|_| "https://api.storage-vendor.example.com".to_string())
    }

    /// 스토리지 벤더 API 토큰을 반환합니다.
    ///
    /// 환경 변수 `STORAGE_API_TOKEN` (기본값: 빈 문자열 - 개발용)
    pub fn api_token() -> String {
        env::var("STORAGE_API_TOKEN").unwrap_or_default()
    }

    /// 외부 API 호출 타임아웃을 반환합니다.
    ///
    /// 환경 변수 `STORAGE_API_TIMEOUT_SECS` (기본값: 30초)
    pub fn request_timeout() -> Duration {
        let secs = env::var("STORAGE_API_TIMEOUT_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(30);
        Duration::from_secs(secs)
    }
}

/// 스토리지 API 보호용 Rate Limit 예산 설정
///
/// 두 개의 독립적인 고정 윈도우 예산을 제공합니다:
///
/// - **일반 작업**: 파일 목록 조회, 다운로드 URL 발급 등 (기본 30회 / 60초)
/// - **업로드**: 업로드는 벤더 측 부하가 크므로 더 엄격한 예산 (기본 10회 / 60초)
pub struct StorageRateLimitConfig;

impl StorageRateLimitConfig {
    /// 일반 작업 윈도우당 최대 요청 수 (기본값: 30)
    pub fn general_max_requests() -> u32 {
        env::var("STORAGE_RATE_LIMIT_GENERAL_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(30)
    }

    /// 업로드 윈도우당 최대 요청 수 (기본값: 10)
    pub fn upload_max_requests() -> u32 {
        env::var("STORAGE_RATE_LIMIT_UPLOAD_MAX")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10)
    }

    /// 고정 윈도우 길이 (기본값: 60초)
    pub fn window() -> Duration {
        let millis = env::var("STORAGE_RATE_LIMIT_WINDOW_MS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(60_000);
        Duration::from_millis(millis)
    }

    /// 만료 윈도우 정리(sweep) 주기 (기본값: 5분)
    ///
    /// 정리는 정합성이 아니라 메모리 관리 목적이므로 주기가 길어도 무방합니다.
    pub fn sweep_interval() -> Duration {
        let secs = env::var("STORAGE_RATE_LIMIT_SWEEP_SECS")
            .ok()
            .and_then(|v| v.parse::<u64>().ok())
            .unwrap_or(300);
        Duration::from_secs(secs)
    }
}
