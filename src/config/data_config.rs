//! 데이터 및 서버 설정 관리 모듈
//!
//! 서버 바인딩 등 인프라 관련 설정을 관리합니다.

use std::env;

/// HTTP 서버 설정
pub struct ServerConfig;

impl ServerConfig {
    /// 서버 바인딩 호스트를 반환합니다.
    ///
    /// 환경 변수 `HOST` (기본값: "127.0.0.1")
    pub fn host() -> String {
        env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string())
    }

    /// 서버 바인딩 포트를 반환합니다.
    ///
    /// 환경 변수 `PORT` (기본값: 8080)
    pub fn port() -> u16 {
        env::var("PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080)
    }

    /// "호스트:포트" 형식의 바인딩 주소를 반환합니다.
    pub fn bind_address() -> String {
        format!("{}:{}", Self::host(), Self::port())
    }

    /// 워커 스레드 수를 반환합니다.
    ///
    /// 환경 변수 `WORKERS` (기본값: 4)
    pub fn workers() -> usize {
        env::var("WORKERS")
            .ok()
            .and_then(|w| w.parse::<usize>().ok())
            .unwrap_or(4)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bind_address_combines_host_and_port() {
        // HOST/PORT 미설정 시 기본값으로 조합
        let address = ServerConfig::bind_address();
        assert!(address.contains(':'));
        assert!(address.ends_with(&ServerConfig::port().to_string()));
    }
}
