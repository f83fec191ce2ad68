//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 요청 제한, HTTP 헤더 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`rate_limiter`] - 고정 윈도우 방식 요청 제한기
//! - [`http_utils`] - 클라이언트 IP 추출 등 HTTP 요청 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::time::Duration;
//! use crate::utils::rate_limiter::RateLimiter;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! let limiter = RateLimiter::new(30, Duration::from_secs(60));
//! assert!(limiter.check("client-1"));
//!
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
pub mod http_utils;
pub mod rate_limiter;
