//! 미들웨어 모듈
//!
//! ActixWeb 애플리케이션의 요청 처리 파이프라인에서 사용되는 미들웨어들을 제공합니다.
//! Spring Boot의 Filter와 Interceptor와 유사한 역할을 수행하며,
//! 횡단 관심사(Cross-cutting concerns)를 처리합니다.
//!
//! # 제공 미들웨어
//!
//! ### 1. 요청 제한 미들웨어 (RateLimitMiddleware)
//! - 클라이언트 IP별 고정 윈도우 요청 제한
//! - 일반/업로드 두 가지 예산 선택 지원
//! - 예산 소진 시 429 Too Many Requests 응답
//!
//! # 사용 방법
//!
//! ## 특정 스코프에만 적용
//! ```rust,ignore
//! use actix_web::{web, App};
//! use crate::middlewares::RateLimitMiddleware;
//!
//! App::new()
//!     .service(
//!         web::scope("/api/v1/files")
//!             .wrap(RateLimitMiddleware::general())
//!             .route("", web::get().to(list_files))
//!     )
//! ```

pub mod rate_limit_middleware;
mod rate_limit_inner;

// 미들웨어 재export
pub use rate_limit_middleware::RateLimitMiddleware;
