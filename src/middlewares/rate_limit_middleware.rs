//! 요청 제한 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 클라이언트 IP별로 고정 윈도우 요청 제한을
//! 적용합니다. 예산 소진 시 429 응답을 반환하며 핸들러는 호출되지 않습니다.

use std::future::{ready, Ready};
use std::rc::Rc;

use actix_web::{
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    Error, Result,
    body::EitherBody,
};
use crate::middlewares::rate_limit_inner::RateLimitMiddlewareService;

/// 적용할 요청 제한 예산
///
/// 공유 저장소([`crate::utils::rate_limiter::StorageRateLimits`])의
/// 두 예산 중 어느 쪽으로 계수할지 선택합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitBudget {
    /// 일반 작업 예산 (기본 30회/60초)
    General,
    /// 업로드 예산 (기본 10회/60초)
    Upload,
}

impl RateLimitBudget {
    /// 제한 키 접두사를 반환합니다. 예산별로 키 공간을 분리합니다.
    pub fn key_prefix(&self) -> &'static str {
        match self {
            RateLimitBudget::General => "general",
            RateLimitBudget::Upload => "upload",
        }
    }
}

/// 클라이언트 IP별 요청 제한 미들웨어
pub struct RateLimitMiddleware {
    /// 적용할 예산
    budget: RateLimitBudget,
}

impl RateLimitMiddleware {
    /// 지정한 예산으로 미들웨어 생성
    pub fn new(budget: RateLimitBudget) -> Self {
        Self { budget }
    }

    /// 일반 예산 미들웨어 생성
    pub fn general() -> Self {
        Self::new(RateLimitBudget::General)
    }

    /// 업로드 예산 미들웨어 생성
    pub fn upload() -> Self {
        Self::new(RateLimitBudget::Upload)
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for RateLimitMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RateLimitMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RateLimitMiddlewareService {
            service: Rc::new(service),
            budget: self.budget,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_key_prefixes_are_distinct() {
        assert_ne!(
            RateLimitBudget::General.key_prefix(),
            RateLimitBudget::Upload.key_prefix()
        );
    }

    #[test]
    fn test_constructors_select_budget() {
        assert_eq!(RateLimitMiddleware::general().budget, RateLimitBudget::General);
        assert_eq!(RateLimitMiddleware::upload().budget, RateLimitBudget::Upload);
    }
}
