//! RateLimitMiddleware 제한 로직의 핵심적인 기능
use std::rc::Rc;
use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse};
use actix_web::{Error, HttpResponse};
use futures_util::future::LocalBoxFuture;
use crate::core::registry::ServiceLocator;
use crate::domain::dto::ApiResponse;
use crate::middlewares::rate_limit_middleware::RateLimitBudget;
use crate::utils::http_utils::extract_client_ip_from_service_request;
use crate::utils::rate_limiter::StorageRateLimits;

/// 실제 제한 판정을 수행하는 서비스
pub struct RateLimitMiddlewareService<S> {
    pub service: Rc<S>,
    pub budget: RateLimitBudget,
}

impl<S, B> Service<ServiceRequest> for RateLimitMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let budget = self.budget;

        Box::pin(async move {
            // 공유 제한기 인스턴스 가져오기 (main에서 등록됨, 워커 간 공유)
            let limits = ServiceLocator::get::<StorageRateLimits>();

            let client_ip = extract_client_ip_from_service_request(&req)
                .unwrap_or_else(|| "unknown".to_string());
            let key = format!("{}:{}", budget.key_prefix(), client_ip);

            let limiter = match budget {
                RateLimitBudget::General => &limits.general,
                RateLimitBudget::Upload => &limits.upload,
            };

            if !limiter.check(&key) {
                log::warn!("요청 제한 초과: {} ({})", client_ip, req.path());
                let response = HttpResponse::TooManyRequests()
                    .json(ApiResponse::<()>::error(
                        "요청이 너무 많습니다. 잠시 후 다시 시도해주세요".to_string(),
                    ));
                let (req, _) = req.into_parts();
                let res = ServiceResponse::new(req, response)
                    .map_into_right_body();
                return Ok(res);
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}
