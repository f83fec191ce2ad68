//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 회원, 프로젝트, 정산, 파일 스토리지 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 회원 등록/조회 API 엔드포인트
//! - 프로젝트 등록/조회 및 접근 판정 API 엔드포인트
//! - 지급액/청구액 견적 및 청구서 API 엔드포인트
//! - 파일 스토리지 게이트웨이 (요청 제한 미들웨어 적용)
//! - 헬스체크 엔드포인트
//!
//! # Rate Limit Middleware Usage
//!
//! 외부 벤더를 호출하는 라우트에 예산별 요청 제한을 적용합니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1/files")
//!         .wrap(RateLimitMiddleware::general())
//!         .service(handlers::files::list_project_files)
//! );
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::web;
//!
//! let mut cfg = web::ServiceConfig::new();
//! configure_all_routes(&mut cfg);
//! ```

use crate::handlers;
use crate::middlewares::RateLimitMiddleware;
use actix_web::web;
use chrono;
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_member_routes(cfg);
    configure_project_routes(cfg);
    configure_billing_routes(cfg);
    configure_file_routes(cfg);
}

/// 회원 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/members` - 회원 등록
/// - `GET /api/v1/members/{id}` - 회원 조회
/// - `PUT /api/v1/members/{id}/experience` - 경력 정보 갱신 (레벨 재계산)
/// - `DELETE /api/v1/members/{id}` - 회원 탈퇴
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/members \
///   -H "Content-Type: application/json" \
///   -d '{"email":"denki@example.com","display_name":"山田電気","business_type":"individual","experience_years":"8","specialties":["電気"]}'
/// ```
fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/members")
            .service(handlers::members::register_member)
            .service(handlers::members::get_member)
            .service(handlers::members::update_experience)
            .service(handlers::members::delete_member)
    );
}

/// 프로젝트 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/projects` - 프로젝트 등록
/// - `GET /api/v1/projects` - 모집 중 목록 조회
/// - `GET /api/v1/projects/{id}` - 프로젝트 조회
/// - `PUT /api/v1/projects/{id}/status` - 상태 변경 (생명주기 진행)
/// - `GET /api/v1/projects/{id}/access/{member_id}` - 접근 판정
fn configure_project_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/projects")
            .service(handlers::projects::create_project)
            .service(handlers::projects::list_open_projects)
            .service(handlers::projects::check_project_access)
            .service(handlers::projects::update_project_status)
            .service(handlers::projects::get_project)
    );
}

/// 정산 관련 라우트를 설정합니다
///
/// # Available Routes
///
/// - `POST /api/v1/billing/payout-quote` - 시공자 지급액 견적
/// - `POST /api/v1/billing/invoice-quote` - 발주 조직 청구액 견적
/// - `POST /api/v1/billing/invoices` - 청구서 발행
/// - `GET /api/v1/billing/invoices/{id}` - 청구서 조회
/// - `PUT /api/v1/billing/invoices/{id}/status` - 청구서 상태 전이 (지불/무효화)
/// - `GET /api/v1/billing/projects/{project_id}/invoices` - 프로젝트별 청구서 목록
///
/// # Examples
///
/// ```bash
/// curl -X POST http://localhost:8080/api/v1/billing/payout-quote \
///   -H "Content-Type: application/json" \
///   -d '{"business_type":"individual","total_billed":100000}'
/// ```
fn configure_billing_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/billing")
            .service(handlers::billing::quote_payout)
            .service(handlers::billing::quote_org_invoice)
            .service(handlers::billing::create_invoice)
            .service(handlers::billing::get_invoice)
            .service(handlers::billing::update_invoice_status)
            .service(handlers::billing::list_project_invoices)
    );
}

/// 파일 스토리지 게이트웨이 라우트를 설정합니다
///
/// 외부 벤더 API를 호출하는 라우트이므로 클라이언트 IP별 요청 제한
/// 미들웨어를 적용합니다. 업로드는 더 엄격한 예산을 사용합니다.
///
/// # Available Routes
///
/// - `POST /api/v1/files/uploads` - 업로드 세션 등록 (업로드 예산)
/// - `GET /api/v1/files/projects/{project_id}` - 파일 목록 (일반 예산)
fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/files/uploads")
            .wrap(RateLimitMiddleware::upload())
            .service(handlers::files::register_upload)
    );

    cfg.service(
        web::scope("/api/v1/files")
            .wrap(RateLimitMiddleware::general())
            .service(handlers::files::list_project_files)
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///   - `features`: 사용 중인 기술 스택
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
///
/// Response:
/// ```json
/// {
///   "status": "healthy",
///   "service": "construction_market_backend",
///   "version": "0.1.0",
///   "timestamp": "2023-01-01T00:00:00Z",
///   "features": {
///     "database": "MongoDB",
///     "cache": "Redis",
///     "dependency_injection": "Singleton Macro"
///   }
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "construction_market_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "cache": "Redis",
            "dependency_injection": "Singleton Macro"
        }
    }))
}
