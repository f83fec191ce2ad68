//! # Billing HTTP Handlers
//!
//! 정산 관련 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/billing/payout-quote` | 시공자 지급액 견적 | 200 OK |
//! | `POST` | `/billing/invoice-quote` | 발주 조직 청구액 견적 | 200 OK |
//! | `POST` | `/billing/invoices` | 청구서 발행 | 201 Created |
//! | `GET` | `/billing/invoices/{id}` | 청구서 조회 | 200 OK |
//! | `PUT` | `/billing/invoices/{id}/status` | 청구서 상태 전이 | 200 OK |
//! | `GET` | `/billing/projects/{project_id}/invoices` | 프로젝트별 청구서 목록 | 200 OK |

use actix_web::{web, HttpResponse, get, post, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::billing::{CreateInvoiceRequest, OrgInvoiceQuoteRequest, PayoutQuoteRequest, UpdateInvoiceStatusRequest};
use crate::services::billing::billing_service::BillingService;

/// 시공자 지급액 견적 핸들러
///
/// 사업 형태별 공제를 적용한 지급 내역을 계산합니다.
/// 순수 계산이므로 아무것도 저장하지 않습니다.
///
/// # 엔드포인트
///
/// `POST /billing/payout-quote`
///
/// # 요청 본문
///
/// ```json
/// {
///   "business_type": "individual",
///   "total_billed": 100000
/// }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "gross_amount": 100000,
///   "withholding_tax": 10210,
///   "transfer_fee": 550,
///   "net_amount": 89240
/// }
/// ```
///
/// # 계산 규칙
///
/// - **개인 사업자**: 원천징수 10.21% + 振込手数料 550엔 공제, 순지급액 0 미만 방지
/// - **법인**: 공제 없음 (순지급액 = 총액)
/// - 음수·소수 입력은 거부하지 않고 반올림·0 보정
#[post("/payout-quote")]
pub async fn quote_payout(
    payload: web::Json<PayoutQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let service = BillingService::instance();
    let response = service.quote_payout(payload.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 발주 조직 청구액 견적 핸들러
///
/// 시공자 지급 총액에 운영 수수료 30%를 가산한 청구 내역을 계산합니다.
///
/// # 엔드포인트
///
/// `POST /billing/invoice-quote`
///
/// # 요청 본문
///
/// ```json
/// { "contractors_total": 1000 }
/// ```
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "contractors_total": 1000,
///   "operator_fee": 300,
///   "total_amount": 1300
/// }
/// ```
#[post("/invoice-quote")]
pub async fn quote_org_invoice(
    payload: web::Json<OrgInvoiceQuoteRequest>,
) -> Result<HttpResponse, AppError> {
    let service = BillingService::instance();
    let response = service.quote_org_invoice(payload.into_inner())?;

    Ok(HttpResponse::Ok().json(response))
}

/// 청구서 발행 핸들러
///
/// 대상 프로젝트를 확인한 뒤 청구액을 계산하여 영속화합니다.
///
/// # 엔드포인트
///
/// `POST /billing/invoices`
///
/// # 실패 사례
///
/// - 404 Not Found: 대상 프로젝트 없음
/// - 400 Bad Request: 잘못된 프로젝트 ID 형식
#[post("/invoices")]
pub async fn create_invoice(
    payload: web::Json<CreateInvoiceRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = BillingService::instance();
    let response = service.create_invoice(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 청구서 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /billing/invoices/{invoice_id}`
#[get("/invoices/{invoice_id}")]
pub async fn get_invoice(
    invoice_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = BillingService::instance();
    let invoice = service.get_invoice(&invoice_id).await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 청구서 상태 전이 핸들러
///
/// 발행된 청구서를 지불 완료 또는 무효화 상태로 전이합니다.
/// 이미 종결된 청구서는 409로 거부됩니다.
///
/// # 엔드포인트
///
/// `PUT /billing/invoices/{invoice_id}/status`
///
/// # 요청 본문
///
/// ```json
/// { "status": "paid" }
/// ```
#[put("/invoices/{invoice_id}/status")]
pub async fn update_invoice_status(
    invoice_id: web::Path<String>,
    payload: web::Json<UpdateInvoiceStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let service = BillingService::instance();
    let invoice = service.update_invoice_status(&invoice_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(invoice))
}

/// 프로젝트별 청구서 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /billing/projects/{project_id}/invoices`
#[get("/projects/{project_id}/invoices")]
pub async fn list_project_invoices(
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = BillingService::instance();
    let invoices = service.list_invoices_by_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(invoices))
}
