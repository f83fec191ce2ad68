//! # 정산 서비스 구현
//!
//! 시공자 지급액과 발주 조직 청구액의 계산 및 청구서 발행을 담당하는
//! 핵심 비즈니스 로직을 구현합니다. 금액 계산 자체는 `domain::billing`의
//! 순수 함수가 수행하며, 이 서비스는 계산 결과의 검증·영속화·응답 변환을
//! 담당합니다.
//!
//! ## 서비스 아키텍처
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                    BillingService                     │
//! ├──────────────────────────────────────────────────────┤
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐  │
//! │  │ Payout Quote │ │ Invoice Quote│ │ Invoice Issue│  │
//! │  │              │ │              │ │              │  │
//! │  │ • 원천징수    │ │ • 운영수수료  │ │ • 프로젝트검증│  │
//! │  │ • 振込手数料  │ │ • 청구총액    │ │ • 영속화      │  │
//! │  └──────────────┘ └──────────────┘ └──────────────┘  │
//! └──────────────────────────────────────────────────────┘
//!                          │
//!                          ▼
//! ┌──────────────────────────────────────────────────────┐
//! │     domain::billing (순수 계산) + InvoiceRepository   │
//! └──────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        billing::{calculate_contractor_payout, calculate_org_invoice},
        dto::billing::{
            CreateInvoiceRequest, InvoiceResponse, OrgInvoiceQuoteRequest,
            OrgInvoiceQuoteResponse, PayoutQuoteRequest, PayoutQuoteResponse,
            UpdateInvoiceStatusRequest,
        },
        entities::invoice::Invoice,
    },
    repositories::{invoices::invoice_repo::InvoiceRepository, projects::project_repo::ProjectRepository},
};

/// 정산 비즈니스 로직 서비스
///
/// 견적(quote) 연산은 순수 계산만 수행하며 어떤 상태도 남기지 않습니다.
/// 청구서 발행은 프로젝트 존재 여부 확인 후 계산 결과를 영속화합니다.
///
/// ## 금액 정책
///
/// - 모든 금액은 엔 단위 정수로 계산·저장됩니다
/// - 음수·비유한 입력은 거부하지 않고 0으로 보정합니다
/// - 개인 사업자: 원천징수(10.21%) + 振込手数料(550엔) 공제, 순지급액 0 미만 방지
/// - 법인: 공제 없음 (수수료·세금은 별도 거래로 처리)
/// - 발주 조직: 지급 총액에 운영 수수료 30% 가산
#[service(name = "billing")]
pub struct BillingService {
    /// 청구서 데이터 액세스 리포지토리 (자동 주입)
    invoice_repo: Arc<InvoiceRepository>,

    /// 프로젝트 데이터 액세스 리포지토리 (자동 주입)
    ///
    /// 청구서 발행 시 대상 프로젝트의 존재 확인과 발주 조직 식별에 사용합니다.
    project_repo: Arc<ProjectRepository>,
}

impl BillingService {
    /// 시공자 지급액 견적 계산
    ///
    /// 사업 형태에 따른 공제를 적용한 지급 내역을 반환합니다.
    /// 순수 계산이므로 데이터베이스에 아무것도 남기지 않습니다.
    ///
    /// # 인자
    ///
    /// * `request` - 사업 형태와 청구 총액
    ///
    /// # 반환값
    ///
    /// * `Ok(PayoutQuoteResponse)` - 총액/원천징수/수수료/순지급액 내역
    pub fn quote_payout(&self, request: PayoutQuoteRequest) -> Result<PayoutQuoteResponse, AppError> {
        let breakdown = calculate_contractor_payout(request.business_type, request.total_billed);

        log::info!(
            "지급액 견적 계산: 형태={:?}, 총액={}엔, 순지급액={}엔",
            request.business_type,
            breakdown.gross_amount,
            breakdown.net_amount
        );

        Ok(PayoutQuoteResponse::from(breakdown))
    }

    /// 발주 조직 청구액 견적 계산
    ///
    /// 시공자 지급 총액에 운영 수수료를 가산한 청구 내역을 반환합니다.
    pub fn quote_org_invoice(&self, request: OrgInvoiceQuoteRequest) -> Result<OrgInvoiceQuoteResponse, AppError> {
        let invoice = calculate_org_invoice(request.contractors_total);

        log::info!(
            "청구액 견적 계산: 지급총액={}엔, 수수료={}엔, 청구총액={}엔",
            invoice.contractors_total,
            invoice.operator_fee,
            invoice.total_amount
        );

        Ok(OrgInvoiceQuoteResponse::from(invoice))
    }

    /// 청구서 발행
    ///
    /// 대상 프로젝트를 확인한 뒤 청구액을 계산하여 영속화합니다.
    /// 발주 조직 식별자는 프로젝트에서 가져오므로 클라이언트가 위조할 수 없습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(InvoiceResponse)` - 발행된 청구서 (ID 포함)
    /// * `Err(AppError::NotFound)` - 대상 프로젝트가 존재하지 않음
    pub async fn create_invoice(&self, request: CreateInvoiceRequest) -> Result<InvoiceResponse, AppError> {
        // 대상 프로젝트 확인
        let project = self
            .project_repo
            .find_by_id(&request.project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        // 청구액 계산 및 영속화
        let amounts = calculate_org_invoice(request.contractors_total);
        let invoice = Invoice::from_calculation(
            request.project_id,
            project.organization_id.clone(),
            amounts,
        );

        let created = self.invoice_repo.create(invoice).await?;

        log::info!(
            "청구서 발행: 프로젝트={}, 조직={}, 청구총액={}엔",
            created.project_id,
            created.organization_id,
            created.total_amount
        );

        Ok(InvoiceResponse::from(created))
    }

    /// 청구서 단건 조회
    pub async fn get_invoice(&self, id: &str) -> Result<InvoiceResponse, AppError> {
        let invoice = self
            .invoice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("청구서를 찾을 수 없습니다".to_string()))?;

        Ok(InvoiceResponse::from(invoice))
    }

    /// 청구서 상태 전이 (지불 완료 / 무효화)
    ///
    /// 발행된 청구서만 지불 또는 무효화할 수 있습니다. 금액은 발행 후
    /// 불변이므로 상태만 변경됩니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(InvoiceResponse)` - 전이된 청구서
    /// * `Err(AppError::NotFound)` - 해당 ID의 청구서가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 허용되지 않는 상태 전이 (이미 종결됨)
    pub async fn update_invoice_status(&self, id: &str, request: UpdateInvoiceStatusRequest) -> Result<InvoiceResponse, AppError> {
        let invoice = self
            .invoice_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("청구서를 찾을 수 없습니다".to_string()))?;

        if !invoice.status.can_transition_to(request.status) {
            return Err(AppError::ConflictError(format!(
                "현재 상태({:?})에서 {:?}(으)로 전이할 수 없습니다",
                invoice.status, request.status
            )));
        }

        let updated = self
            .invoice_repo
            .update_status(id, request.status)
            .await?
            .ok_or_else(|| AppError::NotFound("청구서를 찾을 수 없습니다".to_string()))?;

        log::info!(
            "청구서 상태 전이: {} ({:?} → {:?})",
            updated.id_string().unwrap_or_default(),
            invoice.status,
            updated.status
        );

        Ok(InvoiceResponse::from(updated))
    }

    /// 프로젝트별 청구서 목록 조회
    pub async fn list_invoices_by_project(&self, project_id: &str) -> Result<Vec<InvoiceResponse>, AppError> {
        let invoices = self.invoice_repo.find_by_project(project_id).await?;

        Ok(invoices.into_iter().map(InvoiceResponse::from).collect())
    }
}
