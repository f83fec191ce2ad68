//! 정산 관련 요청/응답 DTO
//!
//! 지급액/청구액 견적 요청과 청구서 발행 요청의 데이터 구조를 정의합니다.
//! 금액 필드는 "coerce, don't reject" 원칙에 따라 검증하지 않고
//! 계산기 쪽에서 반올림·클램프로 보정합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::billing::{BusinessType, OrgInvoice, PayoutBreakdown};
use crate::domain::entities::invoice::{Invoice, InvoiceStatus};

/// 시공자 지급액 견적 요청
#[derive(Debug, Clone, Deserialize)]
pub struct PayoutQuoteRequest {
    /// 수급자의 사업 형태 ("individual" | "corporation")
    pub business_type: BusinessType,
    /// 청구 총액 (엔). 음수/소수는 보정됨
    pub total_billed: f64,
}

/// 시공자 지급액 견적 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PayoutQuoteResponse {
    pub gross_amount: i64,
    pub withholding_tax: i64,
    pub transfer_fee: i64,
    pub net_amount: i64,
}

impl From<PayoutBreakdown> for PayoutQuoteResponse {
    fn from(breakdown: PayoutBreakdown) -> Self {
        Self {
            gross_amount: breakdown.gross_amount,
            withholding_tax: breakdown.withholding_tax,
            transfer_fee: breakdown.transfer_fee,
            net_amount: breakdown.net_amount,
        }
    }
}

/// 발주 조직 청구액 견적 요청
#[derive(Debug, Clone, Deserialize)]
pub struct OrgInvoiceQuoteRequest {
    /// 시공자 지급 총액 (엔). 음수/소수는 보정됨
    pub contractors_total: f64,
}

/// 발주 조직 청구액 견적 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrgInvoiceQuoteResponse {
    pub contractors_total: i64,
    pub operator_fee: i64,
    pub total_amount: i64,
}

impl From<OrgInvoice> for OrgInvoiceQuoteResponse {
    fn from(invoice: OrgInvoice) -> Self {
        Self {
            contractors_total: invoice.contractors_total,
            operator_fee: invoice.operator_fee,
            total_amount: invoice.total_amount,
        }
    }
}

/// 청구서 발행 요청
///
/// 프로젝트의 시공자 지급 총액으로부터 청구액을 계산하여 영속화합니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateInvoiceRequest {
    /// 대상 프로젝트 ID (MongoDB ObjectId 16진수 문자열)
    #[validate(length(equal = 24, message = "프로젝트 ID는 24자 ObjectId여야 합니다"))]
    pub project_id: String,
    /// 시공자 지급 총액 (엔). 음수/소수는 보정됨
    pub contractors_total: f64,
}

/// 청구서 상태 전이 요청
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateInvoiceStatusRequest {
    /// 전이할 상태 ("paid" | "voided")
    pub status: InvoiceStatus,
}

/// 청구서 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceResponse {
    pub id: String,
    pub project_id: String,
    pub organization_id: String,
    pub contractors_total: i64,
    pub operator_fee: i64,
    pub total_amount: i64,
    pub status: InvoiceStatus,
    /// 발행 시각 (RFC 3339)
    pub issued_at: String,
}

impl From<Invoice> for InvoiceResponse {
    fn from(invoice: Invoice) -> Self {
        Self {
            id: invoice.id_string().unwrap_or_default(),
            project_id: invoice.project_id.clone(),
            organization_id: invoice.organization_id.clone(),
            contractors_total: invoice.contractors_total,
            operator_fee: invoice.operator_fee,
            total_amount: invoice.total_amount,
            status: invoice.status,
            issued_at: invoice
                .issued_at
                .try_to_rfc3339_string()
                .unwrap_or_default(),
        }
    }
}
