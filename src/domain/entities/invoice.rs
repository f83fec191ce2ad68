//! Invoice Entity Implementation
//!
//! 발주 조직에 청구되는 청구서 엔티티입니다.
//! 금액 내역은 `domain::billing`의 순수 계산 함수로 산출된 값을 저장합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::billing::OrgInvoice;

/// 청구서 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvoiceStatus {
    /// 발행됨 - 지불 대기
    Issued,
    /// 지불 완료
    Paid,
    /// 무효화됨
    Voided,
}

impl InvoiceStatus {
    /// 현재 상태에서 `next`로 전이할 수 있는지 판정합니다.
    ///
    /// 발행된 청구서만 지불 또는 무효화할 수 있으며,
    /// 지불 완료·무효화는 종결 상태입니다.
    pub fn can_transition_to(&self, next: InvoiceStatus) -> bool {
        matches!(
            (self, next),
            (InvoiceStatus::Issued, InvoiceStatus::Paid)
                | (InvoiceStatus::Issued, InvoiceStatus::Voided)
        )
    }
}

/// 발주 조직 청구서 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 대상 프로젝트 ID (16진수 문자열)
    pub project_id: String,
    /// 발주 조직 식별자
    pub organization_id: String,
    /// 시공자 지급 총액 (엔)
    pub contractors_total: i64,
    /// 플랫폼 운영 수수료 (엔)
    pub operator_fee: i64,
    /// 청구 총액 (엔)
    pub total_amount: i64,
    /// 청구서 상태
    pub status: InvoiceStatus,
    /// 발행 시간
    pub issued_at: DateTime,
}

impl Invoice {
    /// 계산 결과로부터 새 청구서를 생성합니다. 발행 상태로 시작합니다.
    pub fn from_calculation(project_id: String, organization_id: String, amounts: OrgInvoice) -> Self {
        Self {
            id: None,
            project_id,
            organization_id,
            contractors_total: amounts.contractors_total,
            operator_fee: amounts.operator_fee,
            total_amount: amounts.total_amount,
            status: InvoiceStatus::Issued,
            issued_at: DateTime::now(),
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::billing::calculate_org_invoice;

    #[test]
    fn test_invoice_starts_issued_with_calculated_amounts() {
        let amounts = calculate_org_invoice(1_000.0);
        let invoice = Invoice::from_calculation("proj-1".to_string(), "org-1".to_string(), amounts);

        assert_eq!(invoice.status, InvoiceStatus::Issued);
        assert_eq!(invoice.contractors_total, 1_000);
        assert_eq!(invoice.operator_fee, 300);
        assert_eq!(invoice.total_amount, 1_300);
    }

    #[test]
    fn test_issued_invoice_can_be_paid_or_voided() {
        assert!(InvoiceStatus::Issued.can_transition_to(InvoiceStatus::Paid));
        assert!(InvoiceStatus::Issued.can_transition_to(InvoiceStatus::Voided));
    }

    #[test]
    fn test_settled_invoice_is_terminal() {
        use InvoiceStatus::*;

        for next in [Issued, Paid, Voided] {
            assert!(!Paid.can_transition_to(next));
            assert!(!Voided.can_transition_to(next));
        }
        assert!(!Issued.can_transition_to(Issued));
    }
}
