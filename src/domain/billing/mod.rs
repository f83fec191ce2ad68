//! # 정산 계산 도메인
//!
//! 시공자 지급액(원천징수·이체 수수료 차감)과 발주 조직 청구액(플랫폼 수수료
//! 가산)을 계산하는 순수 함수들을 제공합니다. 금액은 모두 엔(円) 단위의
//! 정수입니다 (일본 엔은 보조 단위가 없음).
//!
//! ## 계산 규칙
//!
//! ### 시공자 지급액
//!
//! - **법인**: 원천징수 없음, 이체 수수료 없음 → 지급액 = 청구 총액
//! - **개인**: 원천징수 = round(청구 총액 × 10.21%), 이체 수수료 = 550엔 고정,
//!   지급액 = max(0, 청구 총액 − 원천징수 − 이체 수수료)
//!
//! 10.21%는 개인(비법인) 수급자에게만 적용되는 단순화된 일본 원천징수
//! 세율입니다.
//!
//! ### 조직 청구액
//!
//! - 플랫폼 수수료 = round(시공자 지급 총액 × 30%)
//! - 청구 총액 = 시공자 지급 총액 + 플랫폼 수수료
//!
//! ## 입력 보정 (coerce, don't reject)
//!
//! 모든 금액 입력은 검증 후 거부하는 대신 보정합니다: 가장 가까운 정수로
//! 반올림하고, 음수는 0으로 클램프합니다. 따라서 이 모듈의 함수들은 에러를
//! 반환하지 않으며, 동일 입력에 대해 항상 동일 출력을 내는 순수 함수입니다.

use serde::{Deserialize, Serialize};

/// 개인 수급자에게 적용되는 원천징수 세율 (10.21%)
pub const WITHHOLDING_TAX_RATE: f64 = 0.1021;

/// 개인 수급자 지급 시 차감되는 은행 이체 수수료 (엔, 고정)
pub const TRANSFER_FEE_YEN: i64 = 550;

/// 발주 조직 청구 시 가산되는 플랫폼 운영 수수료율 (30%)
pub const OPERATOR_FEE_RATE: f64 = 0.30;

/// 수급자의 사업 형태
///
/// 원천징수와 이체 수수료 적용 여부를 결정합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessType {
    /// 개인 사업자 - 원천징수(10.21%) 및 이체 수수료(550엔) 적용
    Individual,
    /// 법인 - 원천징수 및 이체 수수료 없음
    Corporation,
}

/// 시공자 지급액 계산 결과
///
/// 불변식: 모든 필드는 0 이상이며, `net_amount`가 0으로 클램프되지 않은 경우
/// `gross_amount == withholding_tax + transfer_fee + net_amount`가 성립합니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayoutBreakdown {
    /// 청구 총액 (보정 후)
    pub gross_amount: i64,
    /// 원천징수 세액
    pub withholding_tax: i64,
    /// 은행 이체 수수료
    pub transfer_fee: i64,
    /// 실지급액
    pub net_amount: i64,
}

/// 발주 조직 청구액 계산 결과
///
/// 불변식: `total_amount == contractors_total + operator_fee`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgInvoice {
    /// 시공자 지급 총액 (보정 후)
    pub contractors_total: i64,
    /// 플랫폼 운영 수수료
    pub operator_fee: i64,
    /// 조직 청구 총액
    pub total_amount: i64,
}

/// 금액 입력을 엔 단위 정수로 보정합니다.
///
/// 가장 가까운 정수로 반올림한 뒤, 음수이면 0으로 클램프합니다.
/// NaN 등 비정상 값도 0으로 처리하여 절대 패닉하지 않습니다.
fn normalize_amount(amount: f64) -> i64 {
    if !amount.is_finite() {
        return 0;
    }
    let rounded = amount.round();
    if rounded <= 0.0 {
        0
    } else {
        rounded as i64
    }
}

/// 시공자 지급액을 계산합니다.
///
/// # Arguments
///
/// * `business_type` - 수급자의 사업 형태 (개인/법인)
/// * `total_billed` - 시공자가 청구한 총액 (엔, 반올림·클램프로 보정됨)
///
/// # Returns
///
/// * `PayoutBreakdown` - 총액/원천징수/이체 수수료/실지급액 내역
///
/// # Examples
///
/// ```rust,ignore
/// use crate::domain::billing::{calculate_contractor_payout, BusinessType};
///
/// let payout = calculate_contractor_payout(BusinessType::Individual, 100_000.0);
/// assert_eq!(payout.withholding_tax, 10_210);
/// assert_eq!(payout.transfer_fee, 550);
/// assert_eq!(payout.net_amount, 89_240);
/// ```
pub fn calculate_contractor_payout(business_type: BusinessType, total_billed: f64) -> PayoutBreakdown {
    let gross_amount = normalize_amount(total_billed);

    match business_type {
        BusinessType::Corporation => PayoutBreakdown {
            gross_amount,
            withholding_tax: 0,
            transfer_fee: 0,
            net_amount: gross_amount,
        },
        BusinessType::Individual => {
            let withholding_tax = (gross_amount as f64 * WITHHOLDING_TAX_RATE).round() as i64;
            let transfer_fee = TRANSFER_FEE_YEN;
            let net_amount = (gross_amount - withholding_tax - transfer_fee).max(0);

            PayoutBreakdown {
                gross_amount,
                withholding_tax,
                transfer_fee,
                net_amount,
            }
        }
    }
}

/// 발주 조직에 청구할 금액을 계산합니다.
///
/// # Arguments
///
/// * `contractors_total` - 해당 프로젝트의 시공자 지급 총액 (엔, 보정됨)
///
/// # Returns
///
/// * `OrgInvoice` - 지급 총액/플랫폼 수수료/청구 총액 내역
///
/// # Examples
///
/// ```rust,ignore
/// use crate::domain::billing::calculate_org_invoice;
///
/// let invoice = calculate_org_invoice(1000.0);
/// assert_eq!(invoice.operator_fee, 300);
/// assert_eq!(invoice.total_amount, 1300);
/// ```
pub fn calculate_org_invoice(contractors_total: f64) -> OrgInvoice {
    let contractors_total = normalize_amount(contractors_total);
    let operator_fee = (contractors_total as f64 * OPERATOR_FEE_RATE).round() as i64;

    OrgInvoice {
        contractors_total,
        operator_fee,
        total_amount: contractors_total + operator_fee,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corporation_payout_has_no_deductions() {
        let payout = calculate_contractor_payout(BusinessType::Corporation, 100_000.0);

        assert_eq!(payout.gross_amount, 100_000);
        assert_eq!(payout.withholding_tax, 0);
        assert_eq!(payout.transfer_fee, 0);
        assert_eq!(payout.net_amount, payout.gross_amount);
    }

    #[test]
    fn test_individual_payout_deducts_withholding_and_fee() {
        let payout = calculate_contractor_payout(BusinessType::Individual, 100_000.0);

        assert_eq!(payout.gross_amount, 100_000);
        assert_eq!(payout.withholding_tax, 10_210); // round(100000 * 0.1021)
        assert_eq!(payout.transfer_fee, 550);
        assert_eq!(payout.net_amount, 89_240);
        assert_eq!(
            payout.gross_amount,
            payout.withholding_tax + payout.transfer_fee + payout.net_amount
        );
    }

    #[test]
    fn test_individual_payout_rounds_withholding() {
        // 12345 * 0.1021 = 1260.4245 → 1260
        let payout = calculate_contractor_payout(BusinessType::Individual, 12_345.0);

        assert_eq!(payout.withholding_tax, 1_260);
        assert_eq!(payout.net_amount, 12_345 - 1_260 - 550);
    }

    #[test]
    fn test_individual_small_amount_clamps_net_to_zero() {
        // 총액이 수수료보다 작으면 실지급액은 0으로 클램프
        let payout = calculate_contractor_payout(BusinessType::Individual, 500.0);

        assert_eq!(payout.gross_amount, 500);
        assert_eq!(payout.transfer_fee, 550);
        assert_eq!(payout.net_amount, 0);
    }

    #[test]
    fn test_negative_total_billed_is_clamped() {
        let payout = calculate_contractor_payout(BusinessType::Individual, -100.0);

        assert_eq!(payout.gross_amount, 0);
        assert_eq!(payout.withholding_tax, 0);
        assert_eq!(payout.net_amount, 0);
    }

    #[test]
    fn test_fractional_input_is_rounded() {
        let payout = calculate_contractor_payout(BusinessType::Corporation, 999.6);

        assert_eq!(payout.gross_amount, 1_000);
    }

    #[test]
    fn test_non_finite_input_degrades_to_zero() {
        let payout = calculate_contractor_payout(BusinessType::Individual, f64::NAN);

        assert_eq!(payout.gross_amount, 0);
        assert_eq!(payout.net_amount, 0);
    }

    #[test]
    fn test_org_invoice_adds_operator_fee() {
        let invoice = calculate_org_invoice(1_000.0);

        assert_eq!(invoice.contractors_total, 1_000);
        assert_eq!(invoice.operator_fee, 300);
        assert_eq!(invoice.total_amount, 1_300);
    }

    #[test]
    fn test_org_invoice_invariant_holds() {
        for total in [0.0, 1.0, 999.0, 123_456.0, 10_000_000.0] {
            let invoice = calculate_org_invoice(total);
            assert_eq!(
                invoice.total_amount,
                invoice.contractors_total + invoice.operator_fee
            );
        }
    }

    #[test]
    fn test_org_invoice_negative_is_clamped() {
        let invoice = calculate_org_invoice(-5_000.0);

        assert_eq!(invoice.contractors_total, 0);
        assert_eq!(invoice.operator_fee, 0);
        assert_eq!(invoice.total_amount, 0);
    }

    #[test]
    fn test_calculators_are_deterministic() {
        // 숨겨진 전역 상태가 없어야 함: 동일 입력 → 항상 동일 출력
        let first = calculate_contractor_payout(BusinessType::Individual, 77_777.0);
        for _ in 0..10 {
            assert_eq!(first, calculate_contractor_payout(BusinessType::Individual, 77_777.0));
        }

        let invoice = calculate_org_invoice(77_777.0);
        for _ in 0..10 {
            assert_eq!(invoice, calculate_org_invoice(77_777.0));
        }
    }
}
