//! Member Entity Implementation
//!
//! 시공 회원 엔티티의 핵심 구현체입니다.
//! 개인 사업자와 법인을 모두 지원하는 통합된 회원 모델을 제공합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::billing::BusinessType;
use crate::domain::members::{calculate_member_level, MemberLevel};

/// 시공 회원 엔티티
///
/// 마켓플레이스에서 프로젝트에 입찰하고 시공을 수행하는 회원을 표현합니다.
/// 회원 레벨은 등록/수정 시점에 경력 정보로부터 계산되어 저장됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Member {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 회원 이메일 (unique)
    pub email: String,
    /// 표시 이름 (상호 또는 성명)
    pub display_name: String,
    /// 사업 형태 (개인/법인) - 정산 시 원천징수 적용 여부를 결정
    pub business_type: BusinessType,
    /// 자가 신고 경력 연수 (자유 입력 문자열, 미입력 가능)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<String>,
    /// 전문 분야 목록 (예: "電気", "配管", "未経験")
    pub specialties: Vec<String>,
    /// 계산된 회원 레벨 (프로젝트 접근 제어에 사용)
    pub member_level: MemberLevel,
    /// 계정 활성화 여부
    pub is_active: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Member {
    /// 새 회원을 생성합니다.
    ///
    /// 회원 레벨은 경력 연수와 전문 분야로부터 즉시 계산됩니다.
    pub fn new(
        email: String,
        display_name: String,
        business_type: BusinessType,
        experience_years: Option<String>,
        specialties: Vec<String>,
    ) -> Self {
        let member_level = calculate_member_level(experience_years.as_deref(), &specialties);
        let now = DateTime::now();

        Self {
            id: None,
            email,
            display_name,
            business_type,
            experience_years,
            specialties,
            member_level,
            is_active: true,
            created_at: now,
            updated_at: now,
        }
    }

    /// ObjectId를 16진수 문자열로 반환합니다.
    pub fn id_string(&self) -> Option<String> {
        self.id.map(|id| id.to_hex())
    }

    /// 경력 정보 변경 후 회원 레벨을 다시 계산합니다.
    pub fn recalculate_level(&mut self) {
        self.member_level =
            calculate_member_level(self.experience_years.as_deref(), &self.specialties);
        self.updated_at = DateTime::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_member_level_is_computed() {
        let member = Member::new(
            "denki@example.com".to_string(),
            "山田電気".to_string(),
            BusinessType::Individual,
            Some("8".to_string()),
            vec!["電気".to_string()],
        );

        assert_eq!(member.member_level, MemberLevel::Advanced);
        assert!(member.is_active);
        assert!(member.id.is_none());
    }

    #[test]
    fn test_recalculate_level_after_update() {
        let mut member = Member::new(
            "novice@example.com".to_string(),
            "新人".to_string(),
            BusinessType::Individual,
            Some("10".to_string()),
            vec!["未経験".to_string()],
        );
        assert_eq!(member.member_level, MemberLevel::Beginner);

        member.specialties = vec!["配管".to_string()];
        member.recalculate_level();
        assert_eq!(member.member_level, MemberLevel::Advanced);
    }
}
