//! 회원 등록/조회 요청·응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::billing::BusinessType;
use crate::domain::entities::member::Member;
use crate::domain::members::MemberLevel;

/// 회원 등록 요청
///
/// 경력 연수와 전문 분야는 자가 신고 값이므로 형식을 강제하지 않습니다.
/// 회원 레벨은 서버에서 계산되며 클라이언트가 지정할 수 없습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterMemberRequest {
    /// 회원 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 표시 이름 (상호 또는 성명, 1-50자)
    #[validate(length(
        min = 1,
        max = 50,
        message = "표시 이름은 1-50자 사이여야 합니다"
    ))]
    pub display_name: String,

    /// 사업 형태 ("individual" | "corporation")
    pub business_type: BusinessType,

    /// 자가 신고 경력 연수 (자유 입력, 선택)
    pub experience_years: Option<String>,

    /// 전문 분야 목록 (비어 있으면 초급으로 분류됨)
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// 회원 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberResponse {
    pub id: String,
    pub email: String,
    pub display_name: String,
    pub business_type: BusinessType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience_years: Option<String>,
    pub specialties: Vec<String>,
    pub member_level: MemberLevel,
    pub is_active: bool,
}

impl From<Member> for MemberResponse {
    fn from(member: Member) -> Self {
        Self {
            id: member.id_string().unwrap_or_default(),
            email: member.email,
            display_name: member.display_name,
            business_type: member.business_type,
            experience_years: member.experience_years,
            specialties: member.specialties,
            member_level: member.member_level,
            is_active: member.is_active,
        }
    }
}
