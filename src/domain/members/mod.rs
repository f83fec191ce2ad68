//! # 회원 레벨 도메인
//!
//! 시공 회원이 자가 신고한 경력 연수와 전문 분야 목록으로부터 3단계
//! 레벨(초급/중급/상급)을 도출하고, 프로젝트 접근 가능 여부를 판정하는
//! 순수 함수들을 제공합니다.
//!
//! ## 분류 규칙
//!
//! 1. 전문 분야가 비어 있거나, 모든 항목이 "未経験"(미경험 마커)이면
//!    경력 연수와 무관하게 초급입니다.
//! 2. 그 외에는 경력 연수로 판정: 3년 미만 초급, 3〜6년 중급, 7년 이상 상급.
//!
//! 경력 연수는 자유 입력 문자열이므로 선행 숫자만 파싱하며
//! ("5年" → 5), 없거나 파싱 불가하면 0으로 처리합니다.
//! 어떤 입력에도 에러를 발생시키지 않습니다.

use serde::{Deserialize, Serialize};

/// 전문 분야의 미경험 마커
///
/// 회원 등록 폼에서 "경험 없음"을 뜻하는 선택지로, 일본어 고정 문자열입니다.
pub const NO_EXPERIENCE_MARKER: &str = "未経験";

/// 회원 레벨 (3단계, 전순서)
///
/// `beginner < intermediate < advanced` 순서로 파생된 `Ord`를 통해
/// 접근 제어 비교에 직접 사용됩니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberLevel {
    /// 초급 - 경력 3년 미만 또는 경험 없음
    Beginner,
    /// 중급 - 경력 3〜6년
    Intermediate,
    /// 상급 - 경력 7년 이상
    Advanced,
}

impl MemberLevel {
    /// 레벨의 표시용 문자열을 반환합니다.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberLevel::Beginner => "beginner",
            MemberLevel::Intermediate => "intermediate",
            MemberLevel::Advanced => "advanced",
        }
    }

    /// 문자열에서 MemberLevel을 생성합니다.
    ///
    /// 알 수 없는 값은 가장 보수적인 `Beginner`로 처리합니다.
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "advanced" => MemberLevel::Advanced,
            "intermediate" => MemberLevel::Intermediate,
            _ => MemberLevel::Beginner,
        }
    }
}

impl std::fmt::Display for MemberLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 경력 연수 문자열의 선행 정수를 파싱합니다.
///
/// JavaScript `parseInt`와 동일하게 앞부분의 연속된 숫자만 읽습니다.
/// 숫자가 없으면 0을 반환합니다 ("5年" → 5, "約5年" → 0, None → 0).
fn parse_experience_years(experience_years: Option<&str>) -> u32 {
    let Some(raw) = experience_years else {
        return 0;
    };

    let digits: String = raw
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();

    digits.parse::<u32>().unwrap_or(0)
}

/// 경력 연수와 전문 분야로부터 회원 레벨을 계산합니다.
///
/// # Arguments
///
/// * `experience_years` - 자가 신고 경력 연수 (자유 입력 문자열, 없을 수 있음)
/// * `specialties` - 전문 분야 목록 (예: "電気", "配管")
///
/// # Returns
///
/// * `MemberLevel` - 판정된 레벨. 어떤 입력에도 실패하지 않습니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::domain::members::{calculate_member_level, MemberLevel};
///
/// let specialties = vec!["電気".to_string()];
/// assert_eq!(calculate_member_level(Some("5"), &specialties), MemberLevel::Intermediate);
/// assert_eq!(calculate_member_level(Some("10"), &specialties), MemberLevel::Advanced);
///
/// // 전문 분야가 전부 미경험이면 연수와 무관하게 초급
/// let none = vec!["未経験".to_string()];
/// assert_eq!(calculate_member_level(Some("10"), &none), MemberLevel::Beginner);
/// ```
pub fn calculate_member_level(experience_years: Option<&str>, specialties: &[String]) -> MemberLevel {
    // 전문 분야가 없거나 전부 미경험 마커이면 무조건 초급
    if specialties.is_empty()
        || specialties.iter().all(|s| s == NO_EXPERIENCE_MARKER)
    {
        return MemberLevel::Beginner;
    }

    let years = parse_experience_years(experience_years);

    if years < 3 {
        MemberLevel::Beginner
    } else if years < 7 {
        MemberLevel::Intermediate
    } else {
        MemberLevel::Advanced
    }
}

/// 회원 레벨이 프로젝트 요구 레벨을 충족하는지 판정합니다.
///
/// 레벨은 `beginner < intermediate < advanced`의 전순서이며,
/// 회원 레벨이 요구 레벨 이상이면 접근을 허용합니다.
///
/// # Examples
///
/// ```rust,ignore
/// use crate::domain::members::{can_access_project, MemberLevel};
///
/// assert!(can_access_project(MemberLevel::Advanced, MemberLevel::Intermediate));
/// assert!(!can_access_project(MemberLevel::Beginner, MemberLevel::Advanced));
/// ```
pub fn can_access_project(user_level: MemberLevel, required_level: MemberLevel) -> bool {
    user_level >= required_level
}

#[cfg(test)]
mod tests {
    use super::*;

    fn specialties(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_specialties_is_beginner() {
        assert_eq!(calculate_member_level(Some("0"), &[]), MemberLevel::Beginner);
        assert_eq!(calculate_member_level(Some("10"), &[]), MemberLevel::Beginner);
    }

    #[test]
    fn test_all_no_experience_marker_is_beginner() {
        let s = specialties(&["未経験"]);
        assert_eq!(calculate_member_level(Some("10"), &s), MemberLevel::Beginner);

        let multiple = specialties(&["未経験", "未経験"]);
        assert_eq!(calculate_member_level(Some("7"), &multiple), MemberLevel::Beginner);
    }

    #[test]
    fn test_mixed_specialties_use_years() {
        // 미경험 항목이 섞여 있어도 실제 분야가 하나라도 있으면 연수로 판정
        let s = specialties(&["未経験", "電気"]);
        assert_eq!(calculate_member_level(Some("5"), &s), MemberLevel::Intermediate);
    }

    #[test]
    fn test_year_thresholds() {
        let s = specialties(&["電気"]);

        assert_eq!(calculate_member_level(Some("0"), &s), MemberLevel::Beginner);
        assert_eq!(calculate_member_level(Some("2"), &s), MemberLevel::Beginner);
        assert_eq!(calculate_member_level(Some("3"), &s), MemberLevel::Intermediate);
        assert_eq!(calculate_member_level(Some("5"), &s), MemberLevel::Intermediate);
        assert_eq!(calculate_member_level(Some("6"), &s), MemberLevel::Intermediate);
        assert_eq!(calculate_member_level(Some("7"), &s), MemberLevel::Advanced);
        assert_eq!(calculate_member_level(Some("10"), &s), MemberLevel::Advanced);
    }

    #[test]
    fn test_missing_or_malformed_years_default_to_zero() {
        let s = specialties(&["配管"]);

        assert_eq!(calculate_member_level(None, &s), MemberLevel::Beginner);
        assert_eq!(calculate_member_level(Some(""), &s), MemberLevel::Beginner);
        assert_eq!(calculate_member_level(Some("abc"), &s), MemberLevel::Beginner);
    }

    #[test]
    fn test_leading_digits_are_parsed() {
        let s = specialties(&["電気"]);

        // parseInt 스타일: "5年" → 5
        assert_eq!(calculate_member_level(Some("5年"), &s), MemberLevel::Intermediate);
        assert_eq!(calculate_member_level(Some("12年目"), &s), MemberLevel::Advanced);
    }

    #[test]
    fn test_can_access_project_total_order() {
        use MemberLevel::*;

        assert!(can_access_project(Advanced, Intermediate));
        assert!(can_access_project(Advanced, Advanced));
        assert!(can_access_project(Intermediate, Beginner));
        assert!(can_access_project(Beginner, Beginner));

        assert!(!can_access_project(Beginner, Advanced));
        assert!(!can_access_project(Beginner, Intermediate));
        assert!(!can_access_project(Intermediate, Advanced));
    }

    #[test]
    fn test_level_string_round_trip() {
        assert_eq!(MemberLevel::from_str("advanced"), MemberLevel::Advanced);
        assert_eq!(MemberLevel::from_str("Intermediate"), MemberLevel::Intermediate);
        assert_eq!(MemberLevel::from_str("nonsense"), MemberLevel::Beginner);
        assert_eq!(MemberLevel::Advanced.as_str(), "advanced");
    }
}
