//! Project Entity Implementation
//!
//! 발주 조직이 등록하는 건설 프로젝트 엔티티입니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};
use crate::domain::members::MemberLevel;

/// 프로젝트 진행 상태
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    /// 모집 중 - 시공자 입찰 가능
    Open,
    /// 진행 중 - 계약 체결 완료
    InProgress,
    /// 완료 - 완료 보고 및 정산 대상
    Completed,
    /// 취소됨
    Cancelled,
}

impl ProjectStatus {
    /// 현재 상태에서 `next`로 전이할 수 있는지 판정합니다.
    ///
    /// ```text
    /// Open ──→ InProgress ──→ Completed
    ///   │           │
    ///   └───────────┴──→ Cancelled
    /// ```
    ///
    /// 완료·취소는 종결 상태이며 역방향 전이는 허용하지 않습니다.
    pub fn can_transition_to(&self, next: ProjectStatus) -> bool {
        matches!(
            (self, next),
            (ProjectStatus::Open, ProjectStatus::InProgress)
                | (ProjectStatus::Open, ProjectStatus::Cancelled)
                | (ProjectStatus::InProgress, ProjectStatus::Completed)
                | (ProjectStatus::InProgress, ProjectStatus::Cancelled)
        )
    }
}

/// 건설 프로젝트 엔티티
///
/// 발주 조직이 게시하며, `required_level` 이상의 회원만 참여할 수 있습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 프로젝트 제목
    pub title: String,
    /// 상세 설명
    pub description: String,
    /// 발주 조직 식별자
    pub organization_id: String,
    /// 발주 조직 표시 이름
    pub organization_name: String,
    /// 예산 (엔)
    pub budget: i64,
    /// 참여에 필요한 최소 회원 레벨
    pub required_level: MemberLevel,
    /// 진행 상태
    pub status: ProjectStatus,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Project {
    /// 새 프로젝트를 생성합니다. 모집 중(`Open`) 상태로 시작합니다.
    pub fn new(
        title: String,
        description: String,
        organization_id: String,
        organization_name: String,
        budget: i64,
        required_level: MemberLevel,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            description,
            organization_id,
            organization_name,
            budget,
            required_level,
            status: ProjectStatus::Open,
            created_at: now,
            updated_at: now,
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

    #[test]
    fn test_project_starts_open() {
        let project = Project::new(
            "事務所ビル電気工事".to_string(),
            "配線工事".to_string(),
            "org-1".to_string(),
            "大成建設".to_string(),
            5_000_000,
            MemberLevel::Intermediate,
        );

        assert_eq!(project.status, ProjectStatus::Open);
        assert!(project.id.is_none());
    }

    #[test]
    fn test_status_forward_transitions_allowed() {
        use ProjectStatus::*;

        assert!(Open.can_transition_to(InProgress));
        assert!(Open.can_transition_to(Cancelled));
        assert!(InProgress.can_transition_to(Completed));
        assert!(InProgress.can_transition_to(Cancelled));
    }

    #[test]
    fn test_status_terminal_and_backward_transitions_denied() {
        use ProjectStatus::*;

        // 종결 상태에서는 어디로도 갈 수 없음
        for next in [Open, InProgress, Completed, Cancelled] {
            assert!(!Completed.can_transition_to(next));
            assert!(!Cancelled.can_transition_to(next));
        }

        // 역방향·단계 건너뛰기 금지
        assert!(!Open.can_transition_to(Completed));
        assert!(!InProgress.can_transition_to(Open));
        assert!(!Open.can_transition_to(Open));
    }
}
