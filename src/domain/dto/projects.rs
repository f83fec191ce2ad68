//! 프로젝트 등록/조회/접근 판정 요청·응답 DTO

use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::domain::entities::project::{Project, ProjectStatus};
use crate::domain::members::MemberLevel;

/// 프로젝트 등록 요청
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProjectRequest {
    /// 프로젝트 제목 (1-100자)
    #[validate(length(
        min = 1,
        max = 100,
        message = "제목은 1-100자 사이여야 합니다"
    ))]
    pub title: String,

    /// 상세 설명 (최대 2000자)
    #[validate(length(max = 2000, message = "설명은 최대 2000자입니다"))]
    #[serde(default)]
    pub description: String,

    /// 발주 조직 식별자
    #[validate(length(min = 1, message = "발주 조직 ID는 필수입니다"))]
    pub organization_id: String,

    /// 발주 조직 표시 이름
    #[validate(length(min = 1, max = 100, message = "조직 이름은 1-100자 사이여야 합니다"))]
    pub organization_name: String,

    /// 예산 (엔, 0 이상)
    #[validate(range(min = 0, message = "예산은 0 이상이어야 합니다"))]
    pub budget: i64,

    /// 참여에 필요한 최소 회원 레벨 (기본값: beginner)
    #[serde(default = "default_required_level")]
    pub required_level: MemberLevel,
}

fn default_required_level() -> MemberLevel {
    MemberLevel::Beginner
}

/// 프로젝트 상태 변경 요청
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateProjectStatusRequest {
    /// 변경할 상태 ("open" | "in_progress" | "completed" | "cancelled")
    pub status: ProjectStatus,
}

/// 프로젝트 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub organization_id: String,
    pub organization_name: String,
    pub budget: i64,
    pub required_level: MemberLevel,
    pub status: ProjectStatus,
}

impl From<Project> for ProjectResponse {
    fn from(project: Project) -> Self {
        Self {
            id: project.id_string().unwrap_or_default(),
            title: project.title,
            description: project.description,
            organization_id: project.organization_id,
            organization_name: project.organization_name,
            budget: project.budget,
            required_level: project.required_level,
            status: project.status,
        }
    }
}

/// 프로젝트 접근 판정 응답
///
/// 회원 레벨과 프로젝트 요구 레벨의 전순서 비교 결과를 담습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectAccessResponse {
    pub project_id: String,
    pub member_id: String,
    pub member_level: MemberLevel,
    pub required_level: MemberLevel,
    pub can_access: bool,
}
