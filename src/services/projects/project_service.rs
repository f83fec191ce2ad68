//! # 프로젝트 관리 서비스 구현
//!
//! 건설 프로젝트의 등록·조회와 레벨 기반 접근 판정을 담당합니다.
//!
//! ## 접근 판정
//!
//! 회원 레벨(초급 < 중급 < 상급)과 프로젝트 요구 레벨의 전순서 비교로
//! 판정합니다. 회원 레벨이 요구 레벨 이상이면 접근할 수 있습니다.

use std::sync::Arc;
use singleton_macro::service;
use crate::{
    core::errors::AppError,
    domain::{
        dto::projects::{CreateProjectRequest, ProjectAccessResponse, ProjectResponse, UpdateProjectStatusRequest},
        entities::project::{Project, ProjectStatus},
        members::can_access_project,
    },
    repositories::{members::member_repo::MemberRepository, projects::project_repo::ProjectRepository},
};

/// 모집 중 목록 조회 기본 상한
const DEFAULT_LIST_LIMIT: i64 = 50;

/// 프로젝트 관리 비즈니스 로직 서비스
#[service(name = "project")]
pub struct ProjectService {
    /// 프로젝트 데이터 액세스 리포지토리 (자동 주입)
    project_repo: Arc<ProjectRepository>,

    /// 회원 데이터 액세스 리포지토리 (자동 주입)
    ///
    /// 접근 판정 시 회원 레벨 조회에 사용합니다.
    member_repo: Arc<MemberRepository>,
}

impl ProjectService {
    /// 새 프로젝트 등록
    ///
    /// 모집 중(`Open`) 상태로 생성됩니다.
    pub async fn create_project(&self, request: CreateProjectRequest) -> Result<ProjectResponse, AppError> {
        let project = Project::new(
            request.title,
            request.description,
            request.organization_id,
            request.organization_name,
            request.budget,
            request.required_level,
        );

        let created = self.project_repo.create(project).await?;

        log::info!(
            "프로젝트 등록: {} (조직: {}, 요구 레벨: {})",
            created.title,
            created.organization_name,
            created.required_level
        );

        Ok(ProjectResponse::from(created))
    }

    /// ID로 프로젝트 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(ProjectResponse)` - 프로젝트 정보 DTO
    /// * `Err(AppError::NotFound)` - 해당 ID의 프로젝트가 존재하지 않음
    pub async fn get_project(&self, id: &str) -> Result<ProjectResponse, AppError> {
        let project = self
            .project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        Ok(ProjectResponse::from(project))
    }

    /// 모집 중 프로젝트 목록 조회 (최신순)
    pub async fn list_open_projects(&self) -> Result<Vec<ProjectResponse>, AppError> {
        let projects = self
            .project_repo
            .find_by_status(ProjectStatus::Open, DEFAULT_LIST_LIMIT)
            .await?;

        Ok(projects.into_iter().map(ProjectResponse::from).collect())
    }

    /// 프로젝트 상태 변경
    ///
    /// 상태 전이 규칙(`ProjectStatus::can_transition_to`)을 위반하는 요청은
    /// 거부합니다. 모집 중 → 진행 중 → 완료 순서로만 진행하며,
    /// 취소는 종결 전 어느 단계에서도 가능합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ProjectResponse)` - 변경된 프로젝트 정보
    /// * `Err(AppError::NotFound)` - 해당 ID의 프로젝트가 존재하지 않음
    /// * `Err(AppError::ConflictError)` - 허용되지 않는 상태 전이
    pub async fn update_status(&self, id: &str, request: UpdateProjectStatusRequest) -> Result<ProjectResponse, AppError> {
        let project = self
            .project_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        if !project.status.can_transition_to(request.status) {
            return Err(AppError::ConflictError(format!(
                "현재 상태({:?})에서 {:?}(으)로 변경할 수 없습니다",
                project.status, request.status
            )));
        }

        let updated = self
            .project_repo
            .update_status(id, request.status)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        log::info!("프로젝트 상태 변경: {} ({:?} → {:?})", updated.title, project.status, updated.status);

        Ok(ProjectResponse::from(updated))
    }

    /// 회원의 프로젝트 접근 가능 여부 판정
    ///
    /// 회원 레벨이 프로젝트 요구 레벨 이상인지 확인합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(ProjectAccessResponse)` - 양쪽 레벨과 판정 결과
    /// * `Err(AppError::NotFound)` - 프로젝트 또는 회원이 존재하지 않음
    pub async fn check_access(&self, project_id: &str, member_id: &str) -> Result<ProjectAccessResponse, AppError> {
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        let member = self
            .member_repo
            .find_by_id(member_id)
            .await?
            .ok_or_else(|| AppError::NotFound("회원을 찾을 수 없습니다".to_string()))?;

        let can_access = can_access_project(member.member_level, project.required_level);

        Ok(ProjectAccessResponse {
            project_id: project_id.to_string(),
            member_id: member_id.to_string(),
            member_level: member.member_level,
            required_level: project.required_level,
            can_access,
        })
    }
}
