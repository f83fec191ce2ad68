//! # Project Management HTTP Handlers
//!
//! 프로젝트 등록·조회와 레벨 기반 접근 판정 엔드포인트를 처리합니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/projects` | 새 프로젝트 등록 | 201 Created |
//! | `GET` | `/projects` | 모집 중 목록 조회 | 200 OK |
//! | `GET` | `/projects/{id}` | 프로젝트 조회 | 200 OK |
//! | `PUT` | `/projects/{id}/status` | 상태 변경 | 200 OK |
//! | `GET` | `/projects/{id}/access/{member_id}` | 접근 판정 | 200 OK |

use actix_web::{web, HttpResponse, get, post, put};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::projects::{CreateProjectRequest, UpdateProjectStatusRequest};
use crate::services::projects::project_service::ProjectService;

/// 프로젝트 등록 핸들러
///
/// 발주 조직의 새 프로젝트를 모집 중 상태로 등록합니다.
///
/// # 엔드포인트
///
/// `POST /projects`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "事務所ビル電気工事",
///   "description": "3階建てオフィスの配線工事",
///   "organization_id": "org-123",
///   "organization_name": "大成建設",
///   "budget": 5000000,
///   "required_level": "intermediate"
/// }
/// ```
///
/// `required_level`을 생략하면 초급(beginner)으로 설정되어
/// 모든 회원이 참여할 수 있습니다.
#[post("")]
pub async fn create_project(
    payload: web::Json<CreateProjectRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = ProjectService::instance();
    let response = service.create_project(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 모집 중 프로젝트 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /projects`
#[get("")]
pub async fn list_open_projects() -> Result<HttpResponse, AppError> {
    let service = ProjectService::instance();
    let projects = service.list_open_projects().await?;

    Ok(HttpResponse::Ok().json(projects))
}

/// 프로젝트 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /projects/{project_id}`
#[get("/{project_id}")]
pub async fn get_project(
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = ProjectService::instance();
    let project = service.get_project(&project_id).await?;

    Ok(HttpResponse::Ok().json(project))
}

/// 프로젝트 상태 변경 핸들러
///
/// 계약 체결(진행 중), 완료 보고(완료), 취소 등 프로젝트 생명주기를
/// 진행시킵니다. 허용되지 않는 전이는 409로 거부됩니다.
///
/// # 엔드포인트
///
/// `PUT /projects/{project_id}/status`
///
/// # 요청 본문
///
/// ```json
/// { "status": "in_progress" }
/// ```
///
/// # 실패 사례
///
/// - 404 Not Found: 해당 ID의 프로젝트 없음
/// - 409 Conflict: 허용되지 않는 상태 전이 (예: 완료된 프로젝트 재개)
#[put("/{project_id}/status")]
pub async fn update_project_status(
    project_id: web::Path<String>,
    payload: web::Json<UpdateProjectStatusRequest>,
) -> Result<HttpResponse, AppError> {
    let service = ProjectService::instance();
    let project = service.update_status(&project_id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(project))
}

/// 프로젝트 접근 판정 핸들러
///
/// 회원 레벨이 프로젝트 요구 레벨 이상인지 판정합니다.
///
/// # 엔드포인트
///
/// `GET /projects/{project_id}/access/{member_id}`
///
/// # 응답 (200 OK)
///
/// ```json
/// {
///   "project_id": "507f1f77bcf86cd799439011",
///   "member_id": "507f191e810c19729de860ea",
///   "member_level": "intermediate",
///   "required_level": "advanced",
///   "can_access": false
/// }
/// ```
///
/// 접근 불가도 정상 판정 결과이므로 200으로 응답합니다.
#[get("/{project_id}/access/{member_id}")]
pub async fn check_project_access(
    path: web::Path<(String, String)>,
) -> Result<HttpResponse, AppError> {
    let (project_id, member_id) = path.into_inner();

    let service = ProjectService::instance();
    let decision = service.check_access(&project_id, &member_id).await?;

    Ok(HttpResponse::Ok().json(decision))
}
