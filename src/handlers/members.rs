//! # Member Management HTTP Handlers
//!
//! 회원 관리와 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/members` | 새 회원 등록 | 201 Created |
//! | `GET` | `/members/{id}` | 회원 조회 | 200 OK |
//! | `PUT` | `/members/{id}/experience` | 경력 정보 갱신 | 200 OK |
//! | `DELETE` | `/members/{id}` | 회원 탈퇴 | 204 No Content |

use actix_web::{web, HttpResponse, delete, get, post, put};
use serde::Deserialize;
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::members::RegisterMemberRequest;
use crate::services::members::member_service::MemberService;

/// 회원 등록 핸들러
///
/// 새로운 시공 회원을 등록합니다. 회원 레벨은 경력 연수와 전문 분야로부터
/// 서버에서 계산되며 클라이언트가 지정할 수 없습니다.
///
/// # 엔드포인트
///
/// `POST /members`
///
/// # 요청 본문
///
/// ```json
/// {
///   "email": "denki@example.com",
///   "display_name": "山田電気",
///   "business_type": "individual",
///   "experience_years": "8",
///   "specialties": ["電気"]
/// }
/// ```
///
/// # 응답 (201 Created)
///
/// ```json
/// {
///   "id": "507f1f77bcf86cd799439011",
///   "email": "denki@example.com",
///   "display_name": "山田電気",
///   "business_type": "individual",
///   "experience_years": "8",
///   "specialties": ["電気"],
///   "member_level": "advanced",
///   "is_active": true
/// }
/// ```
///
/// # 실패 사례
///
/// - 409 Conflict: 이메일 중복
/// - 400 Bad Request: 이메일 형식 오류, 표시 이름 길이 위반
///
/// # 비즈니스 규칙
///
/// - 이메일은 시스템 전체에서 고유해야 함
/// - 경력 미입력 또는 전 분야 "未経験"이면 초급으로 분류
/// - 경력 3년 미만 초급, 3-6년 중급, 7년 이상 상급
#[post("")]
pub async fn register_member(
    payload: web::Json<RegisterMemberRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = MemberService::instance();
    let response = service.register_member(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 회원 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /members/{member_id}`
///
/// # 실패 사례
///
/// - 404 Not Found: 해당 ID의 회원 없음
/// - 400 Bad Request: 잘못된 ObjectId 형식
#[get("/{member_id}")]
pub async fn get_member(
    member_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MemberService::instance();
    let member = service.get_member(&member_id).await?;

    Ok(HttpResponse::Ok().json(member))
}

/// 경력 정보 갱신 요청 본문
#[derive(Debug, Deserialize)]
pub struct UpdateExperienceRequest {
    /// 자가 신고 경력 연수 (자유 입력, 선택)
    pub experience_years: Option<String>,
    /// 전문 분야 목록
    #[serde(default)]
    pub specialties: Vec<String>,
}

/// 경력 정보 갱신 핸들러
///
/// 경력 연수와 전문 분야를 갱신하고 회원 레벨을 재계산합니다.
///
/// # 엔드포인트
///
/// `PUT /members/{member_id}/experience`
#[put("/{member_id}/experience")]
pub async fn update_experience(
    member_id: web::Path<String>,
    payload: web::Json<UpdateExperienceRequest>,
) -> Result<HttpResponse, AppError> {
    let service = MemberService::instance();
    let body = payload.into_inner();
    let member = service
        .update_experience(&member_id, body.experience_years, body.specialties)
        .await?;

    Ok(HttpResponse::Ok().json(member))
}

/// 회원 탈퇴 핸들러
///
/// 회원을 물리적으로 삭제하고 관련 캐시를 무효화합니다.
///
/// # 엔드포인트
///
/// `DELETE /members/{member_id}`
///
/// # 실패 사례
///
/// - 404 Not Found: 해당 ID의 회원 없음
/// - 400 Bad Request: 잘못된 ObjectId 형식
#[delete("/{member_id}")]
pub async fn delete_member(
    member_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = MemberService::instance();
    service.delete_member(&member_id).await?;

    Ok(HttpResponse::NoContent().finish())
}
