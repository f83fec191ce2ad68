//! # File Storage Gateway HTTP Handlers
//!
//! 써드파티 스토리지 벤더 중계 엔드포인트를 처리합니다.
//! 파일 바이너리는 이 서비스를 거치지 않으며, 클라이언트는 발급받은
//! URL로 벤더에 직접 업로드/다운로드합니다.
//!
//! ## 구현된 엔드포인트
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/files/uploads` | 업로드 세션 등록 | 201 Created |
//! | `GET` | `/files/projects/{project_id}` | 프로젝트 파일 목록 | 200 OK |
//!
//! ## 요청 제한
//!
//! 이 스코프의 라우트는 클라이언트 IP별 요청 제한 미들웨어로 감싸지며,
//! 서비스 내부에서 벤더 API 전역 예산도 별도로 확인합니다.
//! 어느 쪽이든 소진되면 429 Too Many Requests로 응답합니다.

use actix_web::{web, HttpResponse, get, post};
use validator::Validate;
use crate::core::errors::AppError;
use crate::domain::dto::files::RegisterUploadRequest;
use crate::services::storage::file_storage_service::FileStorageService;

/// 업로드 세션 등록 핸들러
///
/// 벤더에 업로드 세션을 생성하고 클라이언트가 직접 업로드할 URL을 반환합니다.
///
/// # 엔드포인트
///
/// `POST /files/uploads`
///
/// # 요청 본문
///
/// ```json
/// {
///   "project_id": "507f1f77bcf86cd799439011",
///   "file_name": "完了報告書.pdf",
///   "size_bytes": 1048576
/// }
/// ```
///
/// # 실패 사례
///
/// - 429 Too Many Requests: 업로드 예산 소진
/// - 404 Not Found: 대상 프로젝트 없음
/// - 500 Internal Server Error: 벤더 API 통신 오류
#[post("")]
pub async fn register_upload(
    payload: web::Json<RegisterUploadRequest>,
) -> Result<HttpResponse, AppError> {
    // 유효성 검사
    payload.validate()
        .map_err(|e| AppError::ValidationError(e.to_string()))?;

    let service = FileStorageService::instance();
    let response = service.register_upload(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(response))
}

/// 프로젝트 파일 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /files/projects/{project_id}`
#[get("/projects/{project_id}")]
pub async fn list_project_files(
    project_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let service = FileStorageService::instance();
    let files = service.list_project_files(&project_id).await?;

    Ok(HttpResponse::Ok().json(files))
}
