//! 파일 스토리지 게이트웨이 요청·응답 DTO
//!
//! 실제 파일 바이너리는 써드파티 스토리지 벤더가 보관하며,
//! 이 서비스는 메타데이터 전달과 URL 발급만 중계합니다.

use serde::{Deserialize, Serialize};
use validator::Validate;

/// 파일 업로드 등록 요청
///
/// 벤더에 업로드 세션을 생성하고 업로드 URL을 발급받습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterUploadRequest {
    /// 대상 프로젝트 ID
    #[validate(length(equal = 24, message = "프로젝트 ID는 24자 ObjectId여야 합니다"))]
    pub project_id: String,

    /// 파일 이름 (1-255자)
    #[validate(length(min = 1, max = 255, message = "파일 이름은 1-255자 사이여야 합니다"))]
    pub file_name: String,

    /// 파일 크기 (바이트, 선택)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size_bytes: Option<u64>,
}

/// 스토리지 벤더가 반환한 파일 정보
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoredFileResponse {
    /// 벤더 측 파일 식별자
    pub file_id: String,
    /// 파일 이름
    pub file_name: String,
    /// 업로드 또는 다운로드용 URL
    pub url: String,
}

/// 프로젝트 파일 목록 응답
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileListResponse {
    pub project_id: String,
    pub files: Vec<StoredFileResponse>,
}
