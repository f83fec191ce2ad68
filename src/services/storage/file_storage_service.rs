//! # 파일 스토리지 게이트웨이 서비스 구현
//!
//! 프로젝트 파일(도면, 납품물, 완료 보고서)을 보관하는 써드파티 클라우드
//! 스토리지 벤더 API의 게이트웨이입니다. 파일 바이너리는 벤더가 보관하며,
//! 이 서비스는 업로드 세션 생성과 파일 목록/URL 발급만 중계합니다.
//!
//! ## 요청 제한
//!
//! 벤더 API를 과부하로부터 보호하기 위해 모든 외부 호출 전에 고정 윈도우
//! Rate Limiter를 통과해야 합니다. 업로드는 벤더 측 부하가 크므로 일반
//! 작업보다 엄격한 예산을 사용합니다. 예산 소진 시
//! [`AppError::RateLimitExceeded`](crate::core::errors::AppError)로 즉시
//! 거부하며 벤더 호출 자체가 발생하지 않습니다.

use std::sync::Arc;
use serde::{Deserialize, Serialize};
use singleton_macro::service;
use crate::{
    config::StorageConfig,
    core::errors::AppError,
    domain::dto::files::{FileListResponse, RegisterUploadRequest, StoredFileResponse},
    repositories::projects::project_repo::ProjectRepository,
    utils::rate_limiter::StorageRateLimits,
};

/// 벤더 업로드 세션 생성 요청 본문
#[derive(Debug, Serialize)]
struct VendorUploadRequest {
    file_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    size_bytes: Option<u64>,
    folder: String,
}

/// 벤더 측 파일 정보 응답
#[derive(Debug, Deserialize)]
struct VendorFileInfo {
    file_id: String,
    file_name: String,
    url: String,
}

/// 벤더 파일 목록 응답
#[derive(Debug, Deserialize)]
struct VendorFileList {
    files: Vec<VendorFileInfo>,
}

/// 파일 스토리지 게이트웨이 서비스
///
/// `#[service]` 매크로를 통해 싱글톤으로 관리됩니다. Rate Limiter 묶음은
/// main에서 생성하여 `ServiceLocator::set()`으로 등록한 인스턴스가 주입됩니다.
#[service(name = "file_storage")]
pub struct FileStorageService {
    /// 프로젝트 데이터 액세스 리포지토리 (자동 주입)
    ///
    /// 파일 작업 전 대상 프로젝트의 존재 확인에 사용합니다.
    project_repo: Arc<ProjectRepository>,

    /// 스토리지 API 보호용 Rate Limiter 묶음 (자동 주입)
    rate_limits: Arc<StorageRateLimits>,
}

impl FileStorageService {
    /// 파일 업로드 세션 등록
    ///
    /// 벤더에 업로드 세션을 생성하고 클라이언트가 직접 업로드할 URL을
    /// 발급받습니다. 업로드 예산(기본 10회/60초)을 사용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(StoredFileResponse)` - 벤더 파일 ID와 업로드 URL
    /// * `Err(AppError::RateLimitExceeded)` - 업로드 예산 소진
    /// * `Err(AppError::NotFound)` - 대상 프로젝트가 존재하지 않음
    /// * `Err(AppError::ExternalServiceError)` - 벤더 API 통신 오류
    pub async fn register_upload(&self, request: RegisterUploadRequest) -> Result<StoredFileResponse, AppError> {
        // 업로드 예산 확인 (벤더 호출 전에 거부)
        if !self.rate_limits.upload.check("storage:upload") {
            log::warn!("스토리지 업로드 요청 제한 초과: {}", request.file_name);
            return Err(AppError::RateLimitExceeded(
                "파일 업로드 요청이 너무 많습니다. 잠시 후 다시 시도해주세요".to_string(),
            ));
        }

        // 대상 프로젝트 확인
        let project = self
            .project_repo
            .find_by_id(&request.project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        let body = VendorUploadRequest {
            file_name: request.file_name,
            size_bytes: request.size_bytes,
            folder: format!("projects/{}", project.id_string().unwrap_or_default()),
        };

        let client = reqwest::Client::new();

        let response = client
            .post(format!("{}/v1/files", StorageConfig::base_url()))
            .bearer_auth(StorageConfig::api_token())
            .timeout(StorageConfig::request_timeout())
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("스토리지 업로드 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "스토리지 업로드 세션 생성 실패: {}", error_text
            )));
        }

        let info = response
            .json::<VendorFileInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("스토리지 응답 파싱 실패: {}", e)))?;

        log::info!("업로드 세션 생성: {} (파일 ID: {})", info.file_name, info.file_id);

        Ok(StoredFileResponse {
            file_id: info.file_id,
            file_name: info.file_name,
            url: info.url,
        })
    }

    /// 프로젝트 파일 목록 조회
    ///
    /// 일반 예산(기본 30회/60초)을 사용합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(FileListResponse)` - 프로젝트 폴더의 파일 목록 (다운로드 URL 포함)
    /// * `Err(AppError::RateLimitExceeded)` - 일반 예산 소진
    /// * `Err(AppError::NotFound)` - 대상 프로젝트가 존재하지 않음
    pub async fn list_project_files(&self, project_id: &str) -> Result<FileListResponse, AppError> {
        // 일반 예산 확인
        if !self.rate_limits.general.check("storage:general") {
            log::warn!("스토리지 조회 요청 제한 초과: 프로젝트 {}", project_id);
            return Err(AppError::RateLimitExceeded(
                "파일 조회 요청이 너무 많습니다. 잠시 후 다시 시도해주세요".to_string(),
            ));
        }

        // 대상 프로젝트 확인
        let project = self
            .project_repo
            .find_by_id(project_id)
            .await?
            .ok_or_else(|| AppError::NotFound("프로젝트를 찾을 수 없습니다".to_string()))?;

        let folder = format!("projects/{}", project.id_string().unwrap_or_default());

        let client = reqwest::Client::new();

        let response = client
            .get(format!("{}/v1/files", StorageConfig::base_url()))
            .bearer_auth(StorageConfig::api_token())
            .timeout(StorageConfig::request_timeout())
            .query(&[("folder", folder.as_str())])
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("스토리지 목록 요청 실패: {}", e)))?;

        if !response.status().is_success() {
            let error_text = response.text().await.unwrap_or_default();
            return Err(AppError::ExternalServiceError(format!(
                "스토리지 파일 목록 조회 실패: {}", error_text
            )));
        }

        let list = response
            .json::<VendorFileList>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("스토리지 응답 파싱 실패: {}", e)))?;

        Ok(FileListResponse {
            project_id: project_id.to_string(),
            files: list
                .files
                .into_iter()
                .map(|f| StoredFileResponse {
                    file_id: f.file_id,
                    file_name: f.file_name,
                    url: f.url,
                })
                .collect(),
        })
    }
}
